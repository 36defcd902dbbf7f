pub mod categories;

pub use self::categories::{
	add_category_handler, delete_category_handler, get_categories_handler,
	get_category_handler, update_category_handler,
};
