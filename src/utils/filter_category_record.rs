use crate::models::{Category, FilteredCategory};

pub fn filter_category_record(category: &Category) -> FilteredCategory {
	FilteredCategory {
		id: category.id.to_string(),
		name: category.name.to_owned(),
		color: category.color.to_owned(),
	}
}
