pub mod users;

pub use self::users::{get_profile_handler, update_profile_handler};
