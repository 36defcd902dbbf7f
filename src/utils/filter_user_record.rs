use crate::models::{FilteredUser, User};

/// Never exposes the password hash.
pub fn filter_user_record(user: &User) -> FilteredUser {
	FilteredUser {
		id: user.id.to_string(),
		name: user.name.to_owned(),
		email: user.email.to_owned(),
		created_at: user.created_at.to_owned(),
	}
}
