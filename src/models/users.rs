use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone)]
pub struct User {
	pub id: Uuid,
	pub name: String,
	pub email: String,
	pub password: String,
	pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterUserSchema {
	pub name: String,
	pub email: String,
	pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginUserSchema {
	pub email: String,
	pub password: String,
}

/// Partial update; a password change requires both fields.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileSchema {
	pub name: Option<String>,
	pub email: Option<String>,
	pub current_password: Option<String>,
	pub new_password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
	pub sub: String,
	pub email: String,
	pub iat: usize,
	pub exp: usize,
}
