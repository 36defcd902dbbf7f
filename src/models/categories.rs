use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone)]
pub struct Category {
	pub id: Uuid,
	pub name: String,
	pub color: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveCategorySchema {
	pub name: String,
	pub color: Option<String>,
}
