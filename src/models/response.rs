use chrono::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FilteredUser {
	pub id: String,
	pub name: String,
	pub email: String,
	pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct FilteredCategory {
	pub id: String,
	pub name: String,
	pub color: String,
}

#[derive(Debug, Serialize)]
pub struct FilteredExpense {
	pub id: String,
	pub description: String,
	pub amount: Decimal,
	pub category: String,
	pub category_color: Option<String>,
	pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct FilteredBudget {
	pub id: String,
	pub month: String,
	pub category: String,
	pub category_color: Option<String>,
	pub amount: Decimal,
}
