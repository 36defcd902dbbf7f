use chrono::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `category_color` is only populated by list queries joining `categories`.
#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone)]
pub struct Expense {
	pub id: Uuid,
	pub user_id: Uuid,
	pub description: String,
	pub amount: Decimal,
	pub category: String,
	pub date: NaiveDate,
	pub created_at: Option<DateTime<Utc>>,
	#[sqlx(default)]
	pub category_color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SaveExpenseSchema {
	pub description: String,
	pub amount: Decimal,
	pub category: String,
	pub date: NaiveDate,
}

#[derive(Debug, sqlx::FromRow, Serialize, Clone)]
pub struct CategoryTotal {
	pub category: String,
	pub total: Decimal,
}

#[derive(Debug, sqlx::FromRow, Serialize, Clone)]
pub struct MonthlyTotal {
	pub month: String,
	pub total: Decimal,
}

#[derive(Debug, sqlx::FromRow, Serialize, Clone)]
pub struct HighestExpense {
	pub amount: Decimal,
	pub category: String,
}
