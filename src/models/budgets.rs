use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone)]
pub struct Budget {
	pub id: Uuid,
	pub user_id: Uuid,
	pub month: String,
	pub category: String,
	pub amount: Decimal,
	#[sqlx(default)]
	pub category_color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SaveBudgetSchema {
	pub month: String,
	pub category: String,
	pub amount: Decimal,
}

/// One budget row of a month, as fed to the analysis.
#[derive(Debug, sqlx::FromRow, Clone)]
pub struct MonthBudget {
	pub category: String,
	pub amount: Decimal,
}

/// Per-category expense sum of a month, as fed to the analysis.
#[derive(Debug, sqlx::FromRow, Clone)]
pub struct MonthSpending {
	pub category: String,
	pub spent: Decimal,
}
