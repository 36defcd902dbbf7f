pub mod budgets;

pub use self::budgets::{
	delete_budget_handler, get_budget_analysis_handler, get_budgets_handler,
	get_month_budgets_handler, upsert_budget_handler,
};
