pub mod expenses;

pub use self::expenses::{
	add_expense_handler, delete_expense_handler, get_expense_handler, get_expenses_handler,
	get_monthly_stats_handler, get_stats_summary_handler, update_expense_handler,
};
