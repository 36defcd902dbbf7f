use crate::models::{Expense, FilteredExpense};

pub fn filter_expense_record(expense: &Expense) -> FilteredExpense {
	FilteredExpense {
		id: expense.id.to_string(),
		description: expense.description.to_owned(),
		amount: expense.amount,
		category: expense.category.to_owned(),
		category_color: expense.category_color.to_owned(),
		date: expense.date,
	}
}
