use crate::models::{Budget, FilteredBudget};

pub fn filter_budget_record(budget: &Budget) -> FilteredBudget {
	FilteredBudget {
		id: budget.id.to_string(),
		month: budget.month.to_owned(),
		category: budget.category.to_owned(),
		category_color: budget.category_color.to_owned(),
		amount: budget.amount,
	}
}
