use std::collections::HashMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{MonthBudget, MonthSpending};

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
	Good,
	Warning,
	Over,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CategoryAnalysis {
	pub category: String,
	pub budgeted: Decimal,
	pub spent: Decimal,
	pub remaining: Decimal,
	pub percentage: f64,
	pub status: BudgetStatus,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct BudgetSummary {
	pub budgeted: Decimal,
	pub spent: Decimal,
	pub remaining: Decimal,
	pub percentage: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct BudgetAnalysis {
	pub categories: Vec<CategoryAnalysis>,
	pub summary: BudgetSummary,
}

/// Compares budgeted against actual spending for one user and month.
///
/// One output row per budget row, in input order. A category missing from
/// `actuals` counts as zero spent. The reported `percentage` is capped at 100
/// for display while `status` is classified from the uncapped ratio, and
/// spending in categories without a budget row never reaches the summary.
pub fn analyze(budgets: &[MonthBudget], actuals: &[MonthSpending]) -> BudgetAnalysis {
	let spent_by_category: HashMap<&str, Decimal> = actuals
		.iter()
		.map(|actual| (actual.category.as_str(), actual.spent))
		.collect();

	let hundred = Decimal::from(100);
	let warning_threshold = Decimal::from(80);

	let mut total_budgeted = Decimal::ZERO;
	let mut total_spent = Decimal::ZERO;

	let categories = budgets
		.iter()
		.map(|budget| {
			let spent = spent_by_category
				.get(budget.category.as_str())
				.copied()
				.unwrap_or(Decimal::ZERO);
			let remaining = budget.amount - spent;
			let ratio = if budget.amount > Decimal::ZERO {
				spent / budget.amount * hundred
			} else {
				Decimal::ZERO
			};

			total_budgeted += budget.amount;
			total_spent += spent;

			let status = if ratio > hundred {
				BudgetStatus::Over
			} else if ratio > warning_threshold {
				BudgetStatus::Warning
			} else {
				BudgetStatus::Good
			};

			CategoryAnalysis {
				category: budget.category.clone(),
				budgeted: budget.amount,
				spent,
				remaining,
				percentage: ratio.min(hundred).to_f64().unwrap_or(0.0),
				status,
			}
		})
		.collect();

	let summary_ratio = if total_budgeted > Decimal::ZERO {
		total_spent / total_budgeted * hundred
	} else {
		Decimal::ZERO
	};

	BudgetAnalysis {
		categories,
		summary: BudgetSummary {
			budgeted: total_budgeted,
			spent: total_spent,
			remaining: total_budgeted - total_spent,
			percentage: summary_ratio.to_f64().unwrap_or(0.0),
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn dec(value: &str) -> Decimal {
		value.parse().unwrap()
	}

	fn budget(category: &str, amount: &str) -> MonthBudget {
		MonthBudget {
			category: category.to_string(),
			amount: dec(amount),
		}
	}

	fn spending(category: &str, spent: &str) -> MonthSpending {
		MonthSpending {
			category: category.to_string(),
			spent: dec(spent),
		}
	}

	#[test]
	fn one_row_per_budget_with_zero_default() {
		let budgets = vec![budget("Food", "200"), budget("Rent", "1000")];
		let analysis = analyze(&budgets, &[]);

		assert_eq!(analysis.categories.len(), 2);
		for (row, input) in analysis.categories.iter().zip(&budgets) {
			assert_eq!(row.spent, Decimal::ZERO);
			assert_eq!(row.remaining, input.amount);
			assert_eq!(row.status, BudgetStatus::Good);
		}
	}

	#[test]
	fn input_order_is_preserved() {
		let budgets = vec![budget("Zoo", "10"), budget("Aquarium", "10")];
		let analysis = analyze(&budgets, &[]);

		assert_eq!(analysis.categories[0].category, "Zoo");
		assert_eq!(analysis.categories[1].category, "Aquarium");
	}

	#[test]
	fn over_is_strictly_above_the_budget() {
		let budgets = vec![budget("Food", "100")];

		let at_limit = analyze(&budgets, &[spending("Food", "100")]);
		assert_eq!(at_limit.categories[0].status, BudgetStatus::Warning);

		let above = analyze(&budgets, &[spending("Food", "100.01")]);
		assert_eq!(above.categories[0].status, BudgetStatus::Over);
	}

	#[test]
	fn warning_is_strictly_above_eighty_percent() {
		let budgets = vec![budget("Food", "100")];

		let at_threshold = analyze(&budgets, &[spending("Food", "80")]);
		assert_eq!(at_threshold.categories[0].status, BudgetStatus::Good);

		let above = analyze(&budgets, &[spending("Food", "80.01")]);
		assert_eq!(above.categories[0].status, BudgetStatus::Warning);
	}

	#[test]
	fn display_percentage_is_capped_but_status_is_not() {
		let analysis = analyze(&[budget("Food", "100")], &[spending("Food", "250")]);
		let row = &analysis.categories[0];

		assert_eq!(row.percentage, 100.0);
		assert_eq!(row.status, BudgetStatus::Over);
		assert_eq!(row.remaining, dec("-150"));
	}

	#[test]
	fn zero_budget_never_divides() {
		let analysis = analyze(&[budget("Food", "0")], &[spending("Food", "50")]);
		let row = &analysis.categories[0];

		assert_eq!(row.percentage, 0.0);
		assert_eq!(row.status, BudgetStatus::Good);
		assert_eq!(row.remaining, dec("-50"));
		assert_eq!(analysis.summary.percentage, 0.0);
	}

	#[test]
	fn analyze_is_pure() {
		let budgets = vec![budget("Food", "200"), budget("Fun", "50")];
		let actuals = vec![spending("Food", "180"), spending("Fun", "120")];

		assert_eq!(analyze(&budgets, &actuals), analyze(&budgets, &actuals));
	}

	#[test]
	fn unbudgeted_spending_is_excluded_from_the_summary() {
		let analysis = analyze(
			&[budget("Food", "200")],
			&[spending("Food", "50"), spending("Travel", "999")],
		);

		assert_eq!(analysis.summary.budgeted, dec("200"));
		assert_eq!(analysis.summary.spent, dec("50"));
		assert_eq!(analysis.summary.remaining, dec("150"));
		assert_eq!(analysis.summary.percentage, 25.0);
	}

	#[test]
	fn food_within_budget_is_a_warning_at_ninety_percent() {
		let analysis = analyze(&[budget("Food", "200")], &[spending("Food", "180")]);

		let row = &analysis.categories[0];
		assert_eq!(row.budgeted, dec("200"));
		assert_eq!(row.spent, dec("180"));
		assert_eq!(row.remaining, dec("20"));
		assert_eq!(row.percentage, 90.0);
		assert_eq!(row.status, BudgetStatus::Warning);

		assert_eq!(analysis.summary.budgeted, dec("200"));
		assert_eq!(analysis.summary.spent, dec("180"));
		assert_eq!(analysis.summary.remaining, dec("20"));
		assert_eq!(analysis.summary.percentage, 90.0);
	}

	#[test]
	fn untouched_budget_is_good() {
		let analysis = analyze(&[budget("Rent", "1000")], &[]);

		let row = &analysis.categories[0];
		assert_eq!(row.spent, Decimal::ZERO);
		assert_eq!(row.remaining, dec("1000"));
		assert_eq!(row.percentage, 0.0);
		assert_eq!(row.status, BudgetStatus::Good);
	}

	#[test]
	fn blown_budget_is_over_with_capped_percentage() {
		let analysis = analyze(&[budget("Fun", "50")], &[spending("Fun", "120")]);

		let row = &analysis.categories[0];
		assert_eq!(row.percentage, 100.0);
		assert_eq!(row.status, BudgetStatus::Over);
		assert_eq!(row.remaining, dec("-70"));
	}
}
