use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::Expense;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
	Description,
	Category,
	Date,
	Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	Asc,
	Desc,
}

/// View parameters of the expense list. Empty strings count as absent,
/// mirroring how the form fields arrive.
#[derive(Debug, Default, Deserialize)]
pub struct ExpenseListOptions {
	pub keyword: Option<String>,
	pub category: Option<String>,
	pub date_from: Option<NaiveDate>,
	pub date_to: Option<NaiveDate>,
	pub sort: Option<SortKey>,
	pub direction: Option<SortDirection>,
}

/// Filters conjunctively, then sorts stably on the requested key; without a
/// sort key the input order is kept.
pub fn apply(expenses: Vec<Expense>, opts: &ExpenseListOptions) -> Vec<Expense> {
	let mut expenses: Vec<Expense> = expenses
		.into_iter()
		.filter(|expense| matches(expense, opts))
		.collect();

	if let Some(key) = opts.sort {
		let direction = opts.direction.unwrap_or(SortDirection::Asc);
		expenses.sort_by(|a, b| {
			let ordering = match key {
				SortKey::Description => a.description.cmp(&b.description),
				SortKey::Category => a.category.cmp(&b.category),
				SortKey::Date => a.date.cmp(&b.date),
				SortKey::Amount => a.amount.cmp(&b.amount),
			};
			match direction {
				SortDirection::Asc => ordering,
				SortDirection::Desc => ordering.reverse(),
			}
		});
	}

	expenses
}

pub fn total(expenses: &[Expense]) -> Decimal {
	expenses.iter().map(|expense| expense.amount).sum()
}

fn matches(expense: &Expense, opts: &ExpenseListOptions) -> bool {
	if let Some(keyword) = opts.keyword.as_deref().filter(|k| !k.is_empty()) {
		let keyword = keyword.to_lowercase();
		if !expense.description.to_lowercase().contains(&keyword)
			&& !expense.category.to_lowercase().contains(&keyword)
		{
			return false;
		}
	}

	if let Some(category) = opts.category.as_deref().filter(|c| !c.is_empty()) {
		if expense.category != category {
			return false;
		}
	}

	if let Some(from) = opts.date_from {
		if expense.date < from {
			return false;
		}
	}

	if let Some(to) = opts.date_to {
		if expense.date > to {
			return false;
		}
	}

	true
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::Utc;
	use uuid::Uuid;

	fn expense(description: &str, category: &str, date: &str, amount: &str) -> Expense {
		Expense {
			id: Uuid::new_v4(),
			user_id: Uuid::new_v4(),
			description: description.to_string(),
			amount: amount.parse().unwrap(),
			category: category.to_string(),
			date: date.parse().unwrap(),
			created_at: Some(Utc::now()),
			category_color: None,
		}
	}

	fn sample() -> Vec<Expense> {
		vec![
			expense("Coffee", "Food", "2024-01-05", "4"),
			expense("Rent", "Housing", "2024-01-01", "1000"),
		]
	}

	fn descriptions(expenses: &[Expense]) -> Vec<&str> {
		expenses
			.iter()
			.map(|expense| expense.description.as_str())
			.collect()
	}

	#[test]
	fn keyword_matches_description_case_insensitively() {
		let opts = ExpenseListOptions {
			keyword: Some("coffee".to_string()),
			..Default::default()
		};

		let filtered = apply(sample(), &opts);
		assert_eq!(descriptions(&filtered), vec!["Coffee"]);
		assert_eq!(total(&filtered), Decimal::from(4));
	}

	#[test]
	fn keyword_also_matches_the_category() {
		let opts = ExpenseListOptions {
			keyword: Some("hous".to_string()),
			..Default::default()
		};

		assert_eq!(descriptions(&apply(sample(), &opts)), vec!["Rent"]);
	}

	#[test]
	fn filters_are_conjunctive() {
		let opts = ExpenseListOptions {
			keyword: Some("o".to_string()),
			category: Some("Food".to_string()),
			..Default::default()
		};

		assert_eq!(descriptions(&apply(sample(), &opts)), vec!["Coffee"]);
	}

	#[test]
	fn empty_strings_do_not_filter() {
		let opts = ExpenseListOptions {
			keyword: Some(String::new()),
			category: Some(String::new()),
			..Default::default()
		};

		assert_eq!(apply(sample(), &opts).len(), 2);
	}

	#[test]
	fn date_bounds_are_inclusive() {
		let opts = ExpenseListOptions {
			date_from: Some("2024-01-01".parse().unwrap()),
			date_to: Some("2024-01-05".parse().unwrap()),
			..Default::default()
		};
		assert_eq!(apply(sample(), &opts).len(), 2);

		let opts = ExpenseListOptions {
			date_from: Some("2024-01-02".parse().unwrap()),
			..Default::default()
		};
		assert_eq!(descriptions(&apply(sample(), &opts)), vec!["Coffee"]);

		let opts = ExpenseListOptions {
			date_to: Some("2024-01-04".parse().unwrap()),
			..Default::default()
		};
		assert_eq!(descriptions(&apply(sample(), &opts)), vec!["Rent"]);
	}

	#[test]
	fn sorts_by_amount_in_both_directions() {
		let opts = ExpenseListOptions {
			sort: Some(SortKey::Amount),
			..Default::default()
		};
		assert_eq!(descriptions(&apply(sample(), &opts)), vec!["Coffee", "Rent"]);

		let opts = ExpenseListOptions {
			sort: Some(SortKey::Amount),
			direction: Some(SortDirection::Desc),
			..Default::default()
		};
		assert_eq!(descriptions(&apply(sample(), &opts)), vec!["Rent", "Coffee"]);
	}

	#[test]
	fn sorts_by_date_chronologically() {
		let opts = ExpenseListOptions {
			sort: Some(SortKey::Date),
			..Default::default()
		};

		assert_eq!(descriptions(&apply(sample(), &opts)), vec!["Rent", "Coffee"]);
	}

	#[test]
	fn ties_keep_input_order() {
		let rows = vec![
			expense("First", "Food", "2024-01-01", "10"),
			expense("Second", "Food", "2024-01-02", "10"),
			expense("Third", "Food", "2024-01-03", "10"),
		];

		let opts = ExpenseListOptions {
			sort: Some(SortKey::Amount),
			..Default::default()
		};
		assert_eq!(
			descriptions(&apply(rows.clone(), &opts)),
			vec!["First", "Second", "Third"]
		);

		let opts = ExpenseListOptions {
			sort: Some(SortKey::Amount),
			direction: Some(SortDirection::Desc),
			..Default::default()
		};
		assert_eq!(
			descriptions(&apply(rows, &opts)),
			vec!["First", "Second", "Third"]
		);
	}

	#[test]
	fn total_covers_only_the_filtered_set() {
		let opts = ExpenseListOptions {
			category: Some("Housing".to_string()),
			..Default::default()
		};

		let filtered = apply(sample(), &opts);
		assert_eq!(total(&filtered), Decimal::from(1000));
	}
}
