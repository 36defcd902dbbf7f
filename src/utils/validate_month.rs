use chrono::NaiveDate;

/// Months travel as `YYYY-MM` strings.
pub fn validate_month(month: &str) -> bool {
	month.len() == 7 && NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_calendar_months() {
		assert!(validate_month("2024-01"));
		assert!(validate_month("1999-12"));
	}

	#[test]
	fn rejects_everything_else() {
		assert!(!validate_month("2024-13"));
		assert!(!validate_month("2024-00"));
		assert!(!validate_month("2024-1"));
		assert!(!validate_month("2024-01-01"));
		assert!(!validate_month("january"));
		assert!(!validate_month(""));
	}
}
