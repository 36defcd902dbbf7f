pub mod filter_budget_record;
pub mod filter_category_record;
pub mod filter_expense_record;
pub mod filter_user_record;
pub mod validate_month;

pub use self::filter_budget_record::filter_budget_record;
pub use self::filter_category_record::filter_category_record;
pub use self::filter_expense_record::filter_expense_record;
pub use self::filter_user_record::filter_user_record;
pub use self::validate_month::validate_month;
