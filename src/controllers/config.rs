use actix_web::web;

use crate::controllers::auth::login_user_handler;
use crate::controllers::auth::register_user_handler;
use crate::controllers::budgets::{
	delete_budget_handler, get_budget_analysis_handler, get_budgets_handler,
	get_month_budgets_handler, upsert_budget_handler,
};
use crate::controllers::categories::{
	add_category_handler, delete_category_handler, get_categories_handler,
	get_category_handler, update_category_handler,
};
use crate::controllers::expenses::{
	add_expense_handler, delete_expense_handler, get_expense_handler, get_expenses_handler,
	get_monthly_stats_handler, get_stats_summary_handler, update_expense_handler,
};
use crate::controllers::users::{get_profile_handler, update_profile_handler};

pub fn config(conf: &mut web::ServiceConfig) {
	let scope = web::scope("/api")
		.service(register_user_handler)
		.service(login_user_handler)
		.service(get_profile_handler)
		.service(update_profile_handler)
		.service(get_stats_summary_handler)
		.service(get_monthly_stats_handler)
		.service(get_expenses_handler)
		.service(get_expense_handler)
		.service(add_expense_handler)
		.service(update_expense_handler)
		.service(delete_expense_handler)
		.service(get_categories_handler)
		.service(get_category_handler)
		.service(add_category_handler)
		.service(update_category_handler)
		.service(delete_category_handler)
		.service(get_budget_analysis_handler)
		.service(get_budgets_handler)
		.service(get_month_budgets_handler)
		.service(upsert_budget_handler)
		.service(delete_budget_handler);

	conf.service(scope);
}
