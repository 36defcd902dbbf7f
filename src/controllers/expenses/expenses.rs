use actix_web::{
	delete, get, post, put,
	web::{self, Path},
	HttpResponse, Responder,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use crate::analysis::listing::{self, ExpenseListOptions};
use crate::jwt_auth;
use crate::models::{
	CategoryTotal, Expense, FilteredExpense, HighestExpense, MonthlyTotal, SaveExpenseSchema,
};
use crate::utils::filter_expense_record;
use crate::AppState;

#[get("/expenses")]
pub async fn get_expenses_handler(
	opts: web::Query<ExpenseListOptions>,
	data: web::Data<AppState>,
	jwt: jwt_auth::JwtMiddleware,
) -> impl Responder {
	let query_result = sqlx::query_as::<_, Expense>(
		"SELECT e.*, c.color AS category_color
		FROM expenses e
		LEFT JOIN categories c ON e.category = c.name
		WHERE e.user_id = $1
		ORDER BY e.date DESC",
	)
	.bind(jwt.user_id)
	.fetch_all(&data.db)
	.await;

	let expenses = match query_result {
		Ok(expenses) => expenses,
		Err(err) => {
			log::error!("Error fetching expenses: {:?}", err);
			return HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error fetching expenses"}));
		}
	};

	let expenses = listing::apply(expenses, &opts);
	let total = listing::total(&expenses);

	let json_response = json!({
		"status": "success",
		"data": json!({
			"expenses": &expenses.iter().map(filter_expense_record).collect::<Vec<FilteredExpense>>(),
			"total": total
		})
	});

	HttpResponse::Ok().json(json_response)
}

#[get("/expenses/{id}")]
pub async fn get_expense_handler(
	path: Path<Uuid>,
	data: web::Data<AppState>,
	jwt: jwt_auth::JwtMiddleware,
) -> impl Responder {
	let expense_id = path.into_inner();

	let query_result = sqlx::query_as::<_, Expense>(
		"SELECT e.*, c.color AS category_color
		FROM expenses e
		LEFT JOIN categories c ON e.category = c.name
		WHERE e.id = $1 AND e.user_id = $2",
	)
	.bind(expense_id)
	.bind(jwt.user_id)
	.fetch_optional(&data.db)
	.await;

	match query_result {
		Ok(Some(expense)) => HttpResponse::Ok().json(json!({
			"status": "success",
			"data": json!({
				"expense": filter_expense_record(&expense)
			})
		})),
		Ok(None) => HttpResponse::NotFound()
			.json(json!({"status": "fail", "message": "Expense not found"})),
		Err(err) => {
			log::error!("Error fetching expense: {:?}", err);
			HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error fetching expense"}))
		}
	}
}

#[post("/expenses")]
pub async fn add_expense_handler(
	body: web::Json<SaveExpenseSchema>,
	data: web::Data<AppState>,
	jwt: jwt_auth::JwtMiddleware,
) -> impl Responder {
	if let Some(response) = validate_expense(&body) {
		return response;
	}

	let query_result = sqlx::query_as::<_, Expense>(
		"INSERT INTO expenses (user_id, description, amount, category, date)
		VALUES ($1, $2, $3, $4, $5)
		RETURNING *",
	)
	.bind(jwt.user_id)
	.bind(body.description.trim())
	.bind(body.amount)
	.bind(&body.category)
	.bind(body.date)
	.fetch_one(&data.db)
	.await;

	match query_result {
		Ok(expense) => HttpResponse::Created().json(json!({
			"status": "success",
			"data": json!({
				"expense": filter_expense_record(&expense)
			})
		})),
		Err(err) => {
			log::error!("Error creating expense: {:?}", err);
			HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error creating expense"}))
		}
	}
}

#[put("/expenses/{id}")]
pub async fn update_expense_handler(
	path: Path<Uuid>,
	body: web::Json<SaveExpenseSchema>,
	data: web::Data<AppState>,
	jwt: jwt_auth::JwtMiddleware,
) -> impl Responder {
	if let Some(response) = validate_expense(&body) {
		return response;
	}

	let expense_id = path.into_inner();

	let query_result = sqlx::query_as::<_, Expense>(
		"UPDATE expenses
		SET description = $1, amount = $2, category = $3, date = $4
		WHERE id = $5 AND user_id = $6
		RETURNING *",
	)
	.bind(body.description.trim())
	.bind(body.amount)
	.bind(&body.category)
	.bind(body.date)
	.bind(expense_id)
	.bind(jwt.user_id)
	.fetch_optional(&data.db)
	.await;

	match query_result {
		Ok(Some(expense)) => HttpResponse::Ok().json(json!({
			"status": "success",
			"data": json!({
				"expense": filter_expense_record(&expense)
			})
		})),
		Ok(None) => HttpResponse::NotFound()
			.json(json!({"status": "fail", "message": "Expense not found"})),
		Err(err) => {
			log::error!("Error updating expense: {:?}", err);
			HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error updating expense"}))
		}
	}
}

#[delete("/expenses/{id}")]
pub async fn delete_expense_handler(
	path: Path<Uuid>,
	data: web::Data<AppState>,
	jwt: jwt_auth::JwtMiddleware,
) -> impl Responder {
	let expense_id = path.into_inner();

	let query_result = sqlx::query("DELETE FROM expenses WHERE id = $1 AND user_id = $2")
		.bind(expense_id)
		.bind(jwt.user_id)
		.execute(&data.db)
		.await;

	match query_result {
		Ok(result) if result.rows_affected() == 0 => HttpResponse::NotFound()
			.json(json!({"status": "fail", "message": "Expense not found"})),
		Ok(_) => HttpResponse::Ok()
			.json(json!({"status": "success", "message": "Expense deleted successfully"})),
		Err(err) => {
			log::error!("Error deleting expense: {:?}", err);
			HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error deleting expense"}))
		}
	}
}

#[get("/expenses/stats/summary")]
pub async fn get_stats_summary_handler(
	data: web::Data<AppState>,
	jwt: jwt_auth::JwtMiddleware,
) -> impl Responder {
	let month = Utc::now().date_naive().format("%Y-%m").to_string();

	let total_result = sqlx::query_scalar::<_, Decimal>(
		"SELECT COALESCE(SUM(amount), 0)
		FROM expenses
		WHERE user_id = $1 AND to_char(date, 'YYYY-MM') = $2",
	)
	.bind(jwt.user_id)
	.bind(&month)
	.fetch_one(&data.db)
	.await;

	let highest_result = sqlx::query_as::<_, HighestExpense>(
		"SELECT amount, category
		FROM expenses
		WHERE user_id = $1 AND to_char(date, 'YYYY-MM') = $2
		ORDER BY amount DESC
		LIMIT 1",
	)
	.bind(jwt.user_id)
	.bind(&month)
	.fetch_optional(&data.db)
	.await;

	let category_result = sqlx::query_as::<_, CategoryTotal>(
		"SELECT category, COALESCE(SUM(amount), 0) AS total
		FROM expenses
		WHERE user_id = $1 AND to_char(date, 'YYYY-MM') = $2
		GROUP BY category
		ORDER BY total DESC",
	)
	.bind(jwt.user_id)
	.bind(&month)
	.fetch_all(&data.db)
	.await;

	let (total, highest, by_category) = match (total_result, highest_result, category_result) {
		(Ok(total), Ok(highest), Ok(by_category)) => (total, highest, by_category),
		(total, highest, by_category) => {
			log::error!(
				"Error fetching expense statistics: {:?} {:?} {:?}",
				total.err(),
				highest.err(),
				by_category.err()
			);
			return HttpResponse::InternalServerError().json(
				json!({"status": "error", "message": "Error fetching expense statistics"}),
			);
		}
	};

	let highest = highest.unwrap_or(HighestExpense {
		amount: Decimal::ZERO,
		category: "None".to_string(),
	});

	let json_response = json!({
		"status": "success",
		"data": json!({
			"total_expenses": total,
			"highest_expense": highest,
			"expenses_by_category": by_category
		})
	});

	HttpResponse::Ok().json(json_response)
}

#[get("/expenses/stats/monthly")]
pub async fn get_monthly_stats_handler(
	data: web::Data<AppState>,
	jwt: jwt_auth::JwtMiddleware,
) -> impl Responder {
	let query_result = sqlx::query_as::<_, MonthlyTotal>(
		"SELECT to_char(date, 'YYYY-MM') AS month, COALESCE(SUM(amount), 0) AS total
		FROM expenses
		WHERE user_id = $1 AND date >= CURRENT_DATE - INTERVAL '6 months'
		GROUP BY to_char(date, 'YYYY-MM')
		ORDER BY month",
	)
	.bind(jwt.user_id)
	.fetch_all(&data.db)
	.await;

	match query_result {
		Ok(months) => HttpResponse::Ok().json(json!({
			"status": "success",
			"data": json!({
				"months": months
			})
		})),
		Err(err) => {
			log::error!("Error fetching monthly expenses: {:?}", err);
			HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error fetching monthly expenses"}))
		}
	}
}

fn validate_expense(body: &SaveExpenseSchema) -> Option<HttpResponse> {
	if body.description.trim().is_empty() || body.category.trim().is_empty() {
		return Some(
			HttpResponse::BadRequest()
				.json(json!({"status": "fail", "message": "Please provide all required fields"})),
		);
	}

	if body.amount <= Decimal::ZERO {
		return Some(
			HttpResponse::BadRequest()
				.json(json!({"status": "fail", "message": "Amount must be greater than zero"})),
		);
	}

	None
}
