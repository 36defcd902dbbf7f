use actix_web::{
	delete, get, post,
	web::{self, Path},
	HttpResponse, Responder,
};
use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use crate::analysis::budget::analyze;
use crate::jwt_auth;
use crate::models::{Budget, FilteredBudget, MonthBudget, MonthSpending, SaveBudgetSchema};
use crate::utils::{filter_budget_record, validate_month};
use crate::AppState;

#[get("/budgets")]
pub async fn get_budgets_handler(
	data: web::Data<AppState>,
	jwt: jwt_auth::JwtMiddleware,
) -> impl Responder {
	let query_result = sqlx::query_as::<_, Budget>(
		"SELECT b.*, c.color AS category_color
		FROM budgets b
		LEFT JOIN categories c ON b.category = c.name
		WHERE b.user_id = $1
		ORDER BY b.month DESC, b.category ASC",
	)
	.bind(jwt.user_id)
	.fetch_all(&data.db)
	.await;

	match query_result {
		Ok(budgets) => HttpResponse::Ok().json(json!({
			"status": "success",
			"data": json!({
				"budgets": &budgets.iter().map(filter_budget_record).collect::<Vec<FilteredBudget>>()
			})
		})),
		Err(err) => {
			log::error!("Error fetching budgets: {:?}", err);
			HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error fetching budgets"}))
		}
	}
}

#[get("/budgets/{month}")]
pub async fn get_month_budgets_handler(
	path: Path<String>,
	data: web::Data<AppState>,
	jwt: jwt_auth::JwtMiddleware,
) -> impl Responder {
	let month = path.into_inner();

	let query_result = sqlx::query_as::<_, Budget>(
		"SELECT b.*, c.color AS category_color
		FROM budgets b
		LEFT JOIN categories c ON b.category = c.name
		WHERE b.user_id = $1 AND b.month = $2
		ORDER BY b.category ASC",
	)
	.bind(jwt.user_id)
	.bind(&month)
	.fetch_all(&data.db)
	.await;

	match query_result {
		Ok(budgets) => HttpResponse::Ok().json(json!({
			"status": "success",
			"data": json!({
				"budgets": &budgets.iter().map(filter_budget_record).collect::<Vec<FilteredBudget>>()
			})
		})),
		Err(err) => {
			log::error!("Error fetching budget for month: {:?}", err);
			HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error fetching budget data"}))
		}
	}
}

#[post("/budgets")]
pub async fn upsert_budget_handler(
	body: web::Json<SaveBudgetSchema>,
	data: web::Data<AppState>,
	jwt: jwt_auth::JwtMiddleware,
) -> impl Responder {
	if body.category.trim().is_empty() || !validate_month(&body.month) {
		return HttpResponse::BadRequest()
			.json(json!({"status": "fail", "message": "Please provide month, category and amount"}));
	}

	if body.amount <= Decimal::ZERO {
		return HttpResponse::BadRequest()
			.json(json!({"status": "fail", "message": "Amount must be greater than zero"}));
	}

	// One row per (user, month, category); the conflict arm makes the
	// upsert atomic under concurrent saves.
	let query_result = sqlx::query_as::<_, Budget>(
		"INSERT INTO budgets (user_id, month, category, amount)
		VALUES ($1, $2, $3, $4)
		ON CONFLICT (user_id, month, category) DO UPDATE SET amount = EXCLUDED.amount
		RETURNING *",
	)
	.bind(jwt.user_id)
	.bind(&body.month)
	.bind(body.category.trim())
	.bind(body.amount)
	.fetch_one(&data.db)
	.await;

	match query_result {
		Ok(budget) => HttpResponse::Created().json(json!({
			"status": "success",
			"data": json!({
				"budget": filter_budget_record(&budget)
			})
		})),
		Err(err) => {
			log::error!("Error saving budget: {:?}", err);
			HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error saving budget"}))
		}
	}
}

#[delete("/budgets/{id}")]
pub async fn delete_budget_handler(
	path: Path<Uuid>,
	data: web::Data<AppState>,
	jwt: jwt_auth::JwtMiddleware,
) -> impl Responder {
	let budget_id = path.into_inner();

	let query_result = sqlx::query("DELETE FROM budgets WHERE id = $1 AND user_id = $2")
		.bind(budget_id)
		.bind(jwt.user_id)
		.execute(&data.db)
		.await;

	match query_result {
		Ok(result) if result.rows_affected() == 0 => HttpResponse::NotFound()
			.json(json!({"status": "fail", "message": "Budget not found"})),
		Ok(_) => HttpResponse::Ok()
			.json(json!({"status": "success", "message": "Budget deleted successfully"})),
		Err(err) => {
			log::error!("Error deleting budget: {:?}", err);
			HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error deleting budget"}))
		}
	}
}

#[get("/budgets/analysis/{month}")]
pub async fn get_budget_analysis_handler(
	path: Path<String>,
	data: web::Data<AppState>,
	jwt: jwt_auth::JwtMiddleware,
) -> impl Responder {
	let month = path.into_inner();

	let budgets_result = sqlx::query_as::<_, MonthBudget>(
		"SELECT category, amount
		FROM budgets
		WHERE user_id = $1 AND month = $2",
	)
	.bind(jwt.user_id)
	.bind(&month)
	.fetch_all(&data.db)
	.await;

	let actuals_result = sqlx::query_as::<_, MonthSpending>(
		"SELECT category, COALESCE(SUM(amount), 0) AS spent
		FROM expenses
		WHERE user_id = $1 AND to_char(date, 'YYYY-MM') = $2
		GROUP BY category",
	)
	.bind(jwt.user_id)
	.bind(&month)
	.fetch_all(&data.db)
	.await;

	let (budgets, actuals) = match (budgets_result, actuals_result) {
		(Ok(budgets), Ok(actuals)) => (budgets, actuals),
		(budgets, actuals) => {
			log::error!(
				"Error getting budget analysis: {:?} {:?}",
				budgets.err(),
				actuals.err()
			);
			return HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error analyzing budget data"}));
		}
	};

	let analysis = analyze(&budgets, &actuals);

	let json_response = json!({
		"status": "success",
		"data": json!({
			"month": month,
			"categories": analysis.categories,
			"summary": analysis.summary
		})
	});

	HttpResponse::Ok().json(json_response)
}
