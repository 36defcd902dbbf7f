use actix_web::{
	delete, get, post, put,
	web::{self, Path},
	HttpResponse, Responder,
};
use serde_json::json;
use uuid::Uuid;

use crate::models::{Category, Count, FilteredCategory, SaveCategorySchema};
use crate::utils::filter_category_record;
use crate::AppState;

const DEFAULT_COLOR: &str = "#00b8d4";

#[get("/categories")]
pub async fn get_categories_handler(data: web::Data<AppState>) -> impl Responder {
	let query_result = sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name")
		.fetch_all(&data.db)
		.await;

	let categories = match query_result {
		Ok(categories) => categories,
		Err(err) => {
			log::error!("Error fetching categories: {:?}", err);
			return HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error fetching categories"}));
		}
	};

	let json_response = json!({
		"status": "success",
		"data": json!({
			"categories": &categories.into_iter().map(|category| filter_category_record(&category)).collect::<Vec<FilteredCategory>>()
		})
	});

	HttpResponse::Ok().json(json_response)
}

#[get("/categories/{id}")]
pub async fn get_category_handler(path: Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
	let category_id = path.into_inner();

	let query_result = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
		.bind(category_id)
		.fetch_optional(&data.db)
		.await;

	match query_result {
		Ok(Some(category)) => HttpResponse::Ok().json(json!({
			"status": "success",
			"data": json!({
				"category": filter_category_record(&category)
			})
		})),
		Ok(None) => HttpResponse::NotFound()
			.json(json!({"status": "fail", "message": "Category not found"})),
		Err(err) => {
			log::error!("Error fetching category: {:?}", err);
			HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error fetching category"}))
		}
	}
}

#[post("/categories")]
pub async fn add_category_handler(
	body: web::Json<SaveCategorySchema>,
	data: web::Data<AppState>,
) -> impl Responder {
	let name = body.name.trim();

	if name.is_empty() {
		return HttpResponse::BadRequest()
			.json(json!({"status": "fail", "message": "Please provide a category name"}));
	}

	let color = body.color.as_deref().unwrap_or(DEFAULT_COLOR);

	let query_result = sqlx::query_as::<_, Category>(
		"INSERT INTO categories (name, color) VALUES ($1, $2) RETURNING *",
	)
	.bind(name)
	.bind(color)
	.fetch_one(&data.db)
	.await;

	match query_result {
		Ok(category) => HttpResponse::Created().json(json!({
			"status": "success",
			"data": json!({
				"category": filter_category_record(&category)
			})
		})),
		Err(err) if is_unique_violation(&err) => HttpResponse::BadRequest()
			.json(json!({"status": "fail", "message": "Category already exists"})),
		Err(err) => {
			log::error!("Error creating category: {:?}", err);
			HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error creating category"}))
		}
	}
}

#[put("/categories/{id}")]
pub async fn update_category_handler(
	path: Path<Uuid>,
	body: web::Json<SaveCategorySchema>,
	data: web::Data<AppState>,
) -> impl Responder {
	let name = body.name.trim();

	if name.is_empty() {
		return HttpResponse::BadRequest()
			.json(json!({"status": "fail", "message": "Please provide a category name"}));
	}

	let category_id = path.into_inner();
	let color = body.color.as_deref().unwrap_or(DEFAULT_COLOR);

	let query_result = sqlx::query_as::<_, Category>(
		"UPDATE categories SET name = $1, color = $2 WHERE id = $3 RETURNING *",
	)
	.bind(name)
	.bind(color)
	.bind(category_id)
	.fetch_optional(&data.db)
	.await;

	match query_result {
		Ok(Some(category)) => HttpResponse::Ok().json(json!({
			"status": "success",
			"data": json!({
				"category": filter_category_record(&category)
			})
		})),
		Ok(None) => HttpResponse::NotFound()
			.json(json!({"status": "fail", "message": "Category not found"})),
		Err(err) if is_unique_violation(&err) => HttpResponse::BadRequest()
			.json(json!({"status": "fail", "message": "Category name already exists"})),
		Err(err) => {
			log::error!("Error updating category: {:?}", err);
			HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error updating category"}))
		}
	}
}

#[delete("/categories/{id}")]
pub async fn delete_category_handler(path: Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
	let category_id = path.into_inner();

	// Expenses reference categories by name, so the guard joins on it.
	let count_query_result = sqlx::query_as::<_, Count>(
		"SELECT count(*) AS count
		FROM expenses e
		JOIN categories c ON e.category = c.name
		WHERE c.id = $1",
	)
	.bind(category_id)
	.fetch_one(&data.db)
	.await;

	let in_use = match count_query_result {
		Ok(count) => count.count.unwrap_or(0) > 0,
		Err(err) => {
			log::error!("Error checking category usage: {:?}", err);
			return HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error deleting category"}));
		}
	};

	if in_use {
		return HttpResponse::BadRequest().json(json!({
			"status": "fail",
			"message": "Cannot delete category because it is used in expenses. Update or delete those expenses first."
		}));
	}

	let query_result = sqlx::query("DELETE FROM categories WHERE id = $1")
		.bind(category_id)
		.execute(&data.db)
		.await;

	match query_result {
		Ok(result) if result.rows_affected() == 0 => HttpResponse::NotFound()
			.json(json!({"status": "fail", "message": "Category not found"})),
		Ok(_) => HttpResponse::Ok()
			.json(json!({"status": "success", "message": "Category deleted successfully"})),
		Err(err) => {
			log::error!("Error deleting category: {:?}", err);
			HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error deleting category"}))
		}
	}
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
	err.as_database_error()
		.map(|db_err| db_err.is_unique_violation())
		.unwrap_or(false)
}
