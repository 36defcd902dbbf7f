use actix_web::{get, put, web, HttpResponse, Responder};
use argon2::{
	password_hash::{rand_core::OsRng, PasswordHash, SaltString},
	Argon2, PasswordHasher, PasswordVerifier,
};
use serde_json::json;

use crate::jwt_auth;
use crate::models::{UpdateProfileSchema, User};
use crate::utils::filter_user_record;
use crate::AppState;

#[get("/users/profile")]
pub async fn get_profile_handler(
	data: web::Data<AppState>,
	jwt: jwt_auth::JwtMiddleware,
) -> impl Responder {
	let query_result = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
		.bind(jwt.user_id)
		.fetch_optional(&data.db)
		.await;

	match query_result {
		Ok(Some(user)) => HttpResponse::Ok().json(json!({
			"status": "success",
			"data": json!({
				"user": filter_user_record(&user)
			})
		})),
		Ok(None) => HttpResponse::NotFound()
			.json(json!({"status": "fail", "message": "User not found"})),
		Err(err) => {
			log::error!("Error fetching user profile: {:?}", err);
			HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error fetching user profile"}))
		}
	}
}

#[put("/users/profile")]
pub async fn update_profile_handler(
	body: web::Json<UpdateProfileSchema>,
	data: web::Data<AppState>,
	jwt: jwt_auth::JwtMiddleware,
) -> impl Responder {
	let query_result = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
		.bind(jwt.user_id)
		.fetch_optional(&data.db)
		.await;

	let user = match query_result {
		Ok(Some(user)) => user,
		Ok(None) => {
			return HttpResponse::NotFound()
				.json(json!({"status": "fail", "message": "User not found"}));
		}
		Err(err) => {
			log::error!("Error fetching user profile: {:?}", err);
			return HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error updating user profile"}));
		}
	};

	let name = body
		.name
		.as_deref()
		.map(str::trim)
		.filter(|name| !name.is_empty())
		.unwrap_or(&user.name)
		.to_string();

	let email = body
		.email
		.as_deref()
		.map(str::trim)
		.filter(|email| !email.is_empty())
		.map(str::to_lowercase)
		.unwrap_or_else(|| user.email.clone());

	if email != user.email {
		let taken = sqlx::query_scalar::<_, bool>(
			"SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 AND id != $2)",
		)
		.bind(&email)
		.bind(jwt.user_id)
		.fetch_one(&data.db)
		.await;

		match taken {
			Ok(true) => {
				return HttpResponse::BadRequest()
					.json(json!({"status": "fail", "message": "Email already in use"}));
			}
			Ok(false) => {}
			Err(err) => {
				log::error!("Error checking email uniqueness: {:?}", err);
				return HttpResponse::InternalServerError()
					.json(json!({"status": "error", "message": "Error updating user profile"}));
			}
		}
	}

	let mut password = user.password.clone();

	if let (Some(current_password), Some(new_password)) =
		(body.current_password.as_deref(), body.new_password.as_deref())
	{
		if new_password.is_empty() {
			return HttpResponse::BadRequest()
				.json(json!({"status": "fail", "message": "Please provide a new password"}));
		}

		let is_valid = PasswordHash::new(&user.password)
			.map(|parsed_hash| {
				Argon2::default()
					.verify_password(current_password.as_bytes(), &parsed_hash)
					.is_ok()
			})
			.unwrap_or(false);

		if !is_valid {
			return HttpResponse::BadRequest()
				.json(json!({"status": "fail", "message": "Current password is incorrect"}));
		}

		let salt = SaltString::generate(&mut OsRng);
		password = match Argon2::default().hash_password(new_password.as_bytes(), &salt) {
			Ok(hash) => hash.to_string(),
			Err(err) => {
				log::error!("Error hashing password: {:?}", err);
				return HttpResponse::InternalServerError()
					.json(json!({"status": "error", "message": "Error updating user profile"}));
			}
		};
	}

	let query_result = sqlx::query_as::<_, User>(
		"UPDATE users SET name = $1, email = $2, password = $3 WHERE id = $4 RETURNING *",
	)
	.bind(&name)
	.bind(&email)
	.bind(&password)
	.bind(jwt.user_id)
	.fetch_one(&data.db)
	.await;

	match query_result {
		Ok(user) => HttpResponse::Ok().json(json!({
			"status": "success",
			"data": json!({
				"user": filter_user_record(&user)
			})
		})),
		Err(err) => {
			log::error!("Error updating user profile: {:?}", err);
			HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error updating user profile"}))
		}
	}
}
