use actix_web::{post, web, HttpResponse, Responder};
use argon2::{
	password_hash::{rand_core::OsRng, SaltString},
	Argon2, PasswordHasher,
};
use serde_json::json;

use crate::jwt_auth::issue_token;
use crate::models::{RegisterUserSchema, User};
use crate::utils::filter_user_record;
use crate::AppState;

#[post("/users/register")]
pub async fn register_user_handler(
	body: web::Json<RegisterUserSchema>,
	data: web::Data<AppState>,
) -> impl Responder {
	let name = body.name.trim();
	let email = body.email.trim().to_lowercase();

	if name.is_empty() || email.is_empty() || body.password.is_empty() {
		return HttpResponse::BadRequest()
			.json(json!({"status": "fail", "message": "Please provide all required fields"}));
	}

	let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
		.bind(&email)
		.fetch_one(&data.db)
		.await;

	match exists {
		Ok(true) => {
			return HttpResponse::BadRequest()
				.json(json!({"status": "fail", "message": "Email already in use"}));
		}
		Ok(false) => {}
		Err(err) => {
			log::error!("Error checking email uniqueness: {:?}", err);
			return HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error registering user"}));
		}
	}

	let salt = SaltString::generate(&mut OsRng);
	let hashed_password = match Argon2::default().hash_password(body.password.as_bytes(), &salt) {
		Ok(hash) => hash.to_string(),
		Err(err) => {
			log::error!("Error hashing password: {:?}", err);
			return HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error registering user"}));
		}
	};

	let query_result = sqlx::query_as::<_, User>(
		"INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING *",
	)
	.bind(name)
	.bind(&email)
	.bind(&hashed_password)
	.fetch_one(&data.db)
	.await;

	let user = match query_result {
		Ok(user) => user,
		Err(err) => {
			log::error!("Error registering user: {:?}", err);
			return HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error registering user"}));
		}
	};

	let token = match issue_token(&user, &data.env.jwt_secret) {
		Ok(token) => token,
		Err(err) => {
			log::error!("Error signing token: {:?}", err);
			return HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error registering user"}));
		}
	};

	HttpResponse::Created().json(json!({
		"status": "success",
		"token": token,
		"data": json!({
			"user": filter_user_record(&user)
		})
	}))
}
