use actix_web::{post, web, HttpResponse, Responder};
use argon2::{password_hash::PasswordHash, Argon2, PasswordVerifier};
use serde_json::json;

use crate::jwt_auth::issue_token;
use crate::models::{LoginUserSchema, User};
use crate::utils::filter_user_record;
use crate::AppState;

#[post("/users/login")]
pub async fn login_user_handler(
	body: web::Json<LoginUserSchema>,
	data: web::Data<AppState>,
) -> impl Responder {
	let email = body.email.trim().to_lowercase();

	if email.is_empty() || body.password.is_empty() {
		return HttpResponse::BadRequest()
			.json(json!({"status": "fail", "message": "Please provide email and password"}));
	}

	let query_result = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
		.bind(&email)
		.fetch_optional(&data.db)
		.await;

	// An unknown email and a wrong password are indistinguishable on purpose.
	let user = match query_result {
		Ok(Some(user)) => user,
		Ok(None) => {
			return HttpResponse::BadRequest()
				.json(json!({"status": "fail", "message": "Invalid email or password"}));
		}
		Err(err) => {
			log::error!("Error logging in: {:?}", err);
			return HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error logging in"}));
		}
	};

	let is_valid = PasswordHash::new(&user.password)
		.map(|parsed_hash| {
			Argon2::default()
				.verify_password(body.password.as_bytes(), &parsed_hash)
				.is_ok()
		})
		.unwrap_or(false);

	if !is_valid {
		return HttpResponse::BadRequest()
			.json(json!({"status": "fail", "message": "Invalid email or password"}));
	}

	let token = match issue_token(&user, &data.env.jwt_secret) {
		Ok(token) => token,
		Err(err) => {
			log::error!("Error signing token: {:?}", err);
			return HttpResponse::InternalServerError()
				.json(json!({"status": "error", "message": "Error logging in"}));
		}
	};

	HttpResponse::Ok().json(json!({
		"status": "success",
		"token": token,
		"data": json!({
			"user": filter_user_record(&user)
		})
	}))
}
