use core::fmt;
use std::future::{ready, Ready};

use actix_web::error::{ErrorForbidden, ErrorUnauthorized};
use actix_web::{dev::Payload, http, web, Error as ActixWebError};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{TokenClaims, User};
use crate::AppState;

#[derive(Debug, Error)]
pub enum AuthError {
	#[error("You are not logged in, please provide a token")]
	MissingToken,
	#[error("Invalid or expired token")]
	InvalidToken,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
	status: String,
	message: String,
}

impl fmt::Display for ErrorResponse {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", serde_json::to_string(&self).unwrap())
	}
}

impl ErrorResponse {
	fn from_auth_error(err: &AuthError) -> ErrorResponse {
		ErrorResponse {
			status: "fail".to_string(),
			message: err.to_string(),
		}
	}
}

/// Tokens carry `{sub: user id, email}` and expire after one day.
pub fn issue_token(user: &User, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
	let now = Utc::now();
	let claims = TokenClaims {
		sub: user.id.to_string(),
		email: user.email.clone(),
		iat: now.timestamp() as usize,
		exp: (now + Duration::days(1)).timestamp() as usize,
	};

	encode(
		&Header::default(),
		&claims,
		&EncodingKey::from_secret(secret.as_ref()),
	)
}

pub fn verify_token(token: &str, secret: &str) -> Result<TokenClaims, AuthError> {
	decode::<TokenClaims>(
		token,
		&DecodingKey::from_secret(secret.as_ref()),
		&Validation::default(),
	)
	.map(|data| data.claims)
	.map_err(|_| AuthError::InvalidToken)
}

pub struct JwtMiddleware {
	pub user_id: Uuid,
	pub email: String,
}

impl FromRequest for JwtMiddleware {
	type Error = ActixWebError;
	type Future = Ready<Result<Self, Self::Error>>;

	fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
		let data = req.app_data::<web::Data<AppState>>().unwrap();

		let token = req
			.headers()
			.get(http::header::AUTHORIZATION)
			.and_then(|header| header.to_str().ok())
			.and_then(|header| header.strip_prefix("Bearer "))
			.map(|token| token.to_string());

		let token = match token {
			Some(token) => token,
			None => {
				let err = AuthError::MissingToken;
				return ready(Err(ErrorUnauthorized(ErrorResponse::from_auth_error(&err))));
			}
		};

		let claims = match verify_token(&token, &data.env.jwt_secret) {
			Ok(claims) => claims,
			Err(err) => return ready(Err(ErrorForbidden(ErrorResponse::from_auth_error(&err)))),
		};

		let user_id = match Uuid::parse_str(&claims.sub) {
			Ok(user_id) => user_id,
			Err(_) => {
				let err = AuthError::InvalidToken;
				return ready(Err(ErrorForbidden(ErrorResponse::from_auth_error(&err))));
			}
		};

		req.extensions_mut().insert::<Uuid>(user_id);

		ready(Ok(JwtMiddleware {
			user_id,
			email: claims.email,
		}))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn test_user() -> User {
		User {
			id: Uuid::new_v4(),
			name: "Demo User".to_string(),
			email: "demo@example.com".to_string(),
			password: "hash".to_string(),
			created_at: Some(Utc::now()),
		}
	}

	#[test]
	fn issued_token_round_trips() {
		let user = test_user();
		let token = issue_token(&user, "secret").unwrap();

		let claims = verify_token(&token, "secret").unwrap();
		assert_eq!(claims.sub, user.id.to_string());
		assert_eq!(claims.email, user.email);
		assert_eq!(claims.exp - claims.iat, 60 * 60 * 24);
	}

	#[test]
	fn wrong_secret_is_rejected() {
		let token = issue_token(&test_user(), "secret").unwrap();

		assert!(matches!(
			verify_token(&token, "other-secret"),
			Err(AuthError::InvalidToken)
		));
	}

	#[test]
	fn malformed_token_is_rejected() {
		assert!(matches!(
			verify_token("not-a-token", "secret"),
			Err(AuthError::InvalidToken)
		));
	}

	#[test]
	fn expired_token_is_rejected() {
		let user = test_user();
		let now = Utc::now();
		let claims = TokenClaims {
			sub: user.id.to_string(),
			email: user.email.clone(),
			iat: (now - Duration::days(2)).timestamp() as usize,
			exp: (now - Duration::days(1)).timestamp() as usize,
		};
		let token = encode(
			&Header::default(),
			&claims,
			&EncodingKey::from_secret("secret".as_ref()),
		)
		.unwrap();

		assert!(matches!(
			verify_token(&token, "secret"),
			Err(AuthError::InvalidToken)
		));
	}
}
