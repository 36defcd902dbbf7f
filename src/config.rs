#[derive(Debug, Clone)]
pub struct Config {
	pub database_url: String,
	pub jwt_secret: String,
	pub port: u16,
}

impl Config {
	pub fn init() -> Config {
		let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
		let jwt_secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
		let port = std::env::var("PORT")
			.ok()
			.and_then(|port| port.parse::<u16>().ok())
			.unwrap_or(8000);

		Config {
			database_url,
			jwt_secret,
			port,
		}
	}
}
