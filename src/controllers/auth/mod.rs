pub mod login;
pub mod register;

pub use self::login::login_user_handler;
pub use self::register::register_user_handler;
