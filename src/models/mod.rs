pub mod budgets;
pub mod categories;
pub mod expenses;
pub mod response;
pub mod shared;
pub mod users;

pub use self::budgets::*;
pub use self::categories::*;
pub use self::expenses::*;
pub use self::response::*;
pub use self::shared::*;
pub use self::users::*;
