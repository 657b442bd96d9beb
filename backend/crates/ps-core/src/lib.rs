pub mod error;
pub mod identity;
pub mod models;

pub use error::{CoreError, Result};
pub use identity::{is_unassigned, parse_identity};
pub use models::person::Person;
