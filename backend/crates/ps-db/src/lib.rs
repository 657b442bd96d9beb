pub mod connection;
pub mod error;
pub mod pagination;
pub mod repositories;

pub use connection::database_connection::{ConnectionSettings, connect, migrate};
pub use error::{DbError, Result};
pub use pagination::{PAGE_SIZE, page_offset};
pub use repositories::person_repository::PersonRepository;
