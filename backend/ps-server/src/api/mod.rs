pub mod error;
pub mod persons;
