mod error;
mod persons;
