//! Person entity - the single record type owned by the service.

use crate::is_unassigned;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// `Uuid::nil()` until the repository assigns one
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    /// Overwritten by the repository on every write
    pub last_update: DateTime<Utc>,
    /// Optional secondary lookup key
    pub login: Option<String>,
}

impl Person {
    /// Create a person that has not been persisted yet
    pub fn new(first_name: String, last_name: String, age: i32) -> Self {
        Self {
            id: Uuid::nil(),
            first_name,
            last_name,
            age,
            last_update: Utc::now(),
            login: None,
        }
    }

    pub fn with_login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    /// Check if the store has not assigned an identity yet
    pub fn is_unassigned(&self) -> bool {
        is_unassigned(&self.id)
    }
}
