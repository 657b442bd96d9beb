use ps_core::Person;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// Payload of create and update.
///
/// A missing or `null` id becomes `Uuid::nil()`, the unassigned identity.
/// `timestamp` is accepted but the repository always overwrites it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub login: Option<String>,
}

impl From<PersonRequest> for Person {
    fn from(request: PersonRequest) -> Self {
        Person {
            id: request.id.unwrap_or(Uuid::nil()),
            first_name: request.first_name,
            last_name: request.last_name,
            age: request.age,
            last_update: request.timestamp.unwrap_or_else(Utc::now),
            login: request.login,
        }
    }
}
