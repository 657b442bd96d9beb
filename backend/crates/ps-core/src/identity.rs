//! Person identity helpers.
//!
//! A person that has not been stored yet carries the all-zero UUID
//! (`Uuid::nil()`). That is the only "unassigned" encoding in the workspace:
//! wire payloads with a missing or `null` id are normalised to it before they
//! reach the repository.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// Returns `true` iff every one of the 16 bytes of `id` is zero.
pub fn is_unassigned(id: &Uuid) -> bool {
    id.as_bytes().iter().all(|byte| *byte == 0)
}

/// Parse an identity string received at the HTTP boundary.
#[track_caller]
pub fn parse_identity(raw: &str) -> CoreErrorResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| CoreError::Validation {
        message: format!("Invalid person id '{}': {}", raw, e),
        field: Some("id".to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}
