pub mod bearer_gate;
pub mod error;
pub mod jwt_algorithm;
pub mod jwt_validator;
pub mod public_key;

pub use bearer_gate::{BEARER_PREFIX, BearerGate, GateDecision, PROTECTED_PATH_MARKER};
pub use error::{AuthError, Result};
pub use jwt_algorithm::JwtAlgorithm;
pub use jwt_validator::JwtValidator;
pub use public_key::PublicKey;

#[cfg(test)]
mod tests;
