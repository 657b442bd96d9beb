use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// RSA public key components for the bearer gate.
///
/// Both empty disables the gate. Both set enables it. Anything else is a
/// configuration error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Base64url (unpadded) big-endian modulus
    pub modulus: String,
    /// Base64url (unpadded) big-endian public exponent
    pub exponent: String,
}

impl SecurityConfig {
    pub fn is_enabled(&self) -> bool {
        !self.modulus.is_empty() && !self.exponent.is_empty()
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        match (self.modulus.is_empty(), self.exponent.is_empty()) {
            (true, false) => Err(ConfigError::security(
                "security.exponent is set but security.modulus is empty",
            )),
            (false, true) => Err(ConfigError::security(
                "security.modulus is set but security.exponent is empty",
            )),
            _ => Ok(()),
        }
    }
}
