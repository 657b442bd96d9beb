use crate::{AuthError, JwtAlgorithm, PublicKey, Result as AuthErrorResult};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, Validation, decode, decode_header};

/// Verifies compact RS256/RS384/RS512 tokens against one RSA public key.
///
/// Only structure, algorithm family and signature are checked. `exp`, `nbf`,
/// `iss` and `aud` are NOT validated and no claim is required; tokens never
/// expire as far as this validator is concerned.
#[derive(Clone)]
pub struct JwtValidator {
    public_key: Arc<PublicKey>,
    validation: Validation,
}

impl JwtValidator {
    pub fn with_public_key(public_key: Arc<PublicKey>) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.algorithms = JwtAlgorithm::ALL.iter().map(|a| (*a).into()).collect();
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self {
            public_key,
            validation,
        }
    }

    /// Validate the token's algorithm and signature
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<JwtAlgorithm> {
        let header = decode_header(token).map_err(|e| AuthError::JwtDecode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let algorithm =
            JwtAlgorithm::from_algorithm(header.alg).ok_or_else(|| AuthError::UnexpectedAlgorithm {
                algorithm: format!("{:?}", header.alg),
                location: ErrorLocation::from(Location::caller()),
            })?;

        decode::<HashMap<String, serde_json::Value>>(
            token,
            self.public_key.decoding_key(),
            &self.validation,
        )
        .map_err(|e| AuthError::JwtDecode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(algorithm)
    }
}
