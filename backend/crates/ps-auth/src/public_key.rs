//! RSA verification key built from JWK-style components.
//!
//! Both components arrive as unpadded base64url big-endian integers (`n` and
//! `e` of a JWK). The modulus is kept at full precision. The exponent is
//! narrowed to `u32`; a value that does not fit is rejected rather than
//! truncated.

use crate::{AuthError, Result as AuthErrorResult};

use std::fmt;
use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use error_location::ErrorLocation;
use jsonwebtoken::DecodingKey;

/// Immutable RSA public key, built once at startup and shared read-only
#[derive(Clone)]
pub struct PublicKey {
    /// Big-endian magnitude without leading zero bytes
    modulus: Vec<u8>,
    exponent: u32,
    decoding_key: DecodingKey,
}

impl PublicKey {
    /// Build a key from base64url `modulus` and `exponent`.
    #[track_caller]
    pub fn from_components(modulus: &str, exponent: &str) -> AuthErrorResult<Self> {
        let modulus = decode_unsigned("modulus", modulus)?;
        let exponent_bytes = decode_unsigned("exponent", exponent)?;

        if exponent_bytes.len() > size_of::<u32>() {
            return Err(AuthError::KeyDecode {
                component: "exponent",
                message: format!(
                    "exponent is {} bytes long and does not fit in 32 bits",
                    exponent_bytes.len()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let exponent = exponent_bytes
            .iter()
            .fold(0u32, |acc, byte| (acc << 8) | u32::from(*byte));

        let decoding_key = DecodingKey::from_rsa_raw_components(&modulus, &exponent_bytes);

        Ok(Self {
            modulus,
            exponent,
            decoding_key,
        })
    }

    pub(crate) fn modulus(&self) -> &[u8] {
        &self.modulus
    }

    pub fn modulus_bits(&self) -> usize {
        match self.modulus.first() {
            Some(first) => self.modulus.len() * 8 - first.leading_zeros() as usize,
            None => 0,
        }
    }

    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("modulus_bits", &self.modulus_bits())
            .field("exponent", &self.exponent)
            .finish()
    }
}

/// Decode one base64url component into a non-zero big-endian magnitude.
#[track_caller]
fn decode_unsigned(component: &'static str, encoded: &str) -> AuthErrorResult<Vec<u8>> {
    let bytes = URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|e| AuthError::KeyDecode {
            component,
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let first_significant = bytes.iter().position(|byte| *byte != 0);

    match first_significant {
        Some(start) => Ok(bytes[start..].to_vec()),
        None => Err(AuthError::KeyDecode {
            component,
            message: "value is empty or zero".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
