
use crate::PublicKey;

use std::sync::Arc;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::Serialize;

pub(crate) const SIGNING_KEY_PEM: &str = include_str!("../../tests/fixtures/signing_key.pem");
pub(crate) const SIGNING_KEY_MODULUS: &str =
    include_str!("../../tests/fixtures/signing_key.modulus");
pub(crate) const UNRELATED_KEY_PEM: &str = include_str!("../../tests/fixtures/unrelated_key.pem");
pub(crate) const UNRELATED_KEY_MODULUS: &str =
    include_str!("../../tests/fixtures/unrelated_key.modulus");
pub(crate) const EXPONENT: &str = "AQAB";

#[derive(Debug, Serialize)]
pub(crate) struct TestClaims {
    pub sub: String,
    pub exp: i64,
}

pub(crate) fn test_claims() -> TestClaims {
    TestClaims {
        sub: "user-123".to_string(),
        exp: 4_102_444_800, // 2100-01-01
    }
}

/// Public key matching `SIGNING_KEY_PEM`
pub(crate) fn signing_public_key() -> Arc<PublicKey> {
    Arc::new(PublicKey::from_components(SIGNING_KEY_MODULUS.trim(), EXPONENT).unwrap())
}

pub(crate) fn create_rsa_token<T: Serialize>(
    algorithm: Algorithm,
    claims: &T,
    pem: &str,
) -> String {
    encode(
        &Header::new(algorithm),
        claims,
        &EncodingKey::from_rsa_pem(pem.as_bytes()).unwrap(),
    )
    .unwrap()
}

pub(crate) fn create_signed_token() -> String {
    create_rsa_token(Algorithm::RS256, &test_claims(), SIGNING_KEY_PEM)
}
