use jsonwebtoken::Algorithm;

/// RSA PKCS#1 v1.5 signing algorithms accepted by the gate.
///
/// Anything else in a token header (`none`, HMAC, ECDSA, RSA-PSS) is
/// rejected before the signature is looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JwtAlgorithm {
    RS256,
    RS384,
    RS512,
}

impl JwtAlgorithm {
    pub const ALL: [JwtAlgorithm; 3] = [Self::RS256, Self::RS384, Self::RS512];

    pub fn from_algorithm(algorithm: Algorithm) -> Option<Self> {
        match algorithm {
            Algorithm::RS256 => Some(Self::RS256),
            Algorithm::RS384 => Some(Self::RS384),
            Algorithm::RS512 => Some(Self::RS512),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RS256 => "RS256",
            Self::RS384 => "RS384",
            Self::RS512 => "RS512",
        }
    }
}

impl From<JwtAlgorithm> for Algorithm {
    fn from(algorithm: JwtAlgorithm) -> Self {
        match algorithm {
            JwtAlgorithm::RS256 => Algorithm::RS256,
            JwtAlgorithm::RS384 => Algorithm::RS384,
            JwtAlgorithm::RS512 => Algorithm::RS512,
        }
    }
}
