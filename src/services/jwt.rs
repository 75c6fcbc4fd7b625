use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Only the symmetric HMAC family is accepted when verifying. Tokens that
/// declare any other algorithm are rejected before the signature is checked.
const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub exp: i64,           // expiration time
    pub iat: i64,           // issued at
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token has expired")]
    Expired,

    #[error("token algorithm is not accepted")]
    UnexpectedAlgorithm,

    #[error("malformed token: {0}")]
    Malformed(jsonwebtoken::errors::Error),

    #[error("failed to sign token: {0}")]
    Signing(jsonwebtoken::errors::Error),
}

impl TokenError {
    /// Whether the token was well formed but failed verification.
    pub fn is_verification_failure(&self) -> bool {
        matches!(self, Self::InvalidSignature | Self::Expired | Self::UnexpectedAlgorithm)
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => Self::UnexpectedAlgorithm,
            _ => Self::Malformed(err),
        }
    }
}

#[derive(Clone)]
pub struct JwtService {
    secret: String,
    token_duration: Duration,
}

impl JwtService {
    pub fn new(secret: String, ttl_hours: i64) -> Self {
        Self {
            secret,
            token_duration: Duration::hours(ttl_hours),
        }
    }

    pub fn issue(&self, username: &str) -> Result<IssuedToken, TokenError> {
        self.issue_until(username, Utc::now() + self.token_duration)
    }

    pub fn issue_until(&self, username: &str, expires: DateTime<Utc>) -> Result<IssuedToken, TokenError> {
        let claims = Claims {
            username: username.to_string(),
            exp: expires.timestamp(),
            iat: Utc::now().timestamp(),
        };

        let token = encode(
            &Header::new(SIGNING_ALGORITHM),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(TokenError::Signing)?;

        Ok(IssuedToken { token, expires })
    }

    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(SIGNING_ALGORITHM);
        validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
        validation.leeway = 0;

        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )?;

        Ok(data.claims)
    }
}
