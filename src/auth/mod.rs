use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod password;

pub use password::{hash_password, verify_password};

/// Only algorithm accepted for signing and validation.
const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
}

impl Claims {
    pub fn new(user_id: i64, issued_at: DateTime<Utc>, lifetime: Duration) -> Result<Self, AuthError> {
        let expires_at = issued_at.checked_add_signed(lifetime).ok_or_else(|| {
            AuthError::TokenGeneration("token expiry is out of range".to_string())
        })?;

        Ok(Self {
            user_id,
            exp: expires_at.timestamp(),
            iat: issued_at.timestamp(),
            nbf: issued_at.timestamp(),
        })
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Token has expired")]
    Expired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),
}

/// Issues and validates the bearer tokens handed out by `POST /login`.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_hours: i64,
}

impl TokenService {
    pub fn new(secret: &str, expiry_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry_hours,
        }
    }

    pub fn issue_token(&self, user_id: i64) -> Result<String, AuthError> {
        let lifetime = Duration::try_hours(self.expiry_hours).ok_or_else(|| {
            AuthError::TokenGeneration(format!("token lifetime of {} hours is out of range", self.expiry_hours))
        })?;
        self.sign(&Claims::new(user_id, Utc::now(), lifetime)?)
    }

    fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::new(ALGORITHM), claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenGeneration(e.to_string()))
    }

    /// Verify signature, algorithm and time bounds, returning the user id.
    pub fn validate_token(&self, token: &str) -> Result<i64, AuthError> {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;
        validation.validate_nbf = true;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(token_data.claims.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> TokenService {
        TokenService::new("test-secret-key-that-is-at-least-32-chars", 24)
    }

    #[test]
    fn issued_token_validates_to_same_user() {
        let service = create_test_service();
        let token = service.issue_token(42).expect("should issue token");
        assert_eq!(service.validate_token(&token).expect("should validate"), 42);
    }

    #[test]
    fn token_expires_after_24_hours() {
        let service = create_test_service();
        let claims = Claims::new(7, Utc::now(), Duration::hours(24)).unwrap();
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);

        let token = service.issue_token(7).unwrap();
        assert!(service.validate_token(&token).is_ok());
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = create_test_service();
        let issued = Utc::now() - Duration::hours(25);
        let token = service.sign(&Claims::new(7, issued, Duration::hours(24)).unwrap()).unwrap();

        assert!(matches!(service.validate_token(&token), Err(AuthError::Expired)));
    }

    #[test]
    fn token_from_other_secret_is_rejected() {
        let service = create_test_service();
        let other = TokenService::new("a-completely-different-secret-value", 24);
        let token = other.issue_token(1).unwrap();

        assert!(matches!(service.validate_token(&token), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn token_with_unexpected_algorithm_is_rejected() {
        let secret = "test-secret-key-that-is-at-least-32-chars";
        let service = TokenService::new(secret, 24);
        let claims = Claims::new(1, Utc::now(), Duration::hours(1)).unwrap();
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        assert!(matches!(service.validate_token(&token), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn malformed_token_is_rejected() {
        let service = create_test_service();
        assert!(service.validate_token("not-a-jwt").is_err());
        assert!(service.validate_token("").is_err());
    }

    #[test]
    fn token_not_yet_valid_is_rejected() {
        let service = create_test_service();
        let issued = Utc::now() + Duration::hours(1);
        let token = service.sign(&Claims::new(3, issued, Duration::hours(24)).unwrap()).unwrap();

        assert!(service.validate_token(&token).is_err());
    }

    #[test]
    fn huge_lifetime_fails_instead_of_panicking() {
        let service = TokenService::new("test-secret-key-that-is-at-least-32-chars", 1_000_000_000_000);
        assert!(matches!(service.issue_token(1), Err(AuthError::TokenGeneration(_))));

        let near_end = DateTime::<Utc>::MAX_UTC - Duration::hours(1);
        assert!(matches!(
            Claims::new(1, near_end, Duration::hours(24)),
            Err(AuthError::TokenGeneration(_))
        ));
    }
}
