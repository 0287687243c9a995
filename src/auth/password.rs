//! Password hashing.
//!
//! New credentials are stored as Argon2id PHC strings. Stores seeded by
//! older tooling hold unsalted lowercase-hex SHA-256 digests; those still
//! verify so existing users can log in.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sha2::{Digest, Sha256};

use super::AuthError;

const LEGACY_DIGEST_LEN: usize = 64;

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Recompute and compare. Malformed digests never verify.
pub fn verify_password(password: &str, digest: &str) -> bool {
    if digest.starts_with("$argon2") {
        return match PasswordHash::new(digest) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Stored password hash is not valid PHC: {}", e);
                false
            }
        };
    }

    if is_legacy_digest(digest) {
        return legacy_sha256(password) == digest;
    }

    false
}

fn is_legacy_digest(digest: &str) -> bool {
    digest.len() == LEGACY_DIGEST_LEN
        && digest.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

fn legacy_sha256(password: &str) -> String {
    Sha256::digest(password.as_bytes())
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_succeeds() {
        let hash = hash_password("1234").expect("should hash");
        assert!(hash.starts_with("$argon2"), "hash should be in PHC format");
        assert!(verify_password("1234", &hash));
    }

    #[test]
    fn wrong_password_fails() {
        let hash = hash_password("correct horse").unwrap();
        assert!(!verify_password("battery staple", &hash));
        assert!(!verify_password("", &hash));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let a = hash_password("password").unwrap();
        let b = hash_password("password").unwrap();
        assert_ne!(a, b);
        assert!(verify_password("password", &a));
        assert!(verify_password("password", &b));
    }

    #[test]
    fn legacy_sha256_digest_verifies() {
        // sha256("password")
        let digest = "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8";
        assert!(verify_password("password", digest));
        assert!(!verify_password("Password", digest));
    }

    #[test]
    fn garbage_digest_never_verifies() {
        assert!(!verify_password("password", "password"));
        assert!(!verify_password("password", "$argon2id$broken"));
        assert!(!verify_password("", ""));
    }
}
