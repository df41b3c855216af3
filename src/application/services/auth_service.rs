//! Authentication service for API token validation.

use sha2::{Digest, Sha256};

use crate::error::AppError;
use serde_json::json;

/// Service for authenticating API requests via Bearer tokens.
///
/// The service never sees the plaintext token at rest: configuration holds
/// only the SHA-256 digest (see `admin token generate`), and the presented
/// token is hashed before comparison. Digests are fixed-length, so the
/// comparison leaks nothing about the configured value.
pub struct AuthService {
    token_hash: String,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `token_hash` - lowercase hex SHA-256 digest of the accepted token
    pub fn new(token_hash: String) -> Self {
        Self { token_hash }
    }

    /// Hashes a raw token with SHA-256.
    ///
    /// Returns a 64-character lowercase hex digest.
    pub fn hash_token(token: &str) -> String {
        hex::encode(Sha256::digest(token.as_bytes()))
    }

    /// Authenticates a raw token against the configured digest.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token digest does not
    /// match.
    pub fn authenticate(&self, token: &str) -> Result<(), AppError> {
        if Self::hash_token(token) != self.token_hash {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid token"}),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_success() {
        let service = AuthService::new(AuthService::hash_token("valid-token"));
        assert!(service.authenticate("valid-token").is_ok());
    }

    #[test]
    fn test_authenticate_invalid_token() {
        let service = AuthService::new(AuthService::hash_token("valid-token"));

        let result = service.authenticate("other-token");

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_hash_token_consistency() {
        let hash1 = AuthService::hash_token("test-token");
        let hash2 = AuthService::hash_token("test-token");

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_hash_token_different_inputs() {
        assert_ne!(AuthService::hash_token("token1"), AuthService::hash_token("token2"));
    }
}
