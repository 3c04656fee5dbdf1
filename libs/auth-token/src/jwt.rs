/// Shared JWT validation for Kwik Konnect services
///
/// Validation uses RS256 (RSA with SHA-256) exclusively. No symmetric
/// algorithms are accepted, which rules out algorithm confusion attacks,
/// and there is no fallback path when keys are missing.
///
/// Services must call `initialize_validation_key()` during startup before
/// any token can be validated:
///
/// ```rust,no_run
/// use auth_token::jwt;
///
/// let public_key = jwt::load_validation_key().expect("JWT_PUBLIC_KEY_PEM required");
/// jwt::initialize_validation_key(&public_key).expect("Failed to initialize JWT key");
/// ```
use anyhow::{anyhow, Result};
use jsonwebtoken::{decode, Algorithm, DecodingKey, TokenData, Validation};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// JWT algorithm - MUST be RS256 for all Kwik Konnect services
const JWT_ALGORITHM: Algorithm = Algorithm::RS256;

/// Claims issued by the identity provider
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID as UUID string)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Email address
    #[serde(default)]
    pub email: String,
}

/// Thread-safe global storage for the validation key
///
/// The key is initialized once at startup and never modified. OnceCell
/// ensures thread-safe initialization without runtime locks.
static JWT_DECODING_KEY: OnceCell<DecodingKey> = OnceCell::new();

/// Read the PEM-encoded public key from the environment
///
/// Accepts either the key material directly in `JWT_PUBLIC_KEY_PEM` or a
/// file path in `JWT_PUBLIC_KEY_FILE`.
pub fn load_validation_key() -> Result<String> {
    if let Ok(pem) = std::env::var("JWT_PUBLIC_KEY_PEM") {
        return Ok(pem);
    }
    if let Ok(path) = std::env::var("JWT_PUBLIC_KEY_FILE") {
        return std::fs::read_to_string(&path)
            .map_err(|e| anyhow!("Failed to read JWT public key from {path}: {e}"));
    }
    Err(anyhow!(
        "Neither JWT_PUBLIC_KEY_PEM nor JWT_PUBLIC_KEY_FILE is set"
    ))
}

/// Initialize the validation key from a PEM-formatted string
///
/// MUST be called during application startup before any JWT operations.
/// Can only be called once; subsequent calls return an error.
pub fn initialize_validation_key(public_key_pem: &str) -> Result<()> {
    let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
        .map_err(|e| anyhow!("Failed to parse RSA public key: {e}"))?;

    JWT_DECODING_KEY
        .set(decoding_key)
        .map_err(|_| anyhow!("JWT decoding key already initialized"))?;

    Ok(())
}

fn get_decoding_key() -> Result<&'static DecodingKey> {
    JWT_DECODING_KEY.get().ok_or_else(|| {
        anyhow!("JWT key not initialized. Call initialize_validation_key() during startup.")
    })
}

/// Validate and decode a JWT token
///
/// Verifies the RS256 signature with the initialized public key and checks
/// expiration. The `token` argument is the bare token, without the
/// "Bearer " prefix.
pub fn validate_token(token: &str) -> Result<TokenData<Claims>> {
    let decoding_key = get_decoding_key()?;

    let mut validation = Validation::new(JWT_ALGORITHM);
    validation.validate_exp = true;

    decode::<Claims>(token, decoding_key, &validation)
        .map_err(|e| anyhow!("Token validation failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_validation_key_unset() {
        std::env::remove_var("JWT_PUBLIC_KEY_PEM");
        std::env::remove_var("JWT_PUBLIC_KEY_FILE");
        assert!(load_validation_key().is_err());
    }

    #[test]
    fn test_initialize_rejects_garbage_pem() {
        assert!(initialize_validation_key("not a pem").is_err());
    }
}
