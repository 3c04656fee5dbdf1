//! Certificate service - digest normalization, hashing, verification.
//!
//! A certificate is identified by the SHA-256 digest of its document.
//! When the document itself is uploaded the service computes the digest
//! and marks the record verified; a bare digest claim is stored
//! unverified until the document can be produced. Lookups are exact
//! matches on the normalized digest, never substring matches.
use base64::{engine::general_purpose, Engine as _};
use chrono::NaiveDate;
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::certificate_repo;
use crate::error::{AppError, Result};
use crate::models::Certificate;

pub struct CertificateService {
    pool: PgPool,
}

impl CertificateService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a certificate for the caller.
    ///
    /// Exactly one of `document_base64` or `digest` must be supplied.
    pub async fn register(
        &self,
        owner_id: Uuid,
        title: &str,
        issuer: &str,
        issued_on: NaiveDate,
        document_base64: Option<&str>,
        digest: Option<&str>,
    ) -> Result<Certificate> {
        let (digest, verified) = match (document_base64, digest) {
            (Some(document), None) => (digest_document(document)?, true),
            (None, Some(claimed)) => (normalize_digest(claimed)?, false),
            (Some(_), Some(_)) => {
                return Err(AppError::BadRequest(
                    "Provide either document_base64 or digest, not both".into(),
                ))
            }
            (None, None) => {
                return Err(AppError::BadRequest(
                    "Either document_base64 or digest is required".into(),
                ))
            }
        };

        certificate_repo::create_certificate(
            &self.pool, owner_id, title, issuer, issued_on, &digest, verified,
        )
        .await?
        .ok_or(AppError::DuplicateCertificate)
    }

    /// The caller's certificates, newest first
    pub async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Certificate>> {
        let certificates =
            certificate_repo::list_certificates_by_owner(&self.pool, owner_id).await?;
        Ok(certificates)
    }

    /// Exact-match lookup on the normalized digest
    pub async fn verify(&self, digest: &str) -> Result<Option<Certificate>> {
        let digest = normalize_digest(digest)?;
        let certificate = certificate_repo::find_certificate_by_digest(&self.pool, &digest).await?;
        Ok(certificate)
    }
}

/// Normalize a digest claim: trim, strip an optional 0x prefix,
/// lower-case, and require 64 hex characters
pub fn normalize_digest(input: &str) -> Result<String> {
    let trimmed = input.trim();
    let stripped = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let lowered = stripped.to_ascii_lowercase();

    if lowered.len() != 64 || !lowered.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AppError::BadRequest(
            "Digest must be 64 hexadecimal characters".into(),
        ));
    }

    Ok(lowered)
}

/// SHA-256 of a base64-encoded document, as lower-case hex
pub fn digest_document(document_base64: &str) -> Result<String> {
    let bytes = general_purpose::STANDARD
        .decode(document_base64.trim())
        .map_err(|_| AppError::BadRequest("document_base64 is not valid base64".into()))?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_digest_strips_prefix_and_case() {
        let digest = "0x".to_string() + &"AB".repeat(32);
        assert_eq!(normalize_digest(&digest).unwrap(), "ab".repeat(32));
    }

    #[test]
    fn test_normalize_digest_rejects_wrong_length() {
        assert!(normalize_digest("abc123").is_err());
        assert!(normalize_digest(&"a".repeat(63)).is_err());
        assert!(normalize_digest(&"g".repeat(64)).is_err());
    }

    #[test]
    fn test_digest_document_known_value() {
        // base64("hello world") -> sha256 of the raw bytes
        let digest = digest_document("aGVsbG8gd29ybGQ=").unwrap();
        assert_eq!(
            digest,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_digest_document_rejects_bad_base64() {
        assert!(digest_document("not base64!!!").is_err());
    }

    #[test]
    fn test_digest_never_matches_substring() {
        // A valid digest is always exactly 64 chars, so a prefix claim
        // cannot normalize into a lookup key
        assert!(normalize_digest("b94d27b9934d").is_err());
    }
}
