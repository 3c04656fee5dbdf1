use crate::models::Certificate;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

/// Register a certificate, letting the unique index on the digest
/// arbitrate duplicates. Returns `None` when the digest is already
/// registered.
pub async fn create_certificate(
    pool: &PgPool,
    owner_id: Uuid,
    title: &str,
    issuer: &str,
    issued_on: NaiveDate,
    digest: &str,
    verified: bool,
) -> Result<Option<Certificate>, sqlx::Error> {
    let certificate = sqlx::query_as::<_, Certificate>(
        r#"
        INSERT INTO certificates (owner_id, title, issuer, issued_on, digest, verified)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (digest) DO NOTHING
        RETURNING id, owner_id, title, issuer, issued_on, digest, verified, created_at
        "#,
    )
    .bind(owner_id)
    .bind(title)
    .bind(issuer)
    .bind(issued_on)
    .bind(digest)
    .bind(verified)
    .fetch_optional(pool)
    .await?;

    Ok(certificate)
}

/// List the caller's certificates, newest first
pub async fn list_certificates_by_owner(
    pool: &PgPool,
    owner_id: Uuid,
) -> Result<Vec<Certificate>, sqlx::Error> {
    let certificates = sqlx::query_as::<_, Certificate>(
        r#"
        SELECT id, owner_id, title, issuer, issued_on, digest, verified, created_at
        FROM certificates
        WHERE owner_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(certificates)
}

/// Exact-match lookup on the normalized digest
pub async fn find_certificate_by_digest(
    pool: &PgPool,
    digest: &str,
) -> Result<Option<Certificate>, sqlx::Error> {
    let certificate = sqlx::query_as::<_, Certificate>(
        r#"
        SELECT id, owner_id, title, issuer, issued_on, digest, verified, created_at
        FROM certificates
        WHERE digest = $1
        "#,
    )
    .bind(digest)
    .fetch_optional(pool)
    .await?;

    Ok(certificate)
}
