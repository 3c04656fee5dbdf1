/// Certificate handlers - registration and digest verification
use crate::error::{AppError, Result};
use crate::metrics::listings::CERT_VERIFY_TOTAL;
use crate::models::Certificate;
use crate::services::CertificateService;
use actix_web::{web, HttpResponse};
use auth_token::UserId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Request body for registering a certificate.
///
/// Exactly one of `document_base64` or `digest` must be present; a
/// server-hashed document is stored verified, a bare digest claim is
/// not.
#[derive(Debug, Deserialize)]
pub struct RegisterCertificateRequest {
    pub title: String,
    pub issuer: String,
    pub issued_on: NaiveDate,
    pub document_base64: Option<String>,
    pub digest: Option<String>,
}

/// Register a certificate for the caller
pub async fn register_certificate(
    pool: web::Data<PgPool>,
    user_id: UserId,
    req: web::Json<RegisterCertificateRequest>,
) -> Result<HttpResponse> {
    let certificate = CertificateService::new((**pool).clone())
        .register(
            user_id.0,
            &req.title,
            &req.issuer,
            req.issued_on,
            req.document_base64.as_deref(),
            req.digest.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(certificate))
}

/// List the caller's certificates
pub async fn list_my_certificates(
    pool: web::Data<PgPool>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let certificates = CertificateService::new((**pool).clone())
        .list_for_owner(user_id.0)
        .await?;

    Ok(HttpResponse::Ok().json(certificates))
}

#[derive(Debug, Deserialize)]
pub struct VerifyParams {
    pub digest: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<Certificate>,
}

/// Public lookup of a certificate by its digest
pub async fn verify_certificate(
    pool: web::Data<PgPool>,
    query: web::Query<VerifyParams>,
) -> Result<HttpResponse> {
    let digest = query
        .digest
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("digest query parameter is required".into()))?;

    let certificate = CertificateService::new((**pool).clone())
        .verify(digest)
        .await?;

    let outcome = if certificate.is_some() {
        "found"
    } else {
        "not_found"
    };
    CERT_VERIFY_TOTAL.with_label_values(&[outcome]).inc();

    Ok(HttpResponse::Ok().json(VerifyResponse {
        verified: certificate.is_some(),
        certificate,
    }))
}
