/// Database access layer
///
/// Repository modules over the jobs schema. All functions take a
/// `&PgPool` and return `sqlx::Error` for the service layer to wrap.
pub mod certificate_repo;
pub mod company_repo;
pub mod decision_repo;
pub mod job_repo;
