/// HTTP handlers for jobs endpoints
///
/// - Jobs: filterable listing, single job, saved jobs
/// - Decisions: swipe outcomes (apply/skip/undo)
/// - Companies: directory and detail pages
/// - Certificates: registration and digest verification
pub mod certificates;
pub mod companies;
pub mod decisions;
pub mod jobs;

pub use certificates::{list_my_certificates, register_certificate, verify_certificate};
pub use companies::{get_company, list_companies};
pub use decisions::{create_decision, list_decisions, undo_decision};
pub use jobs::{get_job, list_jobs, list_saved_jobs, toggle_saved_job};
