/// Business logic layer for jobs-service
///
/// - Job service: listing filters, swipe decisions, saved jobs
/// - Certificate service: digest normalization, hashing, verification
pub mod certificates;
pub mod jobs;

pub use certificates::CertificateService;
pub use jobs::{JobFilter, JobService, JobSort};
