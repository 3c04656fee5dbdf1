use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, IntCounterVec};

lazy_static! {
    /// Total job listing requests segmented by sort mode.
    pub static ref JOB_LIST_TOTAL: IntCounterVec = register_int_counter_vec!(
        "job_list_total",
        "Total job listing requests segmented by sort mode",
        &["sort"]
    )
    .expect("failed to register job_list_total");

    /// Certificate verification lookups segmented by outcome.
    pub static ref CERT_VERIFY_TOTAL: IntCounterVec = register_int_counter_vec!(
        "cert_verify_total",
        "Certificate verification lookups segmented by outcome",
        &["outcome"]
    )
    .expect("failed to register cert_verify_total");
}
