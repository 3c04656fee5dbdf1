use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, HistogramVec, IntCounterVec,
};

lazy_static! {
    /// Duration of feed requests by sort mode (latest, trending).
    pub static ref FEED_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "feed_request_duration_seconds",
        "Feed request duration segmented by sort mode",
        &["sort"]
    )
    .expect("failed to register feed_request_duration_seconds");

    /// Total feed requests processed by sort mode.
    pub static ref FEED_REQUEST_TOTAL: IntCounterVec = register_int_counter_vec!(
        "feed_request_total",
        "Total feed requests segmented by sort mode",
        &["sort"]
    )
    .expect("failed to register feed_request_total");

    /// Trending cache events (hit/miss/error).
    pub static ref FEED_CACHE_EVENTS: IntCounterVec = register_int_counter_vec!(
        "feed_cache_events_total",
        "Trending cache events segmented by outcome",
        &["event"]
    )
    .expect("failed to register feed_cache_events_total");

    /// Trending cache write results (success/error).
    pub static ref FEED_CACHE_WRITE_TOTAL: IntCounterVec = register_int_counter_vec!(
        "feed_cache_write_total",
        "Trending cache write attempts segmented by outcome",
        &["result"]
    )
    .expect("failed to register feed_cache_write_total");
}
