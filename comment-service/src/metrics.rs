//! Prometheus metrics for comment-service.
//!
//! Exposes comment-flow collectors and an HTTP handler for the `/metrics`
//! endpoint.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

lazy_static! {
    /// Comments persisted, segmented by content type.
    pub static ref COMMENTS_CREATED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "comments_created_total",
        "Comments persisted segmented by content type",
        &["content_type"]
    )
    .expect("failed to register comments_created_total");

    /// Comment list requests served, segmented by content type.
    pub static ref COMMENT_LIST_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "comment_list_requests_total",
        "Comment list requests served segmented by content type",
        &["content_type"]
    )
    .expect("failed to register comment_list_requests_total");

    /// Content reference resolution failures, segmented by reason.
    pub static ref CONTENT_RESOLVE_FAILURES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "content_resolve_failures_total",
        "Content reference resolution failures segmented by reason",
        &["reason"]
    )
    .expect("failed to register content_resolve_failures_total");
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
