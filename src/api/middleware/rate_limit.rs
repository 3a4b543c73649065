//! Per-IP rate limiting for write endpoints.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

type PeerIpGovernor =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

fn build(per_second: u64, burst_size: u32) -> PeerIpGovernor {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst_size)
            .finish()
            .expect("rate limit values are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Limiter for sign-in and sign-out.
///
/// Replenishes one request per second with a burst of 20. Requests over the
/// limit receive `429 Too Many Requests`.
pub fn layer() -> PeerIpGovernor {
    build(1, 20)
}

/// Stricter limiter for pitch submissions (web form and JSON API).
///
/// Replenishes one request every 5 seconds with a burst of 5.
pub fn submit_layer() -> PeerIpGovernor {
    build(5, 5)
}
