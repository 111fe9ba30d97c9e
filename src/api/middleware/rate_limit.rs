//! Per-client rate limiting for the dashboard pages.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Milliseconds to replenish one request token (5 requests per second).
pub const REPLENISH_INTERVAL_MS: u64 = 200;
/// Burst allowance per client.
pub const BURST_SIZE: u32 = 50;

/// Creates the page rate limiter.
///
/// # Limits
///
/// - **Rate**: one token every [`REPLENISH_INTERVAL_MS`] ms, 5 requests per second
/// - **Burst**: [`BURST_SIZE`] requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`. Every page
/// render may sign several storage URLs, so the limit bounds outbound
/// storage traffic per client.
///
/// # Key Extraction
///
/// Keyed by socket peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(REPLENISH_INTERVAL_MS)
        .burst_size(BURST_SIZE)
        .finish()
        .expect("rate limit constants are non-zero");

    GovernorLayer::new(Arc::new(governor_conf))
}
