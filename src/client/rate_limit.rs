//! Reactive client-side rate limiting for the Capella API
//!
//! Capella allows 100 requests per minute per API key. The limiter stays idle
//! until the server answers with a 429, then throttles every later request
//! made through the same client.

use std::num::NonZeroU32;
use std::sync::atomic::{AtomicBool, Ordering};

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;

/// Requests per minute allowed for a single API key
pub const REQUESTS_PER_MINUTE: u32 = 100;

/// Rate limiter that only engages after the first 429 response.
pub struct ReactiveRateLimiter {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    active: AtomicBool,
}

impl Default for ReactiveRateLimiter {
    fn default() -> Self {
        Self::new(REQUESTS_PER_MINUTE)
    }
}

impl ReactiveRateLimiter {
    /// Create a limiter allowing `per_minute` requests once active.
    pub fn new(per_minute: u32) -> Self {
        let quota = Quota::per_minute(NonZeroU32::new(per_minute).unwrap_or(NonZeroU32::MIN));

        Self {
            limiter: RateLimiter::direct(quota),
            active: AtomicBool::new(false),
        }
    }

    /// Start throttling (called on 429).
    pub fn activate(&self) {
        let was_active = self.active.swap(true, Ordering::SeqCst);
        if !was_active {
            debug!("Rate limiting activated ({} req/min)", REQUESTS_PER_MINUTE);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Wait for permission if throttling is active.
    pub async fn wait_if_active(&self) {
        if self.is_active() {
            self.limiter.until_ready().await;
        }
    }
}
