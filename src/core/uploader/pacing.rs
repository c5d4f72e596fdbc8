//! Pacing between upload chunks
//!
//! The uploader consults a [`WaitStrategy`] after every full chunk. The
//! default [`ModuloPacing`] is a coarse throttle keyed on the input row index;
//! it does not look at request duration or API-reported limits.
//! [`RateLimitedPacing`] is a token bucket over chunks for callers who want a
//! real sustained rate instead.

use crate::config::{PacingConfig, PacingStrategy};
use crate::utils::error::{Result, UploaderError};
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::fmt;
use std::num::NonZeroU32;
use std::time::Duration;
use tracing::debug;

/// Decides whether to pause after a full chunk has been uploaded
#[async_trait::async_trait]
pub trait WaitStrategy: Send + Sync + fmt::Debug {
    /// Pause if the policy asks for it. `row_index` is the position of the
    /// last row of the chunk in the input, counting the header as row 0.
    /// Returns whether a pause happened.
    async fn after_chunk(&self, row_index: u64) -> bool;

    fn name(&self) -> &str;
}

/// Sleep for `interval` whenever the row index is a multiple of `modulus`
#[derive(Debug, Clone)]
pub struct ModuloPacing {
    modulus: u64,
    interval: Duration,
}

impl ModuloPacing {
    pub fn new(modulus: u64, interval: Duration) -> Self {
        Self { modulus, interval }
    }

    pub fn should_wait(&self, row_index: u64) -> bool {
        self.modulus != 0 && row_index % self.modulus == 0
    }
}

#[async_trait::async_trait]
impl WaitStrategy for ModuloPacing {
    async fn after_chunk(&self, row_index: u64) -> bool {
        if !self.should_wait(row_index) {
            return false;
        }
        debug!("Pacing: sleeping {:?} at row {}", self.interval, row_index);
        tokio::time::sleep(self.interval).await;
        true
    }

    fn name(&self) -> &str {
        "modulo"
    }
}

/// Token bucket over chunks, refilled at `chunks_per_second`
pub struct RateLimitedPacing {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    chunks_per_second: NonZeroU32,
}

impl RateLimitedPacing {
    pub fn new(chunks_per_second: NonZeroU32) -> Self {
        Self {
            limiter: RateLimiter::direct(Quota::per_second(chunks_per_second)),
            chunks_per_second,
        }
    }
}

impl fmt::Debug for RateLimitedPacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RateLimitedPacing")
            .field("chunks_per_second", &self.chunks_per_second)
            .finish()
    }
}

#[async_trait::async_trait]
impl WaitStrategy for RateLimitedPacing {
    async fn after_chunk(&self, row_index: u64) -> bool {
        if self.limiter.check().is_ok() {
            return false;
        }
        debug!("Pacing: chunk rate reached at row {}, waiting", row_index);
        self.limiter.until_ready().await;
        true
    }

    fn name(&self) -> &str {
        "rate_limited"
    }
}

/// Never pause
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

#[async_trait::async_trait]
impl WaitStrategy for NoPacing {
    async fn after_chunk(&self, _row_index: u64) -> bool {
        false
    }

    fn name(&self) -> &str {
        "none"
    }
}

/// Build the configured wait strategy
pub fn wait_strategy_from_config(config: &PacingConfig) -> Result<Box<dyn WaitStrategy>> {
    let strategy: Box<dyn WaitStrategy> = match config.strategy {
        PacingStrategy::Modulo => Box::new(ModuloPacing::new(
            config.modulus,
            Duration::from_millis(config.interval_ms),
        )),
        PacingStrategy::RateLimited => {
            let rate = NonZeroU32::new(config.chunks_per_second).ok_or_else(|| {
                UploaderError::Config("Pacing chunks per second must be greater than 0".into())
            })?;
            Box::new(RateLimitedPacing::new(rate))
        }
        PacingStrategy::None => Box::new(NoPacing),
    };
    Ok(strategy)
}
