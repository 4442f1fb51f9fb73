//! Background task evicting expired query cache entries.

use std::time::Duration;

use tokio::time::interval;
use tracing::{debug, info};

use super::query_cache::QueryCache;

/// Configuration for the sweeper.
#[derive(Clone)]
pub struct SweeperConfig {
    /// How often to sweep
    pub interval: Duration,
}

/// Start the cache sweeper.
///
/// Spawns a tokio task that periodically drops entries older than the
/// cache's eviction age.
pub fn start_cache_sweeper(cache: QueryCache, config: SweeperConfig) {
    tokio::spawn(async move {
        info!(
            "Starting cache sweeper (interval: {} seconds, evict after: {} seconds)",
            config.interval.as_secs(),
            cache.settings().evict_after.as_secs()
        );

        let mut ticker = interval(config.interval);

        loop {
            ticker.tick().await;
            run_sweep(&cache).await;
        }
    });
}

/// Run a single sweep cycle.
async fn run_sweep(cache: &QueryCache) -> usize {
    let removed = cache.evict_expired().await;
    if removed > 0 {
        info!("Cache sweep evicted {} expired entries", removed);
    } else {
        debug!("Cache sweep found nothing to evict");
    }
    removed
}
