//! Business logic services.

pub mod cache_sweeper;
pub mod paddles;
pub mod query_cache;

pub use cache_sweeper::{SweeperConfig, start_cache_sweeper};
pub use paddles::{Fetched, PaddlesClient};
pub use query_cache::{CacheLookup, CacheSettings, QueryCache};
