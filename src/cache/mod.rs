//! Pattern count caching

mod count_cache;

pub use count_cache::{
    CountCache, CountCacheConfig, DEFAULT_ADMISSION_THRESHOLD, DEFAULT_CAPACITY, DEFAULT_TTL,
};
