// Service exports
pub mod cache;

pub use cache::{CacheError, CacheKey, CacheManager};
