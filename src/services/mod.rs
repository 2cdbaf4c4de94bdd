// Service exports
pub mod cache;
pub mod pools;
pub mod postgres;

pub use cache::{CacheManager, CacheKey, CacheError, CacheStats};
pub use pools::RecordPools;
pub use postgres::{PostgresClient, PostgresError};
