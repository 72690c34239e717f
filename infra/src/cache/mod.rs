//! Cache module for Redis-based caching
//!
//! This module provides the Redis client (connection retry, transient error
//! retry) and the verification code cache the issuer writes to.

pub mod redis_client;
pub mod verification_cache;

#[cfg(test)]
mod tests;

pub use redis_client::RedisClient;
pub use verification_cache::VerificationCache;

// Re-export commonly used types
pub use cs_shared::config::CacheConfig;
