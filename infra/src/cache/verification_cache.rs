//! Verification code cache service implementation
//!
//! Codes are stored as plain strings keyed by the recipient email (optionally
//! prefixed with `CACHE_KEY_PREFIX`). A later write for the same email
//! replaces the earlier code. Codes carry no expiry unless one is configured.
//!
//! The cache may be constructed without a live connection. In that state
//! every call fails with a configuration error, which the issuer logs and
//! otherwise ignores.

use std::time::Duration;

use async_trait::async_trait;
use cs_core::services::issuer::CacheServiceTrait;
use cs_shared::utils::email::mask_email;
use tracing::{debug, error, info, warn};

use crate::cache::{CacheConfig, RedisClient};
use crate::InfrastructureError;

/// Verification cache service for issued email codes
#[derive(Clone)]
pub struct VerificationCache {
    /// Redis client, absent when the cache store is unavailable
    redis_client: Option<RedisClient>,
    /// Key prefix and expiry settings
    config: CacheConfig,
}

impl VerificationCache {
    /// Create a verification cache backed by a connected client
    pub fn new(redis_client: RedisClient, config: CacheConfig) -> Self {
        Self {
            redis_client: Some(redis_client),
            config,
        }
    }

    /// Create a cache with no backing store; every call fails
    pub fn disconnected(config: CacheConfig) -> Self {
        Self {
            redis_client: None,
            config,
        }
    }

    /// Connect to the configured cache store
    ///
    /// A missing configuration or a failed connection is logged and yields a
    /// disconnected cache instead of an error, so that issuance can still
    /// publish delivery requests.
    pub async fn connect(config: Option<CacheConfig>) -> Self {
        let Some(config) = config else {
            warn!("REDIS_CACHE is not set; verification codes will not be cached");
            return Self::disconnected(CacheConfig::default());
        };

        match RedisClient::new(config.clone()).await {
            Ok(client) => {
                info!("Verification cache connected");
                Self::new(client, config)
            }
            Err(e) => {
                error!(error = %e, "Unable to connect to cache store; codes will not be cached");
                Self::disconnected(config)
            }
        }
    }

    /// Whether a backing store is attached
    pub fn is_connected(&self) -> bool {
        self.redis_client.is_some()
    }

    /// Cache key for an email
    pub fn code_key(&self, email: &str) -> String {
        self.config.make_key(email)
    }

    fn client(&self) -> Result<&RedisClient, InfrastructureError> {
        self.redis_client
            .as_ref()
            .ok_or_else(|| InfrastructureError::Config("unable to get REDIS_CACHE".to_string()))
    }

    /// Store a code for an email, replacing any previous code
    ///
    /// Sub-second expiries are rounded up to one second.
    pub async fn store(
        &self,
        email: &str,
        code: &str,
        expiry: Option<Duration>,
    ) -> Result<(), InfrastructureError> {
        let client = self.client()?;
        let key = self.code_key(email);

        match expiry {
            Some(ttl) => {
                client
                    .set_with_expiry(&key, code, ttl.as_secs().max(1))
                    .await?
            }
            None => client.set(&key, code).await?,
        }

        debug!(email = %mask_email(email), "Verification code cached");
        Ok(())
    }

    /// Read the code currently stored for an email
    pub async fn fetch(&self, email: &str) -> Result<Option<String>, InfrastructureError> {
        self.client()?.get(&self.code_key(email)).await
    }

    /// Check the backing store is reachable
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        self.client()?.health_check().await
    }
}

#[async_trait]
impl CacheServiceTrait for VerificationCache {
    async fn store_code(
        &self,
        email: &str,
        code: &str,
        expiry: Option<Duration>,
    ) -> Result<(), String> {
        self.store(email, code, expiry).await.map_err(|e| e.to_string())
    }

    async fn get_code(&self, email: &str) -> Result<Option<String>, String> {
        self.fetch(email).await.map_err(|e| e.to_string())
    }
}
