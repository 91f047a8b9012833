//! Shared application state.

use crate::config::GatewayConfig;
use crate::shopify::{DraftOrderClient, DraftOrderError};

/// State shared across all request handlers.
///
/// Cheap to clone: the Shopify client wraps a shared connection pool. No
/// mutable state exists; every request is independent.
#[derive(Clone)]
pub struct AppState {
    config: GatewayConfig,
    shopify: DraftOrderClient,
}

impl AppState {
    /// Build application state from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the Shopify client fails to build.
    pub fn new(config: GatewayConfig) -> Result<Self, DraftOrderError> {
        let shopify = DraftOrderClient::new(&config.shopify)?;
        Ok(Self { config, shopify })
    }

    /// Gateway configuration.
    #[must_use]
    pub const fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Shopify draft-order client.
    #[must_use]
    pub const fn shopify(&self) -> &DraftOrderClient {
        &self.shopify
    }
}
