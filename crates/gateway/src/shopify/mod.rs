//! Shopify Admin REST client for draft-order creation.
//!
//! # Security
//!
//! The access token this client carries can create orders on the store.
//! It is loaded from the environment, held as a sensitive header value, and
//! never appears in logs or caller-facing responses.
//!
//! # Architecture
//!
//! Draft-order creation uses the Admin REST endpoint (one POST per order,
//! no retry). The upstream status and body are preserved on failure so a
//! rejected payload can be diagnosed from the error alone.

mod client;

pub use client::{CreatedDraftOrder, DraftOrderClient};

use thiserror::Error;

/// Errors that can occur when creating a draft order.
#[derive(Debug, Error)]
pub enum DraftOrderError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success response.
    #[error("Shopify API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the response.
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_includes_status_and_body() {
        let err = DraftOrderError::Api {
            status: 422,
            message: "{\"errors\":{\"line_items\":\"invalid\"}}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Shopify API error: 422 - {\"errors\":{\"line_items\":\"invalid\"}}"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let err = DraftOrderError::Parse("missing field `draft_order`".to_string());
        assert_eq!(err.to_string(), "Parse error: missing field `draft_order`");
    }
}
