//! Draft-order creation against the Shopify Admin REST API.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use knitkit_core::draft::DraftOrder;

use super::DraftOrderError;
use crate::config::ShopifyConfig;

/// Client for the Admin REST `draft_orders` endpoint.
#[derive(Clone)]
pub struct DraftOrderClient {
    client: reqwest::Client,
    domain: String,
    api_version: String,
}

/// Request envelope required by the Admin API.
#[derive(Serialize)]
struct DraftOrderRequest<'a> {
    draft_order: &'a DraftOrder,
}

/// Response envelope returned by the Admin API.
#[derive(Deserialize)]
struct DraftOrderResponse {
    draft_order: CreatedDraftOrder,
}

/// Identifying data of a created draft order, returned to the caller.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreatedDraftOrder {
    pub id: i64,
    /// Staff-facing order name (e.g., "#D123").
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub invoice_url: Option<String>,
    #[serde(default)]
    pub total_price: Option<String>,
}

impl DraftOrderClient {
    /// Create a new draft-order client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build or the access token
    /// is not a valid header value.
    pub fn new(config: &ShopifyConfig) -> Result<Self, DraftOrderError> {
        let mut headers = HeaderMap::new();

        let mut token = HeaderValue::from_str(config.access_token.expose_secret())
            .map_err(|e| DraftOrderError::Parse(format!("Invalid access token format: {e}")))?;
        token.set_sensitive(true);
        headers.insert("X-Shopify-Access-Token", token);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            domain: config.domain.clone(),
            api_version: config.api_version.clone(),
        })
    }

    /// Create a draft order.
    ///
    /// One POST per order; failures are not retried here.
    ///
    /// # Errors
    ///
    /// Returns `DraftOrderError::Api` with the upstream status and body on a
    /// non-success response, `Http`/`Parse` on transport or decode failure.
    #[instrument(skip(self, draft_order), fields(line_items = draft_order.line_items.len()))]
    pub async fn create_draft_order(
        &self,
        draft_order: &DraftOrder,
    ) -> Result<CreatedDraftOrder, DraftOrderError> {
        let url = format!(
            "https://{}/admin/api/{}/draft_orders.json",
            self.domain, self.api_version
        );

        let response = self
            .client
            .post(&url)
            .json(&DraftOrderRequest { draft_order })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DraftOrderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: DraftOrderResponse = response
            .json()
            .await
            .map_err(|e| DraftOrderError::Parse(e.to_string()))?;

        Ok(body.draft_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn test_config() -> ShopifyConfig {
        ShopifyConfig {
            domain: "test.myshopify.com".to_string(),
            api_version: "2024-01".to_string(),
            access_token: SecretString::from("shpat_test_token"),
        }
    }

    #[test]
    fn test_client_builds_from_config() {
        assert!(DraftOrderClient::new(&test_config()).is_ok());
    }

    #[test]
    fn test_client_rejects_malformed_token() {
        let config = ShopifyConfig {
            access_token: SecretString::from("bad\ntoken"),
            ..test_config()
        };
        assert!(matches!(
            DraftOrderClient::new(&config),
            Err(DraftOrderError::Parse(_))
        ));
    }

    #[test]
    fn test_created_draft_order_deserializes_sparse_response() {
        let body = serde_json::json!({
            "draft_order": {
                "id": 1_069_920_478,
                "name": "#D5",
                "status": "open"
            }
        });

        let response: DraftOrderResponse =
            serde_json::from_value(body).expect("response should deserialize");
        assert_eq!(response.draft_order.id, 1_069_920_478);
        assert_eq!(response.draft_order.name, "#D5");
        assert_eq!(response.draft_order.invoice_url, None);
        assert_eq!(response.draft_order.total_price, None);
    }
}
