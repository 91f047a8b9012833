//! Draft-order relay handler.
//!
//! Receives a microsite order submission, assembles the draft-order payload
//! in `knitkit-core`, and forwards it to Shopify. Validation failures stop
//! here; degraded catalog lookups proceed at fallback pricing and are only
//! logged.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use knitkit_core::catalog::{self, PricingTier};
use knitkit_core::draft::{self, PricingMode};
use knitkit_core::order::OrderRequest;

use crate::error::AppError;
use crate::shopify::CreatedDraftOrder;
use crate::state::AppState;

/// Response body for a successfully created draft order.
#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub success: bool,
    pub draft_order: CreatedDraftOrder,
    pub message: &'static str,
}

/// Create a Shopify draft order from a microsite order submission.
#[instrument(skip(state, request), fields(product_code = %request.product_code))]
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<OrderRequest>,
) -> Result<Json<CreateResponse>, AppError> {
    let tier = PricingTier::from_retail_flag(request.is_retail);

    // Unknown combinations and codes degrade to fallback pricing; surface
    // them in the logs so the catalog data can be extended.
    if catalog::lookup_price(&request.configuration, tier).is_none() {
        tracing::warn!(
            tier = tier.label(),
            "Unknown configuration combination, using fallback price"
        );
    }
    if catalog::resolve_product(&request.product_code, tier)
        .product_id
        .is_none()
    {
        tracing::warn!(
            product_code = %request.product_code,
            tier = tier.label(),
            "Unknown product code, using fallback catalog entry"
        );
    }

    let draft_order = draft::assemble(&request, PricingMode::ExplicitPrice)?;
    tracing::info!(
        line_items = draft_order.line_items.len(),
        tier = tier.label(),
        "Submitting draft order"
    );

    let created = state.shopify().create_draft_order(&draft_order).await?;
    tracing::info!(draft_order = %created.name, "Draft order created");

    Ok(Json(CreateResponse {
        success: true,
        draft_order: created,
        message: "Draft order created successfully",
    }))
}
