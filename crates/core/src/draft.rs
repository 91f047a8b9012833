//! Draft-order assembly.
//!
//! One [`OrderRequest`] in, one [`DraftOrder`] out. The assembler expands the
//! size quantity map into line items, resolves price and catalog reference
//! through [`crate::catalog`] for the request's tier, and fills in the
//! auditable metadata (properties, note, tags). Draft orders are reviewed by
//! staff before any customer-facing communication, so every notification
//! flag the platform honors is suppressed.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::{self, PricingTier, ProductCatalogEntry};
use crate::order::OrderRequest;

/// Customer name used when the microsite submits none.
const CUSTOMER_NAME_PLACEHOLDER: &str = "Custom Order";

/// How line items carry their price.
///
/// The gateway always uses [`PricingMode::ExplicitPrice`]; the alternative
/// exists as a documented configuration choice, not a runtime branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PricingMode {
    /// Emit a descriptive title and the resolver's unit price on every line
    /// item, alongside the catalog product reference.
    #[default]
    ExplicitPrice,
    /// Emit only the catalog product reference and let the catalog entry's
    /// own price apply.
    CatalogPrice,
}

/// Validation failures that stop assembly before anything is sent upstream.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssembleError {
    /// Every size in the quantity map was zero or negative.
    #[error("No items with quantity > 0 found")]
    NoLineItems,

    /// The caller-declared total disagrees with the summed quantities.
    #[error("Declared total of {declared} pieces does not match item quantities ({actual})")]
    PieceCountMismatch { declared: i64, actual: i64 },
}

/// A `{name, value}` pair attached to a line item as audit metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItemProperty {
    pub name: &'static str,
    pub value: String,
}

/// One purchasable unit within the draft order: one garment size with a
/// positive requested quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    pub quantity: i64,
    pub taxable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<&'static str>,
    pub properties: Vec<LineItemProperty>,
}

/// Customer name parts and optional email.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    /// Serialized as `null` when absent, matching the platform contract.
    pub email: Option<String>,
}

/// Complete draft-order creation payload for the commerce platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftOrder {
    pub customer: Customer,
    pub line_items: Vec<LineItem>,
    pub use_customer_default_address: bool,
    pub note: String,
    /// Comma-joined tag string.
    pub tags: String,
    /// Always `null`: the invoice is never auto-sent.
    pub invoice_sent_at: Option<String>,
    pub status: &'static str,
    pub send_receipt: bool,
    pub send_fulfillment_receipt: bool,
}

/// Build the draft-order payload for one order request, dating line items
/// with today's local date.
///
/// # Errors
///
/// Returns [`AssembleError::NoLineItems`] if no size has a positive
/// quantity, or [`AssembleError::PieceCountMismatch`] if the declared total
/// disagrees with the summed quantities. Unknown configuration combinations
/// and product codes are not errors; they degrade per [`crate::catalog`].
pub fn assemble(request: &OrderRequest, mode: PricingMode) -> Result<DraftOrder, AssembleError> {
    assemble_dated(request, mode, chrono::Local::now().date_naive())
}

/// [`assemble`] with an explicit order date.
///
/// # Errors
///
/// Same as [`assemble`].
pub fn assemble_dated(
    request: &OrderRequest,
    mode: PricingMode,
    order_date: NaiveDate,
) -> Result<DraftOrder, AssembleError> {
    let tier = PricingTier::from_retail_flag(request.is_retail);
    let unit_price = catalog::resolve_price(&request.configuration, tier);
    let product = catalog::resolve_product(&request.product_code, tier);

    let mut line_items = Vec::new();
    for (size, &requested) in &request.quantities {
        let quantity = requested.max(0);
        if quantity == 0 {
            continue;
        }

        let size_label = size.to_uppercase();
        let properties = line_item_properties(request, &product, tier, &size_label, order_date);
        let (title, price) = match mode {
            PricingMode::ExplicitPrice => (
                Some(format!("Custom DIY Sweater - Size {size_label}")),
                Some(unit_price),
            ),
            PricingMode::CatalogPrice => (None, None),
        };

        line_items.push(LineItem {
            title,
            price,
            quantity,
            taxable: true,
            product_id: product.product_id,
            properties,
        });
    }

    if line_items.is_empty() {
        return Err(AssembleError::NoLineItems);
    }

    let actual: i64 = line_items.iter().map(|item| item.quantity).sum();
    if let Some(declared) = request.total_pieces
        && declared != actual
    {
        return Err(AssembleError::PieceCountMismatch { declared, actual });
    }

    let (first_name, last_name) = split_customer_name(request.customer_name.as_deref());

    Ok(DraftOrder {
        customer: Customer {
            first_name,
            last_name,
            email: request.customer_email.clone(),
        },
        line_items,
        use_customer_default_address: false,
        note: build_note(request, tier),
        tags: build_tags(request, tier, actual),
        invoice_sent_at: None,
        status: "open",
        send_receipt: false,
        send_fulfillment_receipt: false,
    })
}

/// Fixed, ordered audit property list for one line item. Configuration
/// values are carried verbatim; case normalization only ever applies to the
/// pricing lookup.
fn line_item_properties(
    request: &OrderRequest,
    product: &ProductCatalogEntry,
    tier: PricingTier,
    size_label: &str,
    order_date: NaiveDate,
) -> Vec<LineItemProperty> {
    let prop = |name: &'static str, value: String| LineItemProperty { name, value };
    let config = &request.configuration;

    vec![
        prop(
            "Product Code",
            format!("{}-{}", request.product_code, request.variant_code),
        ),
        prop(
            "Product ID",
            product
                .product_id
                .map_or_else(|| "Custom".to_string(), str::to_string),
        ),
        prop("Order Type", tier.label().to_string()),
        prop("Size", size_label.to_string()),
        prop("Length", config.length.clone()),
        prop("Sleeve", config.sleeve.clone()),
        prop("Style", config.style.clone()),
        prop("Collar", config.collar.clone()),
        prop("Hem", config.hem.clone()),
        prop("Cuff", config.cuff.clone()),
        prop("Arms Slits", config.arms_slits.clone()),
        prop("Color", config.color.clone()),
        prop(
            "Customer Email",
            request.customer_email.clone().unwrap_or_default(),
        ),
        prop("Order Date", format_order_date(order_date)),
    ]
}

/// Short date form without leading zeros, e.g. `3/7/2026`.
fn format_order_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Split a customer name into first/last: first whitespace-delimited token
/// is the first name, the remainder joined by single spaces is the last name.
fn split_customer_name(name: Option<&str>) -> (String, String) {
    let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
        return (CUSTOMER_NAME_PLACEHOLDER.to_string(), String::new());
    };

    let mut parts = name.split_whitespace();
    let first = parts.next().unwrap_or(name).to_string();
    let last = parts.collect::<Vec<_>>().join(" ");
    (first, last)
}

/// Free-text note embedding the code pair, tier, pretty-printed
/// configuration, and customer notes.
fn build_note(request: &OrderRequest, tier: PricingTier) -> String {
    let configuration = serde_json::to_string_pretty(&request.configuration)
        .unwrap_or_else(|_| "{}".to_string());
    let notes = request
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or("None");

    format!(
        "Custom DIY Sweater Order - {}-{}\n\nOrder Type: {}\n\nConfiguration:\n{}\n\nCustomer Notes: {}",
        request.product_code,
        request.variant_code,
        tier.label(),
        configuration,
        notes,
    )
}

/// Comma-joined tag string for staff-side filtering.
fn build_tags(request: &OrderRequest, tier: PricingTier, total_pieces: i64) -> String {
    [
        format!("DIY-{}", request.product_code),
        format!("Config-{}", request.variant_code),
        "Custom-Sweater".to_string(),
        "Microsite-Order".to_string(),
        tier.label().to_string(),
        format!("Total-{total_pieces}-pieces"),
    ]
    .join(",")
}
