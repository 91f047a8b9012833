//! KnitKit Core - order transformation domain logic.
//!
//! This crate turns microsite order submissions into Shopify draft-order
//! payloads. It has two halves:
//!
//! - [`catalog`] - compiled-in pricing and catalog reference data, exposed
//!   through `resolve_price` and `resolve_product`
//! - [`draft`] - the order assembler that expands size quantities into line
//!   items and builds the complete outbound payload
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. The gateway binary owns the network boundary; everything here is
//! deterministic and freely shareable across concurrent requests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod draft;
pub mod order;

pub use catalog::{PricingTier, ProductCatalogEntry, resolve_price, resolve_product};
pub use draft::{AssembleError, DraftOrder, LineItem, PricingMode, assemble};
pub use order::{GarmentConfiguration, OrderRequest};
