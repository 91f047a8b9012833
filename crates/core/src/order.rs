//! Inbound order types submitted by the microsite.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Garment configuration as chosen on the microsite.
///
/// Only `length`, `sleeve`, `style`, and `collar` participate in pricing
/// (case-insensitively); the remaining fields are descriptive metadata
/// carried through verbatim to line-item properties and the order note.
///
/// Field order matters: it fixes both the line-item property order and the
/// pretty-printed JSON embedded in the order note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarmentConfiguration {
    pub length: String,
    pub sleeve: String,
    pub style: String,
    pub collar: String,
    pub hem: String,
    pub cuff: String,
    pub arms_slits: String,
    pub color: String,
}

/// One order submission from the microsite.
///
/// Field names on the wire are fixed by the front-end contract; the struct
/// uses domain names internally. Immutable once deserialized and discarded
/// after the outbound payload is built.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRequest {
    /// Short product code selecting a catalog entry (e.g. "DIY1111").
    #[serde(rename = "diyCode")]
    pub product_code: String,
    /// Opaque configuration code carried into tags and notes; not priced.
    #[serde(rename = "wxyzCode")]
    pub variant_code: String,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub configuration: GarmentConfiguration,
    /// Size label to requested quantity. Negative values are treated as zero.
    pub quantities: BTreeMap<String, i64>,
    /// Caller-declared total; validated against the summed quantities when
    /// present.
    pub total_pieces: Option<i64>,
    pub notes: Option<String>,
    /// Selects the Retail pricing tier. Absent means Wholesale.
    #[serde(rename = "isRetail", default)]
    pub is_retail: bool,
}
