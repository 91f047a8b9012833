//! Static pricing and catalog reference data.
//!
//! Two independent data sets exist per pricing tier: a price table keyed by
//! the composite configuration key, and a catalog table keyed by the short
//! product code. Both are compiled in, read-only, and exposed only through
//! [`resolve_price`] and [`resolve_product`], so adding a tier or repricing
//! is a data change rather than a logic change.
//!
//! Lookups never fail: an unrecognized combination or product code degrades
//! to the tier's fallback price so an end customer can always complete
//! checkout. Callers log degraded lookups for observability; they are not
//! errors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::order::GarmentConfiguration;

/// Pricing tier selected per request.
///
/// Each tier names a fully independent pair of {price table, catalog table};
/// tier data is never blended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PricingTier {
    #[default]
    Wholesale,
    Retail,
}

impl PricingTier {
    /// Tier from the caller's `isRetail` flag.
    ///
    /// An absent flag deserializes to `false`, making Wholesale the explicit
    /// documented default.
    #[must_use]
    pub const fn from_retail_flag(is_retail: bool) -> Self {
        if is_retail { Self::Retail } else { Self::Wholesale }
    }

    /// Human-readable label used in tags and line-item properties.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wholesale => "Wholesale",
            Self::Retail => "Retail",
        }
    }

    /// Lowest price point in the tier's table, applied whenever a
    /// configuration combination or product code has no entry.
    #[must_use]
    pub fn fallback_price(self) -> Decimal {
        match self {
            Self::Wholesale => Decimal::new(WHOLESALE_FALLBACK_CENTS, 2),
            Self::Retail => Decimal::new(RETAIL_FALLBACK_CENTS, 2),
        }
    }
}

/// Catalog reference for one product code within a tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCatalogEntry {
    /// Backing Shopify product id; `None` for unrecognized codes.
    pub product_id: Option<&'static str>,
    pub unit_price: Decimal,
}

const WHOLESALE_FALLBACK_CENTS: i64 = 94_20;
const RETAIL_FALLBACK_CENTS: i64 = 134_20;

/// Canonical lookup key: the four pricing-relevant fields lowercased and
/// joined with `_` in fixed order.
fn composite_key(config: &GarmentConfiguration) -> String {
    format!(
        "{}_{}_{}_{}",
        config.length.to_lowercase(),
        config.sleeve.to_lowercase(),
        config.style.to_lowercase(),
        config.collar.to_lowercase()
    )
}

/// Unit price for a configuration within a tier.
///
/// Total over any string inputs: an unknown combination returns the tier
/// fallback so pricing never blocks order submission.
#[must_use]
pub fn resolve_price(config: &GarmentConfiguration, tier: PricingTier) -> Decimal {
    lookup_price(config, tier).unwrap_or_else(|| tier.fallback_price())
}

/// Price table entry for a configuration, or `None` when the combination is
/// not in the tier's table. Exposed so callers can log degraded lookups.
#[must_use]
pub fn lookup_price(config: &GarmentConfiguration, tier: PricingTier) -> Option<Decimal> {
    let key = composite_key(config);
    let cents = match tier {
        PricingTier::Wholesale => wholesale_price_cents(&key),
        PricingTier::Retail => retail_price_cents(&key),
    };
    cents.map(|c| Decimal::new(c, 2))
}

/// Catalog entry for a product code within a tier.
///
/// The match is exact and case-sensitive. Unknown codes degrade to a
/// sentinel entry with no product id and the tier fallback price.
#[must_use]
pub fn resolve_product(product_code: &str, tier: PricingTier) -> ProductCatalogEntry {
    let entry = match tier {
        PricingTier::Wholesale => wholesale_product(product_code),
        PricingTier::Retail => retail_product(product_code),
    };
    entry.map_or_else(
        || ProductCatalogEntry {
            product_id: None,
            unit_price: tier.fallback_price(),
        },
        |(product_id, cents)| ProductCatalogEntry {
            product_id: Some(product_id),
            unit_price: Decimal::new(cents, 2),
        },
    )
}

fn wholesale_price_cents(key: &str) -> Option<i64> {
    let cents = match key {
        "normal_long_sweater_crew" => 110_40,
        "normal_long_sweater_polo" => 120_90,
        "normal_long_cardigan_crew" => 127_90,
        "normal_long_cardigan_polo" => 138_40,
        "normal_short_sweater_crew" => 104_20,
        "normal_short_sweater_polo" => 114_70,
        "normal_short_cardigan_crew" => 121_80,
        "normal_short_cardigan_polo" => 132_30,
        "cropped_long_sweater_crew" => 100_40,
        "cropped_long_sweater_polo" => 110_90,
        "cropped_long_cardigan_crew" => 117_90,
        "cropped_long_cardigan_polo" => 128_40,
        "cropped_short_sweater_crew" => 94_20,
        "cropped_short_sweater_polo" => 104_70,
        "cropped_short_cardigan_crew" => 111_80,
        "cropped_short_cardigan_polo" => 122_30,
        _ => return None,
    };
    Some(cents)
}

fn retail_price_cents(key: &str) -> Option<i64> {
    let cents = match key {
        "normal_long_sweater_crew" => 150_40,
        "normal_long_sweater_polo" => 160_90,
        "normal_long_cardigan_crew" => 167_90,
        "normal_long_cardigan_polo" => 178_40,
        "normal_short_sweater_crew" => 144_20,
        "normal_short_sweater_polo" => 154_70,
        "normal_short_cardigan_crew" => 161_80,
        "normal_short_cardigan_polo" => 172_30,
        "cropped_long_sweater_crew" => 140_40,
        "cropped_long_sweater_polo" => 150_90,
        "cropped_long_cardigan_crew" => 157_90,
        "cropped_long_cardigan_polo" => 168_40,
        "cropped_short_sweater_crew" => 134_20,
        "cropped_short_sweater_polo" => 144_70,
        "cropped_short_cardigan_crew" => 151_80,
        "cropped_short_cardigan_polo" => 162_30,
        _ => return None,
    };
    Some(cents)
}

fn wholesale_product(code: &str) -> Option<(&'static str, i64)> {
    let entry = match code {
        "DIY1111" => ("9552915333448", 110_40), // Normal, Long, Sweater, Crew
        "DIY1112" => ("9552915398984", 120_90), // Normal, Long, Sweater, Polo
        "DIY1121" => ("9552915464520", 127_90), // Normal, Long, Cardigan, Crew
        "DIY1122" => ("9552915530056", 138_40), // Normal, Long, Cardigan, Polo
        "DIY1211" => ("9552915628360", 104_20), // Normal, Short, Sweater, Crew
        "DIY1212" => ("9552915726664", 114_70), // Normal, Short, Sweater, Polo
        "DIY1221" => ("9552915792200", 121_80), // Normal, Short, Cardigan, Crew
        "DIY1222" => ("9552915890504", 132_30), // Normal, Short, Cardigan, Polo
        "DIY2111" => ("9552915956040", 100_40), // Cropped, Long, Sweater, Crew
        "DIY2112" => ("9552916021576", 110_90), // Cropped, Long, Sweater, Polo
        "DIY2121" => ("9552916087112", 117_90), // Cropped, Long, Cardigan, Crew
        "DIY2122" => ("9552916119880", 128_40), // Cropped, Long, Cardigan, Polo
        "DIY2211" => ("9552916218184", 94_20),  // Cropped, Short, Sweater, Crew
        "DIY2212" => ("9552916283720", 104_70), // Cropped, Short, Sweater, Polo
        "DIY2221" => ("9552916316488", 111_80), // Cropped, Short, Cardigan, Crew
        "DIY2222" => ("9552916414792", 122_30), // Cropped, Short, Cardigan, Polo
        _ => return None,
    };
    Some(entry)
}

fn retail_product(code: &str) -> Option<(&'static str, i64)> {
    let entry = match code {
        "DIY1111" => ("9552917201992", 150_40), // Normal, Long, Sweater, Crew
        "DIY1112" => ("9552917267528", 160_90), // Normal, Long, Sweater, Polo
        "DIY1121" => ("9552917333064", 167_90), // Normal, Long, Cardigan, Crew
        "DIY1122" => ("9552917398600", 178_40), // Normal, Long, Cardigan, Polo
        "DIY1211" => ("9552917464136", 144_20), // Normal, Short, Sweater, Crew
        "DIY1212" => ("9552917529672", 154_70), // Normal, Short, Sweater, Polo
        "DIY1221" => ("9552917595208", 161_80), // Normal, Short, Cardigan, Crew
        "DIY1222" => ("9552917660744", 172_30), // Normal, Short, Cardigan, Polo
        "DIY2111" => ("9552917726280", 140_40), // Cropped, Long, Sweater, Crew
        "DIY2112" => ("9552917791816", 150_90), // Cropped, Long, Sweater, Polo
        "DIY2121" => ("9552917857352", 157_90), // Cropped, Long, Cardigan, Crew
        "DIY2122" => ("9552917922888", 168_40), // Cropped, Long, Cardigan, Polo
        "DIY2211" => ("9552917988424", 134_20), // Cropped, Short, Sweater, Crew
        "DIY2212" => ("9552918053960", 144_70), // Cropped, Short, Sweater, Polo
        "DIY2221" => ("9552918119496", 151_80), // Cropped, Short, Cardigan, Crew
        "DIY2222" => ("9552918185032", 162_30), // Cropped, Short, Cardigan, Polo
        _ => return None,
    };
    Some(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Product code paired with the configuration combination it backs.
    /// Price tables and catalog tables are maintained independently; this
    /// pins the content invariant that they quote the same price.
    const CODE_TO_COMBINATION: &[(&str, [&str; 4])] = &[
        ("DIY1111", ["Normal", "Long", "Sweater", "Crew"]),
        ("DIY1112", ["Normal", "Long", "Sweater", "Polo"]),
        ("DIY1121", ["Normal", "Long", "Cardigan", "Crew"]),
        ("DIY1122", ["Normal", "Long", "Cardigan", "Polo"]),
        ("DIY1211", ["Normal", "Short", "Sweater", "Crew"]),
        ("DIY1212", ["Normal", "Short", "Sweater", "Polo"]),
        ("DIY1221", ["Normal", "Short", "Cardigan", "Crew"]),
        ("DIY1222", ["Normal", "Short", "Cardigan", "Polo"]),
        ("DIY2111", ["Cropped", "Long", "Sweater", "Crew"]),
        ("DIY2112", ["Cropped", "Long", "Sweater", "Polo"]),
        ("DIY2121", ["Cropped", "Long", "Cardigan", "Crew"]),
        ("DIY2122", ["Cropped", "Long", "Cardigan", "Polo"]),
        ("DIY2211", ["Cropped", "Short", "Sweater", "Crew"]),
        ("DIY2212", ["Cropped", "Short", "Sweater", "Polo"]),
        ("DIY2221", ["Cropped", "Short", "Cardigan", "Crew"]),
        ("DIY2222", ["Cropped", "Short", "Cardigan", "Polo"]),
    ];

    fn config(length: &str, sleeve: &str, style: &str, collar: &str) -> GarmentConfiguration {
        GarmentConfiguration {
            length: length.to_string(),
            sleeve: sleeve.to_string(),
            style: style.to_string(),
            collar: collar.to_string(),
            hem: "Ribbed".to_string(),
            cuff: "Ribbed".to_string(),
            arms_slits: "None".to_string(),
            color: "Navy".to_string(),
        }
    }

    #[test]
    fn test_resolve_price_known_combination() {
        let c = config("Normal", "Long", "Sweater", "Crew");
        assert_eq!(
            resolve_price(&c, PricingTier::Wholesale),
            Decimal::new(110_40, 2)
        );
        assert_eq!(
            resolve_price(&c, PricingTier::Retail),
            Decimal::new(150_40, 2)
        );
    }

    #[test]
    fn test_resolve_price_is_case_insensitive() {
        let canonical = config("normal", "long", "cardigan", "polo");
        let shouted = config("NORMAL", "LONG", "CARDIGAN", "POLO");
        let mixed = config("Normal", "lOnG", "Cardigan", "PoLo");

        for tier in [PricingTier::Wholesale, PricingTier::Retail] {
            let expected = resolve_price(&canonical, tier);
            assert_eq!(resolve_price(&shouted, tier), expected);
            assert_eq!(resolve_price(&mixed, tier), expected);
        }
    }

    #[test]
    fn test_resolve_price_unknown_combination_falls_back() {
        let c = config("Extra-Long", "Sleeveless", "Poncho", "Turtleneck");
        assert_eq!(
            resolve_price(&c, PricingTier::Wholesale),
            PricingTier::Wholesale.fallback_price()
        );
        assert_eq!(
            resolve_price(&c, PricingTier::Retail),
            PricingTier::Retail.fallback_price()
        );
        assert!(lookup_price(&c, PricingTier::Wholesale).is_none());
    }

    #[test]
    fn test_resolve_product_unknown_code_degrades() {
        let entry = resolve_product("DIY9999", PricingTier::Wholesale);
        assert_eq!(entry.product_id, None);
        assert_eq!(entry.unit_price, PricingTier::Wholesale.fallback_price());

        let entry = resolve_product("DIY9999", PricingTier::Retail);
        assert_eq!(entry.product_id, None);
        assert_eq!(entry.unit_price, PricingTier::Retail.fallback_price());
    }

    #[test]
    fn test_resolve_product_is_case_sensitive() {
        assert!(
            resolve_product("DIY1111", PricingTier::Wholesale)
                .product_id
                .is_some()
        );
        assert!(
            resolve_product("diy1111", PricingTier::Wholesale)
                .product_id
                .is_none()
        );
    }

    #[test]
    fn test_tiers_are_independent_data() {
        let c = config("Normal", "Long", "Sweater", "Crew");
        assert_ne!(
            resolve_price(&c, PricingTier::Wholesale),
            resolve_price(&c, PricingTier::Retail)
        );

        let wholesale = resolve_product("DIY1111", PricingTier::Wholesale);
        let retail = resolve_product("DIY1111", PricingTier::Retail);
        assert_ne!(wholesale.product_id, retail.product_id);
        assert_ne!(wholesale.unit_price, retail.unit_price);
    }

    #[test]
    fn test_price_and_catalog_tables_agree() {
        for (code, [length, sleeve, style, collar]) in CODE_TO_COMBINATION {
            let c = config(length, sleeve, style, collar);
            for tier in [PricingTier::Wholesale, PricingTier::Retail] {
                let entry = resolve_product(code, tier);
                assert!(entry.product_id.is_some(), "missing catalog entry: {code}");
                assert_eq!(
                    entry.unit_price,
                    resolve_price(&c, tier),
                    "price mismatch for {code} ({tier:?})"
                );
            }
        }
    }

    #[test]
    fn test_fallback_is_lowest_price_in_tier() {
        for (_, [length, sleeve, style, collar]) in CODE_TO_COMBINATION {
            let c = config(length, sleeve, style, collar);
            assert!(
                resolve_price(&c, PricingTier::Wholesale)
                    >= PricingTier::Wholesale.fallback_price()
            );
            assert!(resolve_price(&c, PricingTier::Retail) >= PricingTier::Retail.fallback_price());
        }
    }

    #[test]
    fn test_tier_from_retail_flag() {
        assert_eq!(PricingTier::from_retail_flag(false), PricingTier::Wholesale);
        assert_eq!(PricingTier::from_retail_flag(true), PricingTier::Retail);
        assert_eq!(PricingTier::default(), PricingTier::Wholesale);
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(PricingTier::Wholesale.label(), "Wholesale");
        assert_eq!(PricingTier::Retail.label(), "Retail");
    }
}
