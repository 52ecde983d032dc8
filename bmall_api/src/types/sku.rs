//! SKU types: catalog entries with aggregated listing prices.

use serde::{Deserialize, Serialize};

/// Numeric identifier for a SKU.
pub type SkuID = i64;

/// Observed price range across the live listings of one SKU.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Catalog entry with aggregated listing stats, as returned by `/api/skus`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SkuInfo {
    /// Unique numeric SKU identifier.
    pub sku_id: SkuID,

    /// Display name.
    pub name: String,

    /// Absolute image URL.
    pub img: String,

    /// Official market price.
    pub market_price: f64,

    /// Cheapest and dearest live listing.
    pub price_range: PriceRange,

    /// Number of live listings for this SKU.
    pub total_items: i64,
}

/// Paged envelope for the SKU list.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SkuListResponse {
    pub items: Vec<SkuInfo>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}
