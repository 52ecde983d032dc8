//! Per-SKU marketplace listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single live listing for a SKU, as returned by `/api/sku/{id}/items`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ItemDetail {
    /// Unique numeric listing identifier.
    pub c2c_items_id: i64,

    /// Seller display name.
    pub seller_name: String,

    /// Seller account ID. `None` for anonymized listings.
    pub seller_uid: Option<String>,

    /// Absolute avatar URL. The API substitutes a default avatar when the
    /// seller has none.
    pub seller_avatar: Option<String>,

    /// Seller profile page URL.
    pub seller_url: Option<String>,

    /// Asking price.
    pub price: f64,

    /// Official market price of the underlying SKU.
    pub market_price: f64,

    /// Marketplace detail-page URL for this listing.
    pub url: String,

    /// When the listing was last confirmed live, in UTC. `None` for rows
    /// that predate the column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_check_time: Option<DateTime<Utc>>,
}
