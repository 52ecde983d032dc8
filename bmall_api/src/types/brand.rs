//! Brand records returned by the `/api/brands` endpoint.

use serde::{Deserialize, Serialize};

/// Numeric identifier for a brand.
pub type BrandID = i64;

/// A brand with its catalog footprint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Brand {
    /// Unique numeric brand identifier.
    pub id: BrandID,

    /// Display name.
    pub name: String,

    /// Number of distinct SKUs with at least one live listing.
    pub total_items: i64,
}
