mod brand;
pub use self::brand::{Brand, BrandID};

mod sku;
pub use self::sku::{PriceRange, SkuID, SkuInfo, SkuListResponse};

mod item;
pub use self::item::ItemDetail;
