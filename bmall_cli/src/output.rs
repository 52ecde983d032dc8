use bmall_api::types::{Brand, ItemDetail, SkuInfo};
use tabled::{Table, Tabled};

use crate::datetime::format_short_beijing_time;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct BrandRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Brand")]
    name: String,
    #[tabled(rename = "SKUs")]
    total_items: i64,
}

#[derive(Tabled)]
struct SkuRow {
    #[tabled(rename = "SKU")]
    sku_id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Market")]
    market_price: String,
    #[tabled(rename = "Low")]
    min_price: String,
    #[tabled(rename = "High")]
    max_price: String,
    #[tabled(rename = "Listings")]
    total_items: i64,
}

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Listing")]
    c2c_items_id: i64,
    #[tabled(rename = "Seller")]
    seller_name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Market")]
    market_price: String,
    #[tabled(rename = "Checked")]
    last_check_time: String,
}

// -- Row builders --

fn build_brand_rows(brands: &[Brand]) -> Vec<BrandRow> {
    brands
        .iter()
        .map(|b| BrandRow {
            id: b.id,
            name: b.name.clone(),
            total_items: b.total_items,
        })
        .collect()
}

fn build_sku_rows(skus: &[SkuInfo]) -> Vec<SkuRow> {
    skus.iter()
        .map(|s| SkuRow {
            sku_id: s.sku_id,
            name: s.name.clone(),
            market_price: format_price(s.market_price),
            min_price: format_price(s.price_range.min),
            max_price: format_price(s.price_range.max),
            total_items: s.total_items,
        })
        .collect()
}

fn build_item_rows(items: &[ItemDetail]) -> Vec<ItemRow> {
    items
        .iter()
        .map(|i| ItemRow {
            c2c_items_id: i.c2c_items_id,
            seller_name: i.seller_name.clone(),
            price: format_price(i.price),
            market_price: format_price(i.market_price),
            last_check_time: i
                .last_check_time
                .map(format_short_beijing_time)
                .unwrap_or_default(),
        })
        .collect()
}

// -- Table output --

pub fn print_brands_table(brands: &[Brand]) {
    println!("{}", Table::new(build_brand_rows(brands)));
}

pub fn print_skus_table(skus: &[SkuInfo]) {
    println!("{}", Table::new(build_sku_rows(skus)));
}

pub fn print_items_table(items: &[ItemDetail]) {
    println!("{}", Table::new(build_item_rows(items)));
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_price(price: f64) -> String {
    format!("¥{:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmall_api::types::SkuListResponse;

    fn load_skus_fixture() -> Vec<SkuInfo> {
        let json_str = include_str!("../../bmall_api/tests/fixtures/skus.json");
        let resp: SkuListResponse = serde_json::from_str(json_str).unwrap();
        resp.items
    }

    fn load_items_fixture() -> Vec<ItemDetail> {
        let json_str = include_str!("../../bmall_api/tests/fixtures/sku_items.json");
        serde_json::from_str(json_str).unwrap()
    }

    #[test]
    fn sku_rows_format_prices() {
        let rows = build_sku_rows(&load_skus_fixture());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].market_price, "¥239.00");
        assert_eq!(rows[0].min_price, "¥128.00");
        assert_eq!(rows[0].max_price, "¥312.00");
    }

    #[test]
    fn item_rows_show_beijing_check_time() {
        let rows = build_item_rows(&load_items_fixture());
        // 2025-11-02T08:15:30Z is 16:15 in UTC+8.
        assert_eq!(rows[0].last_check_time, "11-02 16:15");
        assert_eq!(rows[1].last_check_time, "");
    }

    #[test]
    fn brand_table_has_headers() {
        let brands = vec![Brand {
            id: 1,
            name: "米哈游".to_string(),
            total_items: 42,
        }];
        let table = Table::new(build_brand_rows(&brands)).to_string();
        assert!(table.contains("Brand"));
        assert!(table.contains("米哈游"));
    }

    #[test]
    fn empty_sku_list_renders_without_data_rows() {
        let table = Table::new(build_sku_rows(&[])).to_string();
        assert!(!table.contains("¥"));
    }
}
