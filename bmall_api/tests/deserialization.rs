use bmall_api::types::{Brand, ItemDetail, SkuListResponse};
use chrono::{TimeZone, Utc};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_brands_full() {
    let json = load_fixture("brands.json");
    let brands: Vec<Brand> = serde_json::from_str(&json).unwrap();

    assert_eq!(brands.len(), 2);
    assert_eq!(brands[0].id, 1);
    assert_eq!(brands[0].name, "米哈游");
    assert_eq!(brands[0].total_items, 42);
    assert_eq!(brands[1].name, "万代");
}

#[test]
fn deserialize_sku_list_full() {
    let json = load_fixture("skus.json");
    let resp: SkuListResponse = serde_json::from_str(&json).unwrap();

    assert_eq!(resp.total, 2);
    assert_eq!(resp.page, 1);
    assert_eq!(resp.page_size, 100);
    assert_eq!(resp.total_pages, 1);

    let sku = &resp.items[0];
    assert_eq!(sku.sku_id, 4135);
    assert_eq!(sku.market_price, 239.0);
    assert_eq!(sku.price_range.min, 128.0);
    assert_eq!(sku.price_range.max, 312.0);
    assert_eq!(sku.total_items, 7);
    assert!(sku.img.starts_with("https://"));
}

#[test]
fn deserialize_sku_items_full() {
    let json = load_fixture("sku_items.json");
    let items: Vec<ItemDetail> = serde_json::from_str(&json).unwrap();

    assert_eq!(items.len(), 2);

    let item = &items[0];
    assert_eq!(item.c2c_items_id, 987654);
    assert_eq!(item.seller_name, "收藏家小王");
    assert_eq!(item.seller_uid.as_deref(), Some("12345678"));
    assert_eq!(item.price, 128.0);
    assert_eq!(
        item.last_check_time,
        Some(Utc.with_ymd_and_hms(2025, 11, 2, 8, 15, 30).unwrap())
    );

    // Older rows predate the check-time column and anonymized sellers have
    // null fields.
    let item = &items[1];
    assert_eq!(item.last_check_time, None);
    assert_eq!(item.seller_uid, None);
    assert_eq!(item.seller_avatar, None);
}

#[test]
fn item_without_check_time_serializes_without_field() {
    let json = load_fixture("sku_items.json");
    let items: Vec<ItemDetail> = serde_json::from_str(&json).unwrap();

    let value = serde_json::to_value(&items[1]).unwrap();
    assert!(value.get("last_check_time").is_none());
}
