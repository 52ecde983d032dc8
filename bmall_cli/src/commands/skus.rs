use anyhow::Result;
use bmall_api::{Client, Query, SkuQuery};
use clap::Args;

use crate::output::{print_json, print_skus_table, OutputFormat};

#[derive(Args)]
pub struct SkusArgs {
    /// Filter by brand ID (see `bmall brands`)
    #[arg(long)]
    pub brand_id: Option<i64>,

    /// Search SKU names by keyword
    #[arg(long)]
    pub keyword: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page
    #[arg(long, default_value = "100")]
    pub page_size: i64,
}

pub async fn run(args: &SkusArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = SkuQuery::default()
        .with_page(args.page)
        .with_page_size(args.page_size);

    if let Some(brand_id) = args.brand_id {
        query = query.with_brand_id(brand_id);
    }
    if let Some(keyword) = &args.keyword {
        query = query.with_keyword(keyword);
    }

    let resp = client.get_skus(&query).await?;
    match format {
        OutputFormat::Table => {
            print_skus_table(&resp.items);
            eprintln!(
                "page {}/{} ({} SKUs total)",
                resp.page, resp.total_pages, resp.total
            );
        }
        OutputFormat::Json => print_json(&resp),
    }
    Ok(())
}
