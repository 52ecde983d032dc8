use anyhow::Result;
use bmall_api::Client;
use clap::Args;

use crate::output::{print_items_table, print_json, OutputFormat};

#[derive(Args)]
pub struct ItemsArgs {
    /// SKU to list live listings for
    pub sku_id: i64,
}

pub async fn run(args: &ItemsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let items = client.get_sku_items(args.sku_id).await?;
    match format {
        OutputFormat::Table => print_items_table(&items),
        OutputFormat::Json => print_json(&items),
    }
    Ok(())
}
