use anyhow::Result;
use bmall_api::Client;

use crate::output::{print_brands_table, print_json, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let brands = client.get_brands().await?;
    match format {
        OutputFormat::Table => print_brands_table(&brands),
        OutputFormat::Json => print_json(&brands),
    }
    Ok(())
}
