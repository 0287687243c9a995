use crate::cli::utils::{output_empty_collection, output_json};
use crate::cli::OutputFormat;
use crate::database::Database;
use crate::filter::ProductFilter;

pub async fn handle(database: &Database, output_format: OutputFormat) -> anyhow::Result<()> {
    let repo = database.products();
    let total = repo.count().await?;
    if total == 0 {
        return output_empty_collection(&output_format, "products", "No products in the catalog");
    }

    let (products, _) = repo.list(&ProductFilter::new(1, total)).await?;

    match output_format {
        OutputFormat::Json => output_json(&serde_json::json!({ "products": products }))?,
        OutputFormat::Text => {
            println!("{:<5} {:<25} {:>10}  {}", "ID", "TITLE", "PRICE", "CATEGORY");
            for p in &products {
                println!("{:<5} {:<25} {:>10.2}  {}", p.id, p.title, p.price, p.category);
            }
        }
    }
    Ok(())
}
