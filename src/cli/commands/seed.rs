use serde_json::json;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::database::seed::seed_sample_data;
use crate::database::Database;

pub async fn handle(database: &Database, output_format: OutputFormat) -> anyhow::Result<()> {
    let report = seed_sample_data(database).await?;

    output_success(
        &output_format,
        &format!(
            "Database seeded: {} products added, sample user {}",
            report.products_added,
            if report.user_added { "created" } else { "already present" }
        ),
        Some(json!({
            "products_added": report.products_added,
            "user_added": report.user_added
        })),
    )
}
