use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::database::Database;

/// The schema is applied when the store is opened; this just reports it.
pub async fn handle(database: &Database, output_format: OutputFormat) -> anyhow::Result<()> {
    database.health_check().await?;
    output_success(&output_format, "Database initialized", None)
}
