pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::config::{database_url_from_path, AppConfig};
use crate::database::Database;

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Catalog CLI - schema setup, sample data and user management")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Database file or sqlite: URL (defaults to DATABASE_URL)")]
    pub db: Option<String>,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Create the catalog tables if they do not exist")]
    Init,

    #[command(about = "Load the sample catalog and the sample user")]
    Seed,

    #[command(about = "User management")]
    User {
        #[command(subcommand)]
        cmd: commands::user::UserCommands,
    },

    #[command(about = "Print every product in the catalog")]
    Products,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Open the store named by `--db`, falling back to the environment, and
/// make sure the schema exists.
pub async fn open_database(db: Option<&str>) -> anyhow::Result<Database> {
    let mut config = AppConfig::from_env();
    if let Some(path) = db {
        config.database.url = database_url_from_path(path);
    }

    let database = Database::connect(&config.database).await?;
    database.migrate().await?;
    Ok(database)
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let database = open_database(cli.db.as_deref()).await?;

    let result = match cli.command {
        Commands::Init => commands::init::handle(&database, output_format).await,
        Commands::Seed => commands::seed::handle(&database, output_format).await,
        Commands::User { cmd } => commands::user::handle(cmd, &database, output_format).await,
        Commands::Products => commands::products::handle(&database, output_format).await,
    };

    database.close().await;
    result
}
