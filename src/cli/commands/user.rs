use clap::Subcommand;
use serde_json::json;

use crate::auth::hash_password;
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::database::Database;

#[derive(Subcommand)]
pub enum UserCommands {
    #[command(about = "Create a user with a hashed password")]
    Add {
        username: String,
        password: String,
    },
}

pub async fn handle(cmd: UserCommands, database: &Database, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        UserCommands::Add { username, password } => {
            if username.is_empty() || password.is_empty() {
                anyhow::bail!("Username and password are required");
            }

            let digest = hash_password(&password)?;
            let user = database.users().create(&username, &digest).await?;

            output_success(
                &output_format,
                &format!("Created user '{}' with id {}", user.username, user.id),
                Some(json!({ "id": user.id, "username": user.username })),
            )
        }
    }
}
