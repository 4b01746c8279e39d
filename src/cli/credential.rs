//! Database credential command implementations

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, CredentialCommands, OutputFormat};
use crate::models::display::CredentialDisplay;
use crate::output::{Formattable, notice};
use capella::CapellaDatabaseCredentials;
use capella::client::models::{DatabaseCredentialConfig, DatabaseCredentialsBuilder};
use capella::error::Result;

pub async fn run(opts: &GlobalOptions, command: CredentialCommands) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    match command {
        CredentialCommands::List { database } => {
            let credentials = credentials(&ctx, &database, None).await?;
            let rows: Vec<CredentialDisplay> = credentials
                .list()
                .await?
                .into_iter()
                .map(CredentialDisplay::from)
                .collect();
            rows.print(ctx.format)
        }
        CredentialCommands::Create {
            database,
            name,
            password,
            read_only,
            bucket,
        } => {
            let config = credential_config(&name, password, read_only, &bucket);
            create(&ctx, &database, config).await
        }
        CredentialCommands::Delete { database, name } => {
            credentials(&ctx, &database, Some(&name))
                .await?
                .delete()
                .await?;
            notice(
                ctx.format,
                format!("{} Deleted credential {}", "✓".green(), name.bold()),
            );
            Ok(())
        }
    }
}

async fn credentials(
    ctx: &CommandContext,
    database: &str,
    name: Option<&str>,
) -> Result<CapellaDatabaseCredentials> {
    let database = ctx.database(database).await?;
    CapellaDatabaseCredentials::new(&database, name).await
}

fn credential_config(
    name: &str,
    password: String,
    read_only: bool,
    buckets: &[String],
) -> DatabaseCredentialConfig {
    let mut builder = DatabaseCredentialsBuilder::new(name, Some(password));
    if read_only {
        builder = builder.data_read_only();
    }
    for bucket in buckets {
        builder = builder.bucket(bucket);
    }
    builder.build()
}

async fn create(
    ctx: &CommandContext,
    database: &str,
    config: DatabaseCredentialConfig,
) -> Result<()> {
    let mut credentials = credentials(ctx, database, Some(&config.name)).await?;

    let existing = credentials.id().map(str::to_string);
    let id = match existing {
        Some(id) => {
            notice(
                ctx.format,
                format!("{} Credential {} already exists ({})", "○".dimmed(), config.name.bold(), id),
            );
            id
        }
        None => {
            let id = credentials.create(&config).await?;
            notice(
                ctx.format,
                format!("{} Created credential {} ({})", "✓".green(), config.name.bold(), id),
            );
            id
        }
    };

    if ctx.format == OutputFormat::Json {
        println!("{}", serde_json::json!({ "id": id, "name": config.name }));
    }
    Ok(())
}
