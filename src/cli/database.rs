//! Database command implementations

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::confirm::confirm_delete;
use crate::cli::handlers::run_list_command;
use crate::cli::{
    CommandContext, DatabaseCommands, DatabaseCreateArgs, OutputFormat, WaitArgs, wait,
};
use crate::models::display::DatabaseDisplay;
use crate::output::detail::print_record;
use crate::output::notice;
use capella::CapellaDatabase;
use capella::client::WaitMode;
use capella::client::models::{Database, DatabaseBuilder, DatabaseConfig};
use capella::error::{ApiError, Result};

pub async fn run(opts: &GlobalOptions, command: DatabaseCommands) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    match command {
        DatabaseCommands::List { list } => {
            let project = ctx.project().await?;
            let databases = CapellaDatabase::new(&project, None).await?;
            run_list_command::<Database, DatabaseDisplay, _>(
                ctx.format,
                &list,
                "databases",
                databases.list(),
            )
            .await
        }
        DatabaseCommands::Get { name } => get(&ctx, &name).await,
        DatabaseCommands::Create(args) => create(&ctx, args).await,
        DatabaseCommands::Delete { name, yes } => delete(&ctx, &name, yes).await,
        DatabaseCommands::Wait { name, wait } => run_wait(&ctx, &name, &wait).await,
    }
}

async fn get(ctx: &CommandContext, name: &str) -> Result<()> {
    let database = ctx.database(name).await?;
    let id = database.require_id()?;
    let record = database
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Database {}", name)))?;

    let provider = record.cloud_provider.as_ref();
    print_record(
        ctx.format,
        &record.name,
        &[
            ("ID", Some(record.id.clone())),
            ("State", record.current_state.clone()),
            ("Provider", provider.map(|p| p.provider.clone())),
            ("Region", provider.map(|p| p.region.clone())),
            ("CIDR", provider.and_then(|p| p.cidr.clone())),
            ("Connection", record.connection_string.clone()),
            ("App Service", record.app_service_id.clone()),
            ("Created", Some(DatabaseDisplay::from(record.clone()).created)),
        ],
        &record,
    )
}

fn build_config(args: &DatabaseCreateArgs) -> Result<DatabaseConfig> {
    let mut builder = DatabaseBuilder::new(args.provider)
        .name(&args.name)
        .region(&args.region);
    if let Some(cidr) = &args.cidr {
        builder = builder.cidr(cidr);
    }
    if let Some(version) = &args.version {
        builder = builder.version(version);
    }
    if let Some(description) = &args.description {
        builder = builder.description(description);
    }
    builder = if args.ultra {
        builder.ultra_service_group(args.compute, args.nodes, args.storage)
    } else {
        builder.service_group(args.compute, args.nodes, args.storage)
    };
    builder.build()
}

async fn create(ctx: &CommandContext, args: DatabaseCreateArgs) -> Result<()> {
    let project = ctx.project().await?;
    let mut database = CapellaDatabase::new(&project, Some(&args.name)).await?;

    let existing = database.id().map(str::to_string);
    let id = match existing {
        Some(id) => {
            notice(
                ctx.format,
                format!("{} Database {} already exists ({})", "○".dimmed(), args.name.bold(), id),
            );
            id
        }
        None => {
            let id = database.create(build_config(&args)?).await?;
            notice(
                ctx.format,
                format!(
                    "{} Requested database {} ({}); follow with `capella database wait {} deploying`",
                    "✓".green(),
                    args.name.bold(),
                    id,
                    args.name
                ),
            );
            id
        }
    };

    if ctx.format == OutputFormat::Json {
        println!("{}", serde_json::json!({ "id": id, "name": args.name }));
    }
    Ok(())
}

async fn delete(ctx: &CommandContext, name: &str, yes: bool) -> Result<()> {
    let database = ctx.database(name).await?;
    if !confirm_delete(&format!("database \"{}\" and all of its data", name), yes)? {
        return Ok(());
    }
    database.delete().await?;
    notice(
        ctx.format,
        format!(
            "{} Deletion of {} requested; follow with `capella database wait {} destroying`",
            "✓".green(),
            name.bold(),
            name
        ),
    );
    Ok(())
}

async fn run_wait(ctx: &CommandContext, name: &str, args: &WaitArgs) -> Result<()> {
    let project = ctx.project().await?;
    let database = CapellaDatabase::new(&project, Some(name)).await?;
    let what = format!("database {}", name);

    if database.id().is_none() && args.mode() == WaitMode::While {
        notice(ctx.format, format!("{} {} is gone", "✓".green(), what));
        return Ok(());
    }
    database.require_id()?;

    wait::run(ctx, &what, args, |mode, options, cancel| {
        database.wait(&args.status, mode, options, cancel)
    })
    .await
}
