//! App Service command implementations

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::confirm::confirm_delete;
use crate::cli::{AppServiceCommands, CommandContext, OutputFormat, WaitArgs, wait};
use crate::output::detail::print_record;
use crate::output::notice;
use capella::CapellaAppService;
use capella::client::WaitMode;
use capella::client::models::{AppServiceBuilder, Compute};
use capella::error::{ApiError, Result};

pub async fn run(opts: &GlobalOptions, command: AppServiceCommands) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    match command {
        AppServiceCommands::Get { database } => get(&ctx, &database).await,
        AppServiceCommands::Create {
            database,
            name,
            compute,
            nodes,
        } => create(&ctx, &database, &name, compute, nodes).await,
        AppServiceCommands::Delete { database, yes } => delete(&ctx, &database, yes).await,
        AppServiceCommands::Activate { database } => activate(&ctx, &database, true).await,
        AppServiceCommands::Deactivate { database } => activate(&ctx, &database, false).await,
        AppServiceCommands::Wait { database, wait } => run_wait(&ctx, &database, &wait).await,
    }
}

async fn app_service(ctx: &CommandContext, database: &str) -> Result<CapellaAppService> {
    let database = ctx.database(database).await?;
    CapellaAppService::new(&database).await
}

async fn get(ctx: &CommandContext, database: &str) -> Result<()> {
    let app_service = app_service(ctx, database).await?;
    let id = app_service.require_id()?;
    let record = app_service
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("App Service {}", id)))?;

    print_record(
        ctx.format,
        &record.name,
        &[
            ("ID", Some(record.id.clone())),
            ("Database ID", record.cluster_id.clone()),
            ("State", record.current_state.clone()),
            ("Compute", record.compute.map(|c| c.to_string())),
            ("Nodes", record.nodes.map(|n| n.to_string())),
            ("Version", record.version.clone()),
        ],
        &record,
    )
}

async fn create(
    ctx: &CommandContext,
    database: &str,
    name: &str,
    compute: Compute,
    nodes: u32,
) -> Result<()> {
    let mut app_service = app_service(ctx, database).await?;

    let existing = app_service.id().map(str::to_string);
    let id = match existing {
        Some(id) => {
            notice(
                ctx.format,
                format!("{} {} already has an App Service ({})", "○".dimmed(), database.bold(), id),
            );
            id
        }
        None => {
            let config = AppServiceBuilder::new()
                .name(name)
                .compute(compute, nodes)
                .build()?;
            let id = app_service.create(&config).await?;
            notice(
                ctx.format,
                format!("{} Requested App Service {} ({})", "✓".green(), name.bold(), id),
            );
            id
        }
    };

    if ctx.format == OutputFormat::Json {
        println!("{}", serde_json::json!({ "id": id, "name": name }));
    }
    Ok(())
}

async fn delete(ctx: &CommandContext, database: &str, yes: bool) -> Result<()> {
    let app_service = app_service(ctx, database).await?;
    app_service.require_id()?;
    if !confirm_delete(&format!("the App Service of \"{}\"", database), yes)? {
        return Ok(());
    }
    app_service.delete().await?;
    notice(
        ctx.format,
        format!("{} Deletion of the App Service of {} requested", "✓".green(), database.bold()),
    );
    Ok(())
}

async fn activate(ctx: &CommandContext, database: &str, on: bool) -> Result<()> {
    app_service(ctx, database).await?.set_activation(on).await?;
    let verb = if on { "Activation" } else { "Deactivation" };
    notice(
        ctx.format,
        format!("{} {} of the App Service of {} requested", "✓".green(), verb, database.bold()),
    );
    Ok(())
}

async fn run_wait(ctx: &CommandContext, database: &str, args: &WaitArgs) -> Result<()> {
    let app_service = app_service(ctx, database).await?;
    let what = format!("App Service of {}", database);

    if app_service.id().is_none() && args.mode() == WaitMode::While {
        notice(ctx.format, format!("{} {} is gone", "✓".green(), what));
        return Ok(());
    }
    app_service.require_id()?;

    wait::run(ctx, &what, args, |mode, options, cancel| {
        app_service.wait(&args.status, mode, options, cancel)
    })
    .await
}
