//! Columnar cluster command implementations

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::confirm::confirm_delete;
use crate::cli::handlers::run_list_command;
use crate::cli::{ColumnarCommands, CommandContext, OutputFormat, WaitArgs, wait};
use crate::models::display::ColumnarDisplay;
use crate::output::detail::print_record;
use crate::output::notice;
use capella::CapellaColumnar;
use capella::client::WaitMode;
use capella::client::models::{CloudProvider, Columnar, ColumnarBuilder, Compute};
use capella::error::{ApiError, Result};

pub async fn run(opts: &GlobalOptions, command: ColumnarCommands) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    match command {
        ColumnarCommands::List { list } => {
            let project = ctx.project().await?;
            let clusters = CapellaColumnar::new(&project, None).await?;
            run_list_command::<Columnar, ColumnarDisplay, _>(
                ctx.format,
                &list,
                "columnar clusters",
                clusters.list(),
            )
            .await
        }
        ColumnarCommands::Get { name } => get(&ctx, &name).await,
        ColumnarCommands::Create {
            name,
            provider,
            region,
            compute,
            nodes,
        } => create(&ctx, &name, provider, &region, compute, nodes).await,
        ColumnarCommands::Delete { name, yes } => delete(&ctx, &name, yes).await,
        ColumnarCommands::Wait { name, wait } => run_wait(&ctx, &name, &wait).await,
    }
}

async fn get(ctx: &CommandContext, name: &str) -> Result<()> {
    let columnar = ctx.columnar(name).await?;
    let id = columnar.require_id()?;
    let record = columnar
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Columnar cluster {}", name)))?;

    print_record(
        ctx.format,
        &record.name,
        &[
            ("ID", Some(record.id.clone())),
            ("State", record.current_state.clone()),
            ("Provider", record.cloud_provider.clone()),
            ("Region", record.region.clone()),
            ("Compute", record.compute.map(|c| c.to_string())),
            ("Nodes", record.nodes.map(|n| n.to_string())),
        ],
        &record,
    )
}

async fn create(
    ctx: &CommandContext,
    name: &str,
    provider: CloudProvider,
    region: &str,
    compute: Compute,
    nodes: u32,
) -> Result<()> {
    let project = ctx.project().await?;
    let mut columnar = CapellaColumnar::new(&project, Some(name)).await?;

    let existing = columnar.id().map(str::to_string);
    let id = match existing {
        Some(id) => {
            notice(
                ctx.format,
                format!("{} Columnar cluster {} already exists ({})", "○".dimmed(), name.bold(), id),
            );
            id
        }
        None => {
            let config = ColumnarBuilder::new(provider)
                .region(region)
                .compute(compute, nodes)
                .build()?;
            let id = columnar.create(config).await?;
            notice(
                ctx.format,
                format!("{} Requested columnar cluster {} ({})", "✓".green(), name.bold(), id),
            );
            id
        }
    };

    if ctx.format == OutputFormat::Json {
        println!("{}", serde_json::json!({ "id": id, "name": name }));
    }
    Ok(())
}

async fn delete(ctx: &CommandContext, name: &str, yes: bool) -> Result<()> {
    let columnar = ctx.columnar(name).await?;
    if !confirm_delete(&format!("columnar cluster \"{}\"", name), yes)? {
        return Ok(());
    }
    columnar.delete().await?;
    notice(
        ctx.format,
        format!("{} Deletion of {} requested", "✓".green(), name.bold()),
    );
    Ok(())
}

async fn run_wait(ctx: &CommandContext, name: &str, args: &WaitArgs) -> Result<()> {
    let project = ctx.project().await?;
    let columnar = CapellaColumnar::new(&project, Some(name)).await?;
    let what = format!("columnar cluster {}", name);

    if columnar.id().is_none() && args.mode() == WaitMode::While {
        notice(ctx.format, format!("{} {} is gone", "✓".green(), what));
        return Ok(());
    }
    columnar.require_id()?;

    wait::run(ctx, &what, args, |mode, options, cancel| {
        columnar.wait(&args.status, mode, options, cancel)
    })
    .await
}
