//! Allowed CIDR command implementations

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CidrCommands, CommandContext, OutputFormat};
use crate::models::display::CidrDisplay;
use crate::output::{Formattable, notice};
use capella::CapellaAllowedCidr;
use capella::client::models::AllowedCidrBuilder;
use capella::error::Result;

pub async fn run(opts: &GlobalOptions, command: CidrCommands) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    match command {
        CidrCommands::List { cluster, columnar } => {
            let entries = allowed_cidr(&ctx, &cluster, columnar, None).await?;
            let rows: Vec<CidrDisplay> = entries
                .list()
                .await?
                .into_iter()
                .map(CidrDisplay::from)
                .collect();
            rows.print(ctx.format)
        }
        CidrCommands::Add {
            cluster,
            cidr,
            comment,
            columnar,
        } => add(&ctx, &cluster, &cidr, comment.as_deref(), columnar).await,
        CidrCommands::Remove {
            cluster,
            cidr,
            columnar,
        } => {
            allowed_cidr(&ctx, &cluster, columnar, Some(&cidr))
                .await?
                .delete()
                .await?;
            notice(
                ctx.format,
                format!("{} Removed {} from {}", "✓".green(), cidr.bold(), cluster),
            );
            Ok(())
        }
    }
}

/// Allow-list handle on a database, or on a columnar cluster with `columnar`.
async fn allowed_cidr(
    ctx: &CommandContext,
    cluster: &str,
    columnar: bool,
    cidr: Option<&str>,
) -> Result<CapellaAllowedCidr> {
    if columnar {
        CapellaAllowedCidr::new(&ctx.columnar(cluster).await?, cidr).await
    } else {
        CapellaAllowedCidr::new(&ctx.database(cluster).await?, cidr).await
    }
}

async fn add(
    ctx: &CommandContext,
    cluster: &str,
    cidr: &str,
    comment: Option<&str>,
    columnar: bool,
) -> Result<()> {
    let mut entry = allowed_cidr(ctx, cluster, columnar, Some(cidr)).await?;

    let existing = entry.id().map(str::to_string);
    let id = match existing {
        Some(id) => {
            notice(
                ctx.format,
                format!("{} {} is already allowed on {}", "○".dimmed(), cidr.bold(), cluster),
            );
            id
        }
        None => {
            let mut builder = AllowedCidrBuilder::new(cidr);
            if let Some(comment) = comment {
                builder = builder.comment(comment);
            }
            let id = entry.create(&builder.build()).await?;
            notice(
                ctx.format,
                format!("{} Allowed {} on {}", "✓".green(), cidr.bold(), cluster),
            );
            id
        }
    };

    if ctx.format == OutputFormat::Json {
        println!("{}", serde_json::json!({ "id": id, "cidr": cidr }));
    }
    Ok(())
}
