//! Network peer command implementations

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, PeerCommands};
use crate::models::display::PeerDisplay;
use crate::output::detail::print_record;
use crate::output::{Formattable, notice};
use capella::CapellaNetworkPeer;
use capella::error::{ApiError, Result};

pub async fn run(opts: &GlobalOptions, command: PeerCommands) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    match command {
        PeerCommands::List { database } => {
            let peers = peer(&ctx, &database, None).await?;
            let rows: Vec<PeerDisplay> = peers
                .list()
                .await?
                .into_iter()
                .map(PeerDisplay::from)
                .collect();
            rows.print(ctx.format)
        }
        PeerCommands::Get { database, name } => get(&ctx, &database, &name).await,
        PeerCommands::Delete { database, name } => {
            peer(&ctx, &database, Some(&name)).await?.delete().await?;
            notice(
                ctx.format,
                format!("{} Deletion of peer {} requested", "✓".green(), name.bold()),
            );
            Ok(())
        }
    }
}

async fn peer(
    ctx: &CommandContext,
    database: &str,
    name: Option<&str>,
) -> Result<CapellaNetworkPeer> {
    let database = ctx.database(database).await?;
    CapellaNetworkPeer::new(&database, name).await
}

async fn get(ctx: &CommandContext, database: &str, name: &str) -> Result<()> {
    let peer = peer(ctx, database, Some(name)).await?;
    let id = peer.require_id()?;
    let record = peer
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Network peer {}", name)))?;

    let commands = (!record.commands.is_empty()).then(|| record.commands.join("\n    "));
    print_record(
        ctx.format,
        &record.name,
        &[
            ("ID", Some(record.id.clone())),
            ("Provider", record.provider_type.clone()),
            ("State", record.state().map(str::to_string)),
            ("Accept with", commands),
        ],
        &record,
    )
}
