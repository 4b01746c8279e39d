//! Organization command implementations

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::{CommandContext, OrgCommands};
use crate::models::display::OrgDisplay;
use crate::output::detail::print_record;
use capella::client::models::Organization;
use capella::error::{ApiError, Result};

pub async fn run(opts: &GlobalOptions, command: OrgCommands) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    match command {
        OrgCommands::List { list } => {
            let org = ctx.organization().await?;
            run_list_command::<Organization, OrgDisplay, _>(
                ctx.format,
                &list,
                "organizations",
                org.list(),
            )
            .await
        }
        OrgCommands::Get => get(&ctx).await,
    }
}

async fn get(ctx: &CommandContext) -> Result<()> {
    let org = ctx.organization().await?;
    let record = org
        .get(org.id())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Organization {}", org.id())))?;

    let display = OrgDisplay::from(record.clone());
    print_record(
        ctx.format,
        &record.name,
        &[
            ("ID", Some(display.id)),
            ("Description", record.description.clone()),
            ("Created", Some(display.created)),
            ("Path", Some(org.path())),
        ],
        &record,
    )
}
