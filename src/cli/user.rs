//! User command implementations

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::{CommandContext, OutputFormat, UserCommands};
use crate::models::display::{UserDisplay, or_none};
use crate::output::detail::print_record;
use crate::output::notice;
use capella::CapellaUser;
use capella::client::models::User;
use capella::error::{ApiError, Result};

pub async fn run(opts: &GlobalOptions, command: UserCommands) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    match command {
        UserCommands::List { list } => {
            let org = ctx.organization().await?;
            let users = CapellaUser::new(&org, None).await?;
            run_list_command::<User, UserDisplay, _>(ctx.format, &list, "users", users.list())
                .await
        }
        UserCommands::Get { email } => get(&ctx, &email).await,
        UserCommands::OwnProject { email, project } => own_project(&ctx, &email, &project).await,
        UserCommands::Projects { email } => projects(&ctx, &email).await,
    }
}

async fn user(ctx: &CommandContext, email: &str) -> Result<CapellaUser> {
    let org = ctx.organization().await?;
    CapellaUser::new(&org, Some(email)).await
}

async fn get(ctx: &CommandContext, email: &str) -> Result<()> {
    let record = user(ctx, email)
        .await?
        .get_by_email()
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User {}", email)))?;

    print_record(
        ctx.format,
        &record.email,
        &[
            ("ID", Some(record.id.clone())),
            ("Name", record.name.clone()),
            ("Status", record.status.clone()),
            ("Roles", Some(record.organization_roles.join(", "))),
            ("Projects", Some(record.project_ids().len().to_string())),
        ],
        &record,
    )
}

async fn own_project(ctx: &CommandContext, email: &str, project: &str) -> Result<()> {
    let user = user(ctx, email).await?;
    let project_id = ctx.project_named(project).await?.require_id()?.to_string();

    if user.projects_by_owner().await?.contains(&project_id) {
        notice(
            ctx.format,
            format!("{} {} already has a role on {}", "○".dimmed(), email, project.bold()),
        );
        return Ok(());
    }

    user.set_project_owner(&project_id).await?;
    notice(
        ctx.format,
        format!("{} {} now owns {}", "✓".green(), email, project.bold()),
    );
    Ok(())
}

async fn projects(ctx: &CommandContext, email: &str) -> Result<()> {
    let ids = user(ctx, email).await?.projects_by_owner().await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ids)?),
        _ if ids.is_empty() => println!("{}", or_none(None)),
        _ => {
            for id in ids {
                println!("{}", id);
            }
        }
    }
    Ok(())
}
