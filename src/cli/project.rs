//! Project command implementations

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::confirm::confirm_delete;
use crate::cli::handlers::run_list_command;
use crate::cli::{CommandContext, OutputFormat, ProjectCommands};
use crate::models::display::ProjectDisplay;
use crate::output::detail::print_record;
use crate::output::notice;
use capella::client::models::{Project, ProjectBuilder};
use capella::error::{ApiError, Result};
use capella::{CapellaProject, CapellaUser};

pub async fn run(opts: &GlobalOptions, command: ProjectCommands) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    match command {
        ProjectCommands::List { list } => {
            let project = ctx.projects().await?;
            run_list_command::<Project, ProjectDisplay, _>(
                ctx.format,
                &list,
                "projects",
                project.list(),
            )
            .await
        }
        ProjectCommands::Get { name } => get(&ctx, name.as_deref()).await,
        ProjectCommands::Create {
            name,
            description,
            owner,
        } => create(&ctx, &name, description.as_deref(), owner.as_deref()).await,
        ProjectCommands::Delete { name, yes } => delete(&ctx, &name, yes).await,
    }
}

async fn get(ctx: &CommandContext, name: Option<&str>) -> Result<()> {
    let project = match name {
        Some(name) => ctx.project_named(name).await?,
        None => ctx.project().await?,
    };
    let id = project.require_id()?;
    let record = project
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Project {}", id)))?;

    print_project(ctx.format, &record)
}

fn print_project(format: OutputFormat, record: &Project) -> Result<()> {
    let display = ProjectDisplay::from(record.clone());
    print_record(
        format,
        &record.name,
        &[
            ("ID", Some(display.id)),
            ("Description", record.description.clone()),
            ("Created", Some(display.created)),
        ],
        record,
    )
}

async fn create(
    ctx: &CommandContext,
    name: &str,
    description: Option<&str>,
    owner: Option<&str>,
) -> Result<()> {
    let mut project = ctx.project_named(name).await?;

    let existing = project.id().map(str::to_string);
    let id = match existing {
        Some(id) => {
            notice(
                ctx.format,
                format!("{} Project {} already exists ({})", "○".dimmed(), name.bold(), id),
            );
            id
        }
        None => {
            let mut builder = ProjectBuilder::new().name(name);
            if let Some(description) = description {
                builder = builder.description(description);
            }
            let id = project.create(&builder.build()?).await?;
            notice(
                ctx.format,
                format!("{} Created project {} ({})", "✓".green(), name.bold(), id),
            );
            id
        }
    };

    let owner = owner.or(ctx.profile.account_email.as_deref());
    if let Some(email) = owner {
        set_owner(ctx, &project, email).await?;
    }

    if ctx.format == OutputFormat::Json {
        println!("{}", serde_json::json!({ "id": id, "name": name }));
    }
    Ok(())
}

async fn set_owner(ctx: &CommandContext, project: &CapellaProject, email: &str) -> Result<()> {
    let org = ctx.organization().await?;
    let user = CapellaUser::new(&org, Some(email)).await?;
    let project_id = project.require_id()?;

    if user.projects_by_owner().await?.iter().any(|p| p == project_id) {
        return Ok(());
    }
    user.set_project_owner(project_id).await?;
    notice(ctx.format, format!("{} {} now owns the project", "✓".green(), email));
    Ok(())
}

async fn delete(ctx: &CommandContext, name: &str, yes: bool) -> Result<()> {
    let project = ctx.project_named(name).await?;
    project.require_id()?;
    if !confirm_delete(&format!("project \"{}\"", name), yes)? {
        return Ok(());
    }
    project.delete().await?;
    notice(ctx.format, format!("{} Deleted project {}", "✓".green(), name.bold()));
    Ok(())
}
