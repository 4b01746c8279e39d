//! Capella CLI - command-line companion for the Couchbase Capella management API

use clap::{CommandFactory, Parser};

mod cli;
mod models;
mod output;

use capella::error::Result;
use cli::args::GlobalOptions;
use cli::{Cli, Commands, ProfileCommands};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; `--debug` raises the default from warn to debug.
fn init_logging(debug: bool) {
    let default = if debug { "capella=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("capella version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Profile(cmd) => match cmd {
            ProfileCommands::List => cli::profile::list(&opts),
            ProfileCommands::Use { name } => cli::profile::use_profile(&name, &opts),
        },
        Commands::Org(cmd) => cli::org::run(&opts, cmd).await,
        Commands::Project(cmd) => cli::project::run(&opts, cmd).await,
        Commands::User(cmd) => cli::user::run(&opts, cmd).await,
        Commands::Database(cmd) => cli::database::run(&opts, cmd).await,
        Commands::Columnar(cmd) => cli::columnar::run(&opts, cmd).await,
        Commands::AppService(cmd) => cli::app_service::run(&opts, cmd).await,
        Commands::Cidr(cmd) => cli::cidr::run(&opts, cmd).await,
        Commands::Credential(cmd) => cli::credential::run(&opts, cmd).await,
        Commands::Peer(cmd) => cli::peer::run(&opts, cmd).await,
        Commands::Completion { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "capella", &mut std::io::stdout());
            Ok(())
        }
    }
}
