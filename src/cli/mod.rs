//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod app_service;
pub mod args;
pub mod cidr;
pub mod columnar;
pub mod confirm;
pub mod context;
pub mod credential;
pub mod database;
pub mod handlers;
pub mod org;
pub mod peer;
pub mod profile;
pub mod project;
pub mod status;
pub mod user;
pub mod wait;

pub use args::{ListArgs, OutputFormat, WaitArgs};
pub use clap_complete::Shell;
pub use context::CommandContext;

use capella::client::models::{CloudProvider, Compute};

/// Capella CLI - manage Couchbase Capella organizations, projects, and clusters
#[derive(Parser, Debug)]
#[command(name = "capella")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "CAPELLA_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Configuration profile to use
    #[arg(long, global = true, env = "CAPELLA_PROFILE", hide_env = true)]
    pub profile: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "CAPELLA_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the profile's organization
    #[arg(long, global = true)]
    pub org: Option<String>,

    /// Override the API host
    #[arg(long, global = true, hide = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "CAPELLA_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show configuration and profile status
    Status,

    /// Show version information
    Version,

    /// Manage configuration profiles
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Inspect organizations
    #[command(subcommand)]
    Org(OrgCommands),

    /// Manage projects
    #[command(subcommand)]
    Project(ProjectCommands),

    /// Inspect organization users and project ownership
    #[command(subcommand)]
    User(UserCommands),

    /// Manage databases (operational clusters)
    #[command(subcommand, visible_alias = "db")]
    Database(DatabaseCommands),

    /// Manage columnar (analytics) clusters
    #[command(subcommand)]
    Columnar(ColumnarCommands),

    /// Manage the App Service of a database
    #[command(subcommand)]
    AppService(AppServiceCommands),

    /// Manage cluster IP allow lists
    #[command(subcommand)]
    Cidr(CidrCommands),

    /// Manage database credentials
    #[command(subcommand)]
    Credential(CredentialCommands),

    /// Inspect database network peers
    #[command(subcommand)]
    Peer(PeerCommands),

    /// Generate shell completions
    #[command(after_help = "\
  bash:   capella completion bash > /etc/bash_completion.d/capella
  zsh:    capella completion zsh > \"${fpath[1]}/_capella\"
  fish:   capella completion fish > ~/.config/fish/completions/capella.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// List configured profiles
    List,

    /// Make a profile the active one
    Use {
        /// Profile name
        name: String,
    },
}

/// Organization subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// List all accessible organizations
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show the organization selected by the profile
    Get,
}

/// Project subcommands
#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List projects in the organization
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show one project (defaults to the profile's project)
    Get {
        /// Project name
        name: Option<String>,
    },

    /// Create a project
    #[command(after_help = "EXAMPLES:\n  \
            capella project create pytest-project\n  \
            capella project create pytest-project --description \"CI runs\"")]
    Create {
        /// Project name
        name: String,

        /// Project description
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// Make this account email a project owner
        #[arg(long)]
        owner: Option<String>,
    },

    /// Delete a project
    Delete {
        /// Project name
        name: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// User subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List organization users
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show one user
    Get {
        /// User email
        email: String,
    },

    /// Make a user owner of a project
    OwnProject {
        /// User email
        email: String,
        /// Project name
        project: String,
    },

    /// List the ids of projects a user has roles on
    Projects {
        /// User email
        email: String,
    },
}

/// Database creation options
#[derive(clap::Args, Debug, Clone)]
pub struct DatabaseCreateArgs {
    /// Database name
    pub name: String,

    /// Cloud provider (aws, gcp, azure)
    #[arg(long, default_value = "aws")]
    pub provider: CloudProvider,

    /// Cloud region
    #[arg(long)]
    pub region: String,

    /// CIDR block for the cluster network
    #[arg(long)]
    pub cidr: Option<String>,

    /// Node size as CPUxRAM
    #[arg(long, default_value = "4x16")]
    pub compute: Compute,

    /// Number of nodes
    #[arg(long, default_value_t = 3)]
    pub nodes: u32,

    /// Disk size per node in GB
    #[arg(long, default_value_t = 256)]
    pub storage: u32,

    /// Use Azure Ultra disks
    #[arg(long)]
    pub ultra: bool,

    /// Couchbase Server version
    #[arg(long)]
    pub version: Option<String>,

    /// Database description
    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

/// Database subcommands
#[derive(Subcommand, Debug)]
pub enum DatabaseCommands {
    /// List databases in the project
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show one database
    Get {
        /// Database name
        name: String,
    },

    /// Create a database
    #[command(after_help = "EXAMPLES:\n  \
            capella database create pytest-cluster --region us-east-2\n  \
            capella database create pytest-cluster --provider azure --region eastus --ultra")]
    Create(DatabaseCreateArgs),

    /// Delete a database (does not wait)
    Delete {
        /// Database name
        name: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Wait for a database status transition
    #[command(after_help = "EXAMPLES:\n  \
            capella database wait pytest-cluster deploying           # while deploying\n  \
            capella database wait pytest-cluster healthy --until     # until healthy\n  \
            capella database wait pytest-cluster destroying          # until gone")]
    Wait {
        /// Database name
        name: String,

        #[command(flatten)]
        wait: WaitArgs,
    },
}

/// Columnar subcommands
#[derive(Subcommand, Debug)]
pub enum ColumnarCommands {
    /// List columnar clusters in the project
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show one columnar cluster
    Get {
        /// Cluster name
        name: String,
    },

    /// Create a columnar cluster
    Create {
        /// Cluster name
        name: String,

        /// Cloud provider (aws, gcp, azure)
        #[arg(long, default_value = "aws")]
        provider: CloudProvider,

        /// Cloud region
        #[arg(long)]
        region: String,

        /// Node size as CPUxRAM
        #[arg(long, default_value = "4x32")]
        compute: Compute,

        /// Number of nodes
        #[arg(long, default_value_t = 1)]
        nodes: u32,
    },

    /// Delete a columnar cluster (does not wait)
    Delete {
        /// Cluster name
        name: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Wait for a columnar cluster status transition
    Wait {
        /// Cluster name
        name: String,

        #[command(flatten)]
        wait: WaitArgs,
    },
}

/// App Service subcommands
#[derive(Subcommand, Debug)]
pub enum AppServiceCommands {
    /// Show the App Service of a database
    Get {
        /// Database name
        database: String,
    },

    /// Create an App Service for a database
    Create {
        /// Database name
        database: String,

        /// App Service name
        name: String,

        /// Node size as CPUxRAM
        #[arg(long, default_value = "2x4")]
        compute: Compute,

        /// Number of nodes
        #[arg(long, default_value_t = 2)]
        nodes: u32,
    },

    /// Delete the App Service of a database (does not wait)
    Delete {
        /// Database name
        database: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Turn the App Service on
    Activate {
        /// Database name
        database: String,
    },

    /// Turn the App Service off
    Deactivate {
        /// Database name
        database: String,
    },

    /// Wait for an App Service status transition
    Wait {
        /// Database name
        database: String,

        #[command(flatten)]
        wait: WaitArgs,
    },
}

/// Allowed CIDR subcommands
#[derive(Subcommand, Debug)]
pub enum CidrCommands {
    /// List a cluster's allowed CIDRs
    List {
        /// Database (or columnar cluster) name
        cluster: String,

        /// CLUSTER names a columnar cluster
        #[arg(long)]
        columnar: bool,
    },

    /// Allow a CIDR block to reach a cluster
    Add {
        /// Database (or columnar cluster) name
        cluster: String,

        /// CIDR block, e.g. 10.0.0.0/16
        cidr: String,

        /// Comment stored with the entry
        #[arg(long)]
        comment: Option<String>,

        /// CLUSTER names a columnar cluster
        #[arg(long)]
        columnar: bool,
    },

    /// Remove a CIDR block from a cluster's allow list
    Remove {
        /// Database (or columnar cluster) name
        cluster: String,

        /// CIDR block
        cidr: String,

        /// CLUSTER names a columnar cluster
        #[arg(long)]
        columnar: bool,
    },
}

/// Database credential subcommands
#[derive(Subcommand, Debug)]
pub enum CredentialCommands {
    /// List a database's credentials
    List {
        /// Database name
        database: String,
    },

    /// Create database credentials
    Create {
        /// Database name
        database: String,

        /// Credential name
        name: String,

        /// Password
        password: String,

        /// Grant read-only data access
        #[arg(long)]
        read_only: bool,

        /// Restrict access to these buckets
        #[arg(long, value_delimiter = ',')]
        bucket: Vec<String>,
    },

    /// Delete database credentials
    Delete {
        /// Database name
        database: String,

        /// Credential name
        name: String,
    },
}

/// Network peer subcommands
#[derive(Subcommand, Debug)]
pub enum PeerCommands {
    /// List a database's network peers
    List {
        /// Database name
        database: String,
    },

    /// Show one network peer
    Get {
        /// Database name
        database: String,
        /// Peer name
        name: String,
    },

    /// Delete a network peer
    Delete {
        /// Database name
        database: String,
        /// Peer name
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_database_wait_args() {
        let cli = Cli::parse_from([
            "capella", "database", "wait", "pytest-cluster", "healthy", "--until", "--timeout", "600",
        ]);
        match cli.command {
            Commands::Database(DatabaseCommands::Wait { name, wait }) => {
                assert_eq!(name, "pytest-cluster");
                assert_eq!(wait.status, "healthy");
                assert!(wait.until);
                assert_eq!(wait.timeout, Some(600));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_database_create_defaults() {
        let cli = Cli::parse_from(["capella", "db", "create", "pytest-cluster", "--region", "us-east-2"]);
        match cli.command {
            Commands::Database(DatabaseCommands::Create(args)) => {
                assert_eq!(args.provider, CloudProvider::Aws);
                assert_eq!(args.compute, Compute { cpu: 4, ram: 16 });
                assert_eq!(args.nodes, 3);
                assert!(!args.ultra);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_delete_yes_flag() {
        let cli = Cli::parse_from(["capella", "project", "delete", "pytest-project", "-y"]);
        assert!(matches!(
            cli.command,
            Commands::Project(ProjectCommands::Delete { yes: true, .. })
        ));

        let cli = Cli::parse_from(["capella", "db", "delete", "pytest-cluster"]);
        assert!(matches!(
            cli.command,
            Commands::Database(DatabaseCommands::Delete { yes: false, .. })
        ));
    }

    #[test]
    fn test_bad_compute_rejected() {
        let result = Cli::try_parse_from([
            "capella", "db", "create", "x", "--region", "r", "--compute", "big",
        ]);
        assert!(result.is_err());
    }
}
