use clap::{Parser, Subcommand};

/// `demo-registry` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "demo-registry",
    about = "Register, authenticate and list users in a local SQLite file",
    version
)]
pub(crate) struct CliArgs {
    /// SQLite connection URL, e.g. `sqlite:users.db`.
    #[arg(long = "database-url", value_name = "url", env = "GENERIC_DATA_STORE_URL")]
    pub(crate) database_url: Option<String>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Create the users table if it does not exist
    Init,
    /// Register a new user
    Add {
        username: String,
        email: String,
        password: String,
    },
    /// Check a username and password
    Auth { username: String, password: String },
    /// Print every registered user
    List {
        /// Print JSON instead of one line per user
        #[arg(long)]
        json: bool,
    },
}
