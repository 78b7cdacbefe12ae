use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use crate::cli::{CliArgs, Command};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = CliArgs::parse();

    match args.database_url.as_deref() {
        Some(url) => user_registry::init_with_url(url).await?,
        None => user_registry::init().await?,
    }

    run(args.command).await
}

async fn run(command: Command) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match command {
        // init() above has already created the table
        Command::Init => {
            println!("Users table is ready");
            Ok(ExitCode::SUCCESS)
        }
        Command::Add {
            username,
            email,
            password,
        } => {
            if user_registry::add_user(&username, &email, &password).await? {
                println!("Registered user '{username}'");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("Username '{username}' is already taken");
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Auth { username, password } => {
            if user_registry::authenticate_user(&username, &password).await? {
                println!("Authentication succeeded");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("Authentication failed");
                Ok(ExitCode::FAILURE)
            }
        }
        Command::List { json: false } => {
            user_registry::display_users().await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::List { json: true } => {
            let users = user_registry::list_users().await?;
            user_registry::write_user_list_json(&users, &mut io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Logs go to stderr so stdout only carries command output
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        #[cfg(debug_assertions)]
        {
            format!("user_registry=debug,{}=debug,warn", env!("CARGO_CRATE_NAME")).into()
        }

        #[cfg(not(debug_assertions))]
        {
            "warn".into()
        }
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::debug!("You can adjust verbosity by setting the RUST_LOG environment variable.");
}
