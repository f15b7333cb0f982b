mod api;
mod commands;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod models;
mod pretty;
mod session;
mod ui;
mod validation;
mod view_model;

use crate::commands::{CommandRunner, ShopsCommand, UsersCommand};
use crate::config::{Config, get_config_path};
use crate::pretty::{handle_cmd_error, print_cmd_error, print_cmd_info};
use crate::session::{run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::io;

/// Names the environment when no URL is configured: local, staging or production.
const ENVIRONMENT_VAR: &str = "COURIER_ADMIN_ENVIRONMENT";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Back-office administration for courier drivers and shop accounts
struct Args {
    /// Admin API base URL, overriding the config file and environment
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Dashboard {
        /// Paint a dark background behind the dashboard
        #[arg(long)]
        with_background: bool,
    },
    /// Manage users and drivers
    #[command(subcommand)]
    Users(UsersCommand),
    /// Manage shop accounts
    #[command(subcommand)]
    Shops(ShopsCommand),
    /// Show or change the stored configuration
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Clear the stored API URL and token
    Logout,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Store the API URL and/or the bearer token
    Set {
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
        #[arg(long, value_name = "TOKEN")]
        token: Option<String>,
    },
    /// Print the stored configuration
    Show,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    // A stderr logger would draw over the dashboard
    if !matches!(args.command, Command::Dashboard { .. }) {
        logging::init_headless_logger();
    }

    let named_environment = std::env::var(ENVIRONMENT_VAR).ok();
    let config_path = get_config_path()?;
    let api_url = args.api_url.as_deref();

    match args.command {
        Command::Dashboard { with_background } => {
            let session = setup_session(&config_path, api_url, named_environment.as_deref())?;
            run_tui_mode(session, with_background).await
        }
        Command::Users(command) => {
            let session = setup_session(&config_path, api_url, named_environment.as_deref())?;
            let mut runner = CommandRunner::new(
                &session.client,
                session.environment.api_url(),
                io::stdin().lock(),
            );
            runner.run_users(command).await
        }
        Command::Shops(command) => {
            let session = setup_session(&config_path, api_url, named_environment.as_deref())?;
            let mut runner = CommandRunner::new(
                &session.client,
                session.environment.api_url(),
                io::stdin().lock(),
            );
            runner.run_shops(command).await
        }
        Command::Config(ConfigCommand::Set { api_url, token }) => {
            if api_url.is_none() && token.is_none() {
                return Err(Box::from("Nothing to set. Pass --api-url and/or --token."));
            }
            let mut config = Config::load_or_default(&config_path)
                .map_err(|e| handle_cmd_error!(e, "Failed to load config"))?;
            if let Some(url) = api_url {
                config.api_url = url.trim().to_string();
            }
            if let Some(token) = token {
                config.auth_token = token.trim().to_string();
            }
            config
                .save(&config_path)
                .map_err(|e| handle_cmd_error!(e, "Failed to save config"))?;
            let path = config_path.display();
            print_cmd_info!("Configuration saved", "{}", path);
            Ok(())
        }
        Command::Config(ConfigCommand::Show) => {
            let config = Config::load_or_default(&config_path)?;
            println!("API URL: {}", config.api_url().unwrap_or("(environment default)"));
            println!(
                "Token:   {}",
                if config.auth_token().is_some() {
                    "set"
                } else {
                    "not set"
                }
            );
            Ok(())
        }
        Command::Logout => {
            println!("Logging out and clearing configuration file...");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}
