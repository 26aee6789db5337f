mod config;
mod database;
mod entities;
mod forms;
mod http_server;
mod logging;
mod services;

#[cfg(test)]
mod test_utils;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::{Result, eyre::Context};

use crate::{config::Config, database::Database, logging::init_tracing};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The config file to use
    #[arg(short, long, env = "FYYUR_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter, either a level or a directive list such as `fyyur=debug,sqlx=warn`
    #[arg(long, default_value = "info", global = true, env = "LOG_LEVEL")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the web application
    Serve {
        /// The port to run the server on
        #[arg(short, long, default_value = "5000", env = "FYYUR_HTTP_PORT")]
        port: u16,
    },
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Create a default config file, if it doesn't exist
    CreateDefault,
    /// Print the path to the config file
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_tracing(&args.log_level)?;

    log::debug!("Fyyur starting");

    match args.command {
        Commands::Config(config_commands) => match config_commands {
            ConfigCommands::CreateDefault => {
                log::debug!("Creating default config");
                let path = Config::create_default()?;
                log::info!("Default config available at {}", path.display());
            }
            ConfigCommands::Path => match Config::config_path() {
                Some(path) => println!("{}", path.display()),
                None => println!("No default config path found"),
            },
        },
        Commands::Serve { port } => {
            log::debug!("Loading configuration");
            let config = {
                if let Some(config) = args.config {
                    Config::from_file(&config)
                } else {
                    Config::load()
                }
            }
            .with_context(|| "Failed to load fyyur config")?;

            let database = match config.database_url() {
                Some(url) => Database::connect(url).await?,
                None => {
                    log::debug!("Opening database at: {}", config.database_path().display());
                    Database::open(&config.database_path()).await?
                }
            };

            log::info!("Starting HTTP server on port: {}", port);
            http_server::app::start(port, database).await?;
        }
    }

    Ok(())
}
