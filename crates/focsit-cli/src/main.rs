//! FOCSIT content API command line client
#![warn(missing_docs)]
#![warn(rustdoc::bare_urls)]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use focsit_content::{ApiConfig, ContentClient, PageLocation};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod config;
mod env_vars;
mod sub_commands;

use crate::config::Settings;

/// Command line client for the FOCSIT content API
#[derive(Parser)]
#[command(name = "focsit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// API base URL, skips host based resolution
    #[arg(long)]
    api_base_url: Option<String>,
    /// URL of the page requests are made for
    #[arg(long)]
    page_url: Option<String>,
    /// Logging level
    #[arg(short, long, default_value = "warn")]
    log_level: Level,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resolved API base URL
    BaseUrl,
    /// Resolve a stored asset path to an absolute URL
    Asset(sub_commands::asset::AssetSubCommand),
    /// List showcase projects
    Projects,
    /// List events
    Events,
    /// List job vacancies
    Vacancies,
    /// Send a contact message
    Contact(sub_commands::submit::ContactSubCommand),
    /// Apply for a job
    Apply(sub_commands::submit::ApplySubCommand),
    /// Register a college partnership lead
    Partnership(sub_commands::submit::PartnershipSubCommand),
    /// Upload a showcase project
    CreateProject(sub_commands::create::CreateProjectSubCommand),
    /// Upload an event
    CreateEvent(sub_commands::create::CreateEventSubCommand),
    /// Post a job vacancy
    CreateVacancy(sub_commands::create::CreateVacancySubCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Cli = Cli::parse();
    let default_filter = args.log_level;

    let http_filter = "reqwest=warn,hyper=warn";

    let env_filter = EnvFilter::new(format!("{},{}", default_filter, http_filter));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // defaults < file < env < flags
    let mut settings = Settings::new(args.config.clone()).from_env();
    if let Some(base_url) = args.api_base_url.clone() {
        settings.api.base_url = Some(base_url);
    }
    if let Some(page_url) = args.page_url.clone() {
        settings.api.page_url = Some(page_url);
    }

    tracing::debug!("Using settings: {:?}", settings);

    let location = settings
        .api
        .page_url
        .as_deref()
        .map(PageLocation::parse)
        .transpose()?;
    let client = ContentClient::new(ApiConfig::new(settings.api.base_url.clone()), location);

    match &args.command {
        Commands::BaseUrl => sub_commands::base_url::base_url(&client),
        Commands::Asset(sub_command_args) => sub_commands::asset::asset(&client, sub_command_args),
        Commands::Projects => sub_commands::list::projects(&client).await,
        Commands::Events => sub_commands::list::events(&client).await,
        Commands::Vacancies => sub_commands::list::vacancies(&client).await,
        Commands::Contact(sub_command_args) => {
            sub_commands::submit::contact(&client, sub_command_args).await
        }
        Commands::Apply(sub_command_args) => {
            sub_commands::submit::apply(&client, sub_command_args).await
        }
        Commands::Partnership(sub_command_args) => {
            sub_commands::submit::partnership(&client, sub_command_args).await
        }
        Commands::CreateProject(sub_command_args) => {
            sub_commands::create::create_project(&client, sub_command_args).await
        }
        Commands::CreateEvent(sub_command_args) => {
            sub_commands::create::create_event(&client, sub_command_args).await
        }
        Commands::CreateVacancy(sub_command_args) => {
            sub_commands::create::create_vacancy(&client, sub_command_args).await
        }
    }
}
