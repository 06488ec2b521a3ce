use std::path::PathBuf;

use crate::catalog::{self, CatalogKind};
use crate::output::OutputFormat;
use crate::property;
use clap::{Args, Parser, Subcommand};
use inmo::api::ApiClient;
use inmo::config::{ApiConfig, AppConfig};
use inmo::error::AppError;
use inmo::services::Services;
use inmo::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "inmo-console",
    about = "Maintain catalogs and edit property listings against the back-office API",
    version
)]
struct Cli {
    /// Override API_URL for this invocation
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List and edit reference catalogs
    Catalog {
        #[arg(value_enum)]
        resource: CatalogKind,
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Inspect, save and publish properties
    Property {
        #[command(subcommand)]
        command: PropertyCommand,
    },
}

#[derive(Subcommand, Debug)]
pub(crate) enum CatalogAction {
    /// Print every row, optionally only those under one parent
    List {
        /// Parent id: country for departments, department for cities, city for
        /// zones and neighborhoods
        #[arg(long)]
        parent: Option<i64>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Print one row as JSON
    Show { id: i64 },
    /// Create a row from a JSON object
    Create {
        #[arg(long)]
        data: String,
    },
    /// Patch a row with the fields of a JSON object
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    /// Delete a row
    Delete { id: i64 },
}

impl CatalogAction {
    pub(crate) fn parent(&self) -> Option<i64> {
        match self {
            CatalogAction::List { parent, .. } => *parent,
            _ => None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub(crate) enum PropertyCommand {
    /// Print the editable form of a property as JSON
    Show { id: i64 },
    /// Save a property from a form JSON file
    Save(SaveArgs),
    /// Publish a saved draft
    Publish { id: i64 },
}

#[derive(Args, Debug)]
pub(crate) struct SaveArgs {
    /// Form JSON, same shape `property show` prints
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Update this property instead of creating a new one
    #[arg(long)]
    pub(crate) id: Option<i64>,
    /// Save with the draft status and skip validation
    #[arg(long)]
    pub(crate) draft: bool,
    /// Gallery image to upload after saving (repeatable)
    #[arg(long = "image")]
    pub(crate) images: Vec<PathBuf>,
    /// Private document to upload after saving (repeatable)
    #[arg(long = "private-file")]
    pub(crate) private_files: Vec<PathBuf>,
}

fn services(config: &AppConfig, api_url: Option<String>) -> Result<Services, AppError> {
    let api = match api_url {
        Some(url) => ApiConfig::new(url, config.api.timeout)?,
        None => config.api.clone(),
    };
    debug!(base_url = api.base_url(), "using backend");
    Ok(Services::new(ApiClient::http(&api)?))
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let services = services(&config, cli.api_url)?;

    match cli.command {
        Command::Catalog { resource, action } => catalog::run(&services, resource, action).await,
        Command::Property { command } => property::run(services, command).await,
    }
}
