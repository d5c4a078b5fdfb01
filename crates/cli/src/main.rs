//! gymhealth CLI - training progress for gym members.

mod config;
mod prompt;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gymhealth_api::{HttpProgressApi, ProgressApi};
use gymhealth_app::{
    DeleteOutcome, DetailScreen, DetailView, Navigator, OverviewScreen, OverviewTab, Route,
};
use gymhealth_core::{RecordId, TimeRange};
use gymhealth_storage::{CredentialStore, JsonCredentialStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "gymhealth")]
#[command(about = "Training progress for gym members", long_about = None)]
struct Cli {
    /// Config file
    #[arg(long, global = true, default_value = "gymhealth.json")]
    config: PathBuf,

    /// Override the API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Override the credentials file
    #[arg(long, global = true)]
    credentials: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the progress overview
    Overview {
        /// Tab: overview, body, fitness, history
        #[arg(long, default_value = "overview")]
        tab: OverviewTab,
        /// Time range: week, month, year, all
        #[arg(long, default_value = "all")]
        range: TimeRange,
    },
    /// List every record, latest first
    History,
    /// Show one record with its history charts
    Show {
        /// Record ID
        id: RecordId,
    },
    /// Delete a record
    Delete {
        /// Record ID
        id: RecordId,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Open the add progress form
    Add,
    /// Open the edit form for a record
    Edit {
        /// Record ID
        id: RecordId,
    },
    /// Store an access token
    LoginToken {
        /// Bearer token issued by the server
        token: String,
    },
    /// Forget the stored access token
    Logout,
}

fn init_logging() {
    // stdout carries the rendered screen
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config)
        .await
        .with_context(|| format!("Failed to load config {}", cli.config.display()))?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    if let Some(credentials) = cli.credentials {
        config.credentials_path = credentials;
    }

    let credentials = JsonCredentialStore::new(&config.credentials_path);

    match cli.command {
        Commands::LoginToken { token } => {
            let token = token.trim();
            if token.is_empty() {
                bail!("Token must not be empty");
            }
            credentials
                .save_access_token(token)
                .await
                .context("Failed to save access token")?;
            println!("Saved access token to {}", credentials.path().display());
        }
        Commands::Logout => {
            credentials.clear().await.context("Failed to clear access token")?;
            println!("Logged out");
        }
        Commands::Overview { tab, range } => {
            let api = connect(&config, credentials)?;
            show_overview(api, tab, range, &config).await;
        }
        Commands::History => {
            let api = connect(&config, credentials)?;
            show_overview(api, OverviewTab::History, TimeRange::All, &config).await;
        }
        Commands::Show { id } => {
            let api = connect(&config, credentials)?;
            let mut screen = DetailScreen::new(api, id);
            screen.load().await;
            println!("{}", render::render_detail(&screen.view()));
        }
        Commands::Add => {
            let api = connect(&config, credentials)?;
            let screen = OverviewScreen::new(api);
            let mut nav = Navigator::new();
            screen.add_progress(&mut nav);
            println!("{}", render::render_stub(nav.current()));
        }
        Commands::Edit { id } => {
            let api = connect(&config, credentials)?;
            let mut nav = Navigator::new();
            nav.navigate(Route::Detail { record_id: id });

            let mut screen = DetailScreen::new(api, id);
            screen.load().await;
            if !screen.edit(&mut nav) {
                println!("{}", render::render_detail(&screen.view()));
                bail!("Record {} could not be loaded", id);
            }
            println!("{}", render::render_stub(nav.current()));
        }
        Commands::Delete { id, yes } => {
            let api = connect(&config, credentials)?;
            let mut nav = Navigator::new();
            nav.navigate(Route::Detail { record_id: id });

            let mut screen = DetailScreen::new(api, id);
            screen.load().await;
            if let DetailView::Failed { .. } = screen.view() {
                println!("{}", render::render_detail(&screen.view()));
                bail!("Record {} could not be loaded", id);
            }

            if !yes {
                let question = format!("Delete record #{}? This cannot be undone.", id);
                let confirmed = prompt::confirm(&question, std::io::stdin().lock(), std::io::stdout())
                    .context("Failed to read confirmation")?;
                if !confirmed {
                    println!("Cancelled");
                    return Ok(());
                }
            }

            match screen.delete(&mut nav).await {
                DeleteOutcome::Deleted => {
                    info!("Back on {}", nav.current().name());
                    println!("Deleted record {}", id);
                }
                DeleteOutcome::Failed => {
                    println!("{}", render::render_detail(&screen.view()));
                    bail!("Record {} was not deleted", id);
                }
            }
        }
    }

    Ok(())
}

fn connect(config: &AppConfig, credentials: JsonCredentialStore) -> Result<Arc<dyn ProgressApi>> {
    let api = HttpProgressApi::new(&config.api, credentials).context("Failed to build HTTP client")?;
    Ok(Arc::new(api))
}

async fn show_overview(api: Arc<dyn ProgressApi>, tab: OverviewTab, range: TimeRange, config: &AppConfig) {
    let mut screen = OverviewScreen::new(api);
    screen.select_tab(tab);
    screen.select_range(range);
    screen.load().await;

    let today = chrono::Local::now().date_naive();
    if tab != OverviewTab::History {
        println!("Range: {}", screen.range());
    }
    println!("{}", render::render_overview(&screen.view(today), config.history_limit));
}
