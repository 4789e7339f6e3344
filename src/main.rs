mod app;
mod chart;
mod color;
mod config;
mod data;
mod server;
mod state;
mod ui;
mod view;

use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eframe::egui;

use app::DashboardApp;
use config::{DashboardConfig, Variant};
use data::loader::{load_csv, DEFAULT_DATA_FILE};
use data::model::TypeColumn;
use state::AppState;
use view::Dashboard;

#[derive(Parser)]
#[command(name = "placename-dashboard")]
#[command(about = "Placename occurrence counts by year and type")]
#[command(version)]
struct Cli {
    /// CSV of counts by placename and year
    #[arg(short, long, env = "DASHBOARD_DATA", default_value = DEFAULT_DATA_FILE)]
    data: PathBuf,

    /// Dashboard flavour
    #[arg(long, env = "DASHBOARD_VARIANT", value_enum, default_value_t = Variant::Full)]
    variant: Variant,

    /// Column used as the placename type
    #[arg(long, env = "DASHBOARD_TYPE_COLUMN", value_enum, default_value_t = TypeColumn::Type)]
    type_column: TypeColumn,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the dashboard in a native window (default)
    Desktop,
    /// Serve the dashboard as a JSON API
    Serve {
        /// Address to bind
        #[arg(long, env = "DASHBOARD_HOST", default_value = "127.0.0.1")]
        host: IpAddr,

        /// Port to bind; defaults to the variant's port
        #[arg(short, long, env = "DASHBOARD_PORT")]
        port: Option<u16>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = DashboardConfig {
        data_path: cli.data,
        variant: cli.variant,
        type_column: cli.type_column,
    };

    let dashboard = match load(&config) {
        Ok(dashboard) => dashboard,
        Err(e) => {
            log::error!("Failed to load dataset: {e:#}");
            return Err(e);
        }
    };

    match cli.command.unwrap_or(Commands::Desktop) {
        Commands::Desktop => run_desktop(dashboard),
        Commands::Serve { host, port } => {
            let port = port.unwrap_or_else(|| config.variant.default_port());
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .context("starting tokio runtime")?
                .block_on(server::serve(dashboard, host, port))
        }
    }
}

fn load(config: &DashboardConfig) -> Result<std::sync::Arc<Dashboard>> {
    let dataset = load_csv(&config.data_path, config.type_column)
        .with_context(|| format!("loading {}", config.data_path.display()))?;
    if dataset.is_empty() {
        log::warn!("{} contains no rows", config.data_path.display());
    }
    log::info!(
        "Loaded {} rows from {} ({:?} variant, type column '{}')",
        dataset.len(),
        config.data_path.display(),
        config.variant,
        config.type_column.header()
    );
    Ok(Dashboard::new(dataset, config.variant))
}

fn run_desktop(dashboard: std::sync::Arc<Dashboard>) -> Result<()> {
    let title = dashboard.variant.title();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(AppState::new(dashboard))))),
    )
    .map_err(|e| anyhow::anyhow!("window error: {e}"))
}
