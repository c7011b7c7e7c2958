mod commands;

use clap::{Parser, Subcommand};
use commands::catalog::CatalogKind;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use wemx_service::{EnvSettings, FileSettings, SettingsStore};
use wemx_service_contabo::catalog::{DEFAULT_IMAGE, DEFAULT_PRODUCT, DEFAULT_REGION};
use wemx_service_contabo::{ContaboApi, ContaboClient, ContaboEndpoints, ContaboService};

#[derive(Parser)]
#[command(name = "contabo")]
#[command(about = "Manage Contabo instances through the WemX service adapter", long_about = None)]
struct Cli {
    /// Settings file (YAML). Without it, credentials are read from CONTABO_* variables
    #[arg(long, global = true, env = "WEMX_SETTINGS_PATH")]
    settings: Option<PathBuf>,

    /// Identity endpoint override
    #[arg(long, global = true, env = "CONTABO_AUTH_URL", hide = true)]
    auth_url: Option<String>,

    /// API base URL override
    #[arg(long, global = true, env = "CONTABO_API_URL", hide = true)]
    api_url: Option<String>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the configured credentials reach Contabo
    TestConnection,
    /// List available images
    Images,
    /// List instances
    Servers,
    /// Show one instance
    Server {
        /// Instance ID
        id: String,
    },
    /// Show the action audit log of an instance
    Logs {
        /// Instance ID
        id: String,
    },
    /// Create an instance
    Create {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Image ID
        #[arg(short, long, default_value = DEFAULT_IMAGE)]
        image: String,
        /// Product ID (see `contabo catalog products`)
        #[arg(short, long, default_value = DEFAULT_PRODUCT)]
        product: String,
        /// Region code (see `contabo catalog regions`)
        #[arg(short, long, default_value = DEFAULT_REGION)]
        region: String,
        /// Contract period in months
        #[arg(long, default_value_t = 1)]
        period: u32,
    },
    /// Start an instance
    Start {
        /// Instance ID
        id: String,
    },
    /// Stop an instance
    Stop {
        /// Instance ID
        id: String,
    },
    /// Shut an instance down gracefully
    Shutdown {
        /// Instance ID
        id: String,
    },
    /// Boot an instance into rescue mode
    Rescue {
        /// Instance ID
        id: String,
    },
    /// Cancel an instance (failures are logged, never fatal)
    Cancel {
        /// Instance ID
        id: String,
    },
    /// Reset the root password of an instance
    ResetPassword {
        /// Instance ID
        id: String,
        /// New root password
        #[arg(long, env = "CONTABO_ROOT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Show the product and region catalogs
    Catalog {
        #[arg(value_enum)]
        kind: Option<CatalogKind>,
    },
    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // version と catalog は認証情報不要
    let api = match &cli.command {
        Commands::Version => {
            println!("wemx-contabo {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Commands::Catalog { kind } => {
            commands::catalog::handle(*kind);
            return Ok(());
        }
        _ => build_api(&cli)?,
    };

    match cli.command {
        Commands::TestConnection => {
            commands::connection::handle(&ContaboService::new(api)).await?;
        }
        Commands::Images => commands::servers::images(&api).await?,
        Commands::Servers => commands::servers::list(&api).await?,
        Commands::Server { id } => commands::servers::show(&api, &id).await?,
        Commands::Logs { id } => commands::servers::logs(&api, &id).await?,
        Commands::Create {
            name,
            image,
            product,
            region,
            period,
        } => {
            commands::servers::create(&api, name, image, product, region, period).await?;
        }
        Commands::Start { id } => commands::servers::start(&api, &id).await?,
        Commands::Stop { id } => commands::servers::stop(&api, &id).await?,
        Commands::Shutdown { id } => commands::servers::shutdown(&api, &id).await?,
        Commands::Rescue { id } => commands::servers::rescue(&api, &id).await?,
        Commands::Cancel { id } => commands::servers::cancel(&api, &id).await,
        Commands::ResetPassword { id, password } => {
            commands::servers::reset_password(&api, &id, &password).await?;
        }
        Commands::Catalog { .. } | Commands::Version => {}
    }

    Ok(())
}

/// Logs go to stderr; stdout carries command output
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn build_api(cli: &Cli) -> anyhow::Result<ContaboApi> {
    let settings: Arc<dyn SettingsStore> = match &cli.settings {
        Some(path) => Arc::new(FileSettings::load(path)?),
        None => Arc::new(EnvSettings::new()),
    };

    let mut endpoints = ContaboEndpoints::default();
    if let Some(url) = &cli.auth_url {
        endpoints.auth_url = url.clone();
    }
    if let Some(url) = &cli.api_url {
        endpoints.api_base = url.clone();
    }

    tracing::debug!("Using endpoints {:?}", endpoints);
    Ok(ContaboApi::new(ContaboClient::from_settings(settings, endpoints)))
}
