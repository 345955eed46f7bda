//! Elevator simulator client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. HTTP transport for the elevator backend
//! 2. ElevatorService (commands and status polling)
//! 3. Frontend (UI) - CLI, GUI, etc.
//!
//! Configuration comes from the environment (optionally a `.env` file); command
//! line flags override it.
//!
//! # Examples
//!
//! ```bash
//! # Backend on the default local port
//! cargo run -p elevator-client
//!
//! # Remote backend, faster polling
//! cargo run -p elevator-client -- --api-url http://10.0.0.5:5037/api/Elevator --poll-interval-ms 250
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

/// Terminal client for the elevator simulator backend
#[derive(Debug, Parser)]
#[command(name = "elevator")]
#[command(about = "Request rides and watch simulated elevators", long_about = None)]
#[command(version)]
struct Args {
    /// Backend base URL (overrides ELEVATOR_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Status poll interval in milliseconds (overrides ELEVATOR_POLL_INTERVAL_MS)
    #[arg(long)]
    poll_interval_ms: Option<u64>,

    /// HTTP request timeout in milliseconds (overrides ELEVATOR_HTTP_TIMEOUT_MS)
    #[arg(long)]
    http_timeout_ms: Option<u64>,

    /// Directory for session logs (overrides ELEVATOR_LOG_DIR)
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli(args).await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        let _ = args;
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli(args: Args) -> Result<()> {
    use anyhow::Context;
    use client_backend_http::{HttpConfig, HttpElevatorApi};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use elevator_client::Client;
    use runtime::ElevatorService;

    // 1. Load configuration from environment, then apply flags
    let mut http_config = HttpConfig::from_env();
    let mut frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    if let Some(url) = args.api_url {
        http_config.base_url = url;
    }
    if let Some(ms) = args.http_timeout_ms {
        http_config.request_timeout = Duration::from_millis(ms.max(1));
    }
    if let Some(ms) = args.poll_interval_ms {
        frontend_config.poll_interval = Duration::from_millis(ms.max(1));
    }
    let log_dir = args
        .log_dir
        .or_else(|| std::env::var_os("ELEVATOR_LOG_DIR").map(PathBuf::from));

    // 2. Setup logging
    let _log_guard = logging::setup_logging(log_dir, None)?;

    tracing::info!("Starting elevator client");
    tracing::info!("Backend: {}", http_config.base_url);
    tracing::info!("Poll interval: {:?}", frontend_config.poll_interval);
    tracing::info!("Accepted floors: {}", frontend_config.floors);

    // 3. Build transport and service
    let api = HttpElevatorApi::new(http_config).context("Failed to create backend client")?;
    let service = ElevatorService::new(api);

    // 4. Build Frontend
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build and run
    let client = Client::builder()
        .service(service)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
