use clap::Parser;
use color_eyre::eyre::Result;
use grocery_daemon::cors::{build_cors_layer, normalize_origins, DEFAULT_CORS_ORIGINS};
use grocery_daemon::logging::{init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use grocery_daemon::{build_router, AppState, ItemStore};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;
use tracing::info;

const DEFAULT_ADDR: &str = "0.0.0.0:8008";

/// Grocery Daemon - in-memory grocery list over HTTP
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, env = "GROCERY_DAEMON_ADDR", default_value = DEFAULT_ADDR)]
    addr: String,

    /// Comma-separated list of allowed CORS origins.
    /// Use "*" to allow all origins.
    #[arg(
        long,
        env = "GROCERY_CORS_ORIGINS",
        default_value = DEFAULT_CORS_ORIGINS,
        value_delimiter = ','
    )]
    cors_origins: Vec<String>,

    /// Enable JSON log format
    #[arg(long, env = "GROCERY_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "GROCERY_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    /// Custom log directory (default: ~/.grocery/logs)
    #[arg(long, env = "GROCERY_LOG_DIR")]
    log_dir: Option<String>,
}

fn report_bind_error(addr: SocketAddr, log_file: &Path, e: &std::io::Error) {
    eprintln!();
    if e.kind() == std::io::ErrorKind::AddrInUse {
        eprintln!("Error: Failed to start server - address {addr} is already in use");
        eprintln!();
        eprintln!("Another instance of grocery-daemon may already be running.");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  1. Use a different port:        grocery-daemon --addr 0.0.0.0:8009");
        eprintln!("  2. Check what's using the port: lsof -i :{}", addr.port());
    } else {
        eprintln!("Error: Failed to start server: {e}");
    }
    eprintln!();
    eprintln!("Logs: {}", log_file.display());
    eprintln!();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let log_dir = args
        .log_dir
        .map_or_else(LogConfig::default_log_dir, PathBuf::from);
    let log_file = log_dir.join(LOG_FILENAME);

    let log_config = LogConfig {
        log_dir,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..LogConfig::default()
    };

    if let Err(e) = init_logging(log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    let addr: SocketAddr = args.addr.parse()?;

    let cors_origins = normalize_origins(&args.cors_origins);
    info!("CORS origins: {}", cors_origins.join(", "));
    let cors = build_cors_layer(cors_origins);

    let app = build_router(AppState::new(ItemStore::new())).layer(cors);

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            report_bind_error(addr, &log_file, &e);
            return Err(e.into());
        }
    };

    info!("Starting grocery daemon on {}", addr);
    axum::serve(listener, app).await?;

    info!("Grocery daemon stopped");
    Ok(())
}
