//! `booking-api`: serve the availability endpoint, or run its pieces offline.
//!
//! ## Usage
//!
//! ```sh
//! # Serve HTTP on 127.0.0.1:8080 from a JSON catalog
//! JWT_SECRET=... booking-api serve --catalog catalog.json
//!
//! # What is free between 10:00 and 11:00?
//! booking-api check --catalog catalog.json \
//!     --start 2026-03-16T10:00:00Z --end 2026-03-16T11:00:00Z
//!
//! # Who does this token belong to?
//! JWT_SECRET=... booking-api verify --token eyJhbGciOi...
//! ```
//!
//! Logs go to stderr; `RUST_LOG` overrides `--log-level`.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use availability_engine::{AvailabilityEngine, Catalog, InMemoryStore};
use booking_api::{build_app, AppState};
use clap::{Parser, Subcommand};
use token_gate::TokenVerifier;
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "booking-api",
    version,
    about = "Court, coach and equipment availability service"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service
    Serve {
        /// Address to listen on
        #[arg(long, env = "BOOKING_BIND", default_value = "127.0.0.1:8080")]
        bind: SocketAddr,
        /// JSON catalog of courts, coaches, equipment and bookings
        #[arg(long, env = "BOOKING_CATALOG")]
        catalog: PathBuf,
        /// HMAC secret bearer tokens are signed with
        #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
        jwt_secret: String,
    },
    /// Print availability for a window as JSON
    Check {
        /// JSON catalog of courts, coaches, equipment and bookings
        #[arg(long, env = "BOOKING_CATALOG")]
        catalog: PathBuf,
        /// Window start (RFC 3339, naive date-time as UTC, or date)
        #[arg(long)]
        start: Option<String>,
        /// Window end, exclusive
        #[arg(long)]
        end: Option<String>,
    },
    /// Verify a bearer token and print its identity as JSON
    Verify {
        /// The token, without the "Bearer " prefix
        #[arg(long)]
        token: String,
        /// HMAC secret bearer tokens are signed with
        #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
        jwt_secret: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(&cli.log_level)?;

    match cli.command {
        Commands::Serve {
            bind,
            catalog,
            jwt_secret,
        } => serve(bind, &catalog, &jwt_secret).await,
        Commands::Check {
            catalog,
            start,
            end,
        } => {
            let store = InMemoryStore::new(load_catalog(&catalog)?);
            let report = AvailabilityEngine::new(Arc::new(store))
                .check(start.as_deref(), end.as_deref())
                .await
                .context("Availability check failed")?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Commands::Verify { token, jwt_secret } => {
            let identity = TokenVerifier::new(&jwt_secret)
                .context("Cannot build token verifier")?
                .authenticate(Some(&format!("Bearer {token}")))
                .context("Token rejected")?;
            println!("{}", serde_json::to_string_pretty(&identity)?);
            Ok(())
        }
    }
}

fn init_logger(log_level: &str) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let subscriber = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(subscriber)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

async fn serve(bind: SocketAddr, catalog: &Path, jwt_secret: &str) -> Result<()> {
    // A missing secret is a deployment error: refuse to start rather than
    // rejecting every request later.
    let verifier = TokenVerifier::new(jwt_secret).context("JWT_SECRET must not be empty")?;
    let store = InMemoryStore::new(load_catalog(catalog)?);
    let app = build_app(AppState::new(Arc::new(store), verifier));

    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;
    tracing::info!("Listening on {}", bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Unexpected error happened in server")
        .inspect_err(|e| {
            tracing::error!(
                error.cause_chain = ?e, error.message = %e, "Unexpected error"
            )
        })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error.message = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
    let catalog = Catalog::from_json(&json)
        .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;
    tracing::info!(
        courts = catalog.courts.len(),
        coaches = catalog.coaches.len(),
        equipment = catalog.equipment.len(),
        bookings = catalog.bookings.len(),
        "catalog loaded"
    );
    Ok(catalog)
}
