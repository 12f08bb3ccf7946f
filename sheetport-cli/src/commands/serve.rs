//! HTTP server command
//!
//! Picks the record store (Postgres or in-memory), then runs the API until
//! Ctrl+C / SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use sheetport_server::store::{create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
use sheetport_server::{run_server, AppState, MemoryRecordStore, PgRecordStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "SHEETPORT_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", required_unless_present = "memory")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "SHEETPORT_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Keep records in process memory instead of PostgreSQL (lost on exit).
    /// Any database URL is ignored.
    #[arg(long)]
    pub memory: bool,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let state = if args.memory {
        tracing::warn!("Using in-memory record store; records are lost on exit");
        AppState::new(MemoryRecordStore::new())
    } else {
        let database_url = args
            .database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

        let pool = create_pool_with_options(database_url, args.max_connections)
            .await
            .context("Failed to create database pool")?;
        tracing::info!(max_connections = args.max_connections, "Connected to database");

        AppState::new(PgRecordStore::new(pool))
    };

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    tracing::info!("Starting sheetport server on {}", config.bind_addr);
    run_server(state, config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(flatten)]
        args: ServeArgs,
    }

    #[test]
    fn memory_mode_needs_no_database() {
        let harness = Harness::try_parse_from(["serve", "--memory"]).unwrap();
        assert!(harness.args.memory);
        assert_eq!(harness.args.bind.port(), 8080);
        assert_eq!(harness.args.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn explicit_database_url() {
        let harness = Harness::try_parse_from([
            "serve",
            "--database-url",
            "postgres://localhost/postgres",
            "--bind",
            "127.0.0.1:9000",
        ])
        .unwrap();
        assert_eq!(
            harness.args.database_url.as_deref(),
            Some("postgres://localhost/postgres")
        );
        assert_eq!(harness.args.bind.port(), 9000);
    }
}
