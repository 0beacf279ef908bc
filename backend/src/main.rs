//! # Backend Service
//!
//! Thin entry point that delegates to lib-web for server setup.
//!
//! Configuration comes from the environment (or `.env`); see
//! `lib_core::config`. `MIGRATIONS_PATH` overrides where the SQL migrations are
//! read from.

use lib_web::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let defaults = ServerConfig::default();
    let config = ServerConfig {
        migrations_path: lib_utils::get_env_or("MIGRATIONS_PATH", &defaults.migrations_path),
    };

    start_server(config).await
}
