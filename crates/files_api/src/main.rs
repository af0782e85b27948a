//! Binary entrypoint for the portfolio file endpoints.

use std::path::PathBuf;

use anyhow::Context;
use files_api::{serve, HttpServerConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let bind_addr =
        std::env::var("PORTFOLIO_BIND").unwrap_or_else(|_| "127.0.0.1:3001".to_string());
    let public_dir = std::env::var("PORTFOLIO_FILES_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("public"));

    serve(HttpServerConfig {
        bind_addr: bind_addr.clone(),
        public_dir,
    })
    .with_context(|| format!("files api server failed on {bind_addr}"))
}
