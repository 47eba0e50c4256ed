//! Enquiry intake server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), applies any
//! `ENQUIRY_*` environment overrides, and serves `POST /api/contact`.
//!
//! ```
//! cargo run -p enquiry-server --bin server -- --config config.toml
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use enquiry_server::{ServerConfig, app};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Enquiry contact intake server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("ENQUIRY"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let router = app(&server_cfg)
    .context("content_security_policy is not a valid header value")?;

  let addr = server_cfg.bind_addr();
  let listener = TcpListener::bind(&addr)
    .await
    .with_context(|| format!("failed to bind {addr}"))?;

  tracing::info!("listening on {addr}");
  axum::serve(listener, router).await.context("server error")?;

  Ok(())
}
