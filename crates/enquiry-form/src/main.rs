//! `contact` — send a message through the Enquiry contact form from a
//! terminal.
//!
//! # Usage
//!
//! ```
//! contact --name Jane --email jane@example.com --message "Hello"
//! contact --url https://example.com/api/contact --phone-required \
//!   --name Jane --email jane@example.com --phone 5551234567 --message "Hi"
//! contact --config ~/.config/enquiry/contact.toml --name ...
//! ```

use anyhow::{Context, Result, bail};
use clap::Parser;
use enquiry_core::{Field, PhonePolicy};
use enquiry_form::{FormConfig, HttpTransport, SubmissionController};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_URL: &str = "http://localhost:3000/api/contact";

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "contact", about = "Submit a message to the Enquiry contact form")]
struct Args {
  /// Path to a TOML config file (url, phone_required).
  #[arg(short, long, value_name = "FILE")]
  config: Option<std::path::PathBuf>,

  /// Intake endpoint URL (default: http://localhost:3000/api/contact).
  #[arg(long, env = "ENQUIRY_URL")]
  url: Option<String>,

  /// Require a 10-digit phone number.
  #[arg(long)]
  phone_required: bool,

  /// Sender's full name.
  #[arg(long, default_value = "")]
  name: String,

  #[arg(long, default_value = "")]
  email: String,

  #[arg(long, default_value = "")]
  phone: String,

  #[arg(long, default_value = "")]
  message: String,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url:            Option<String>,
  #[serde(default)]
  phone_required: bool,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let config = FormConfig {
    endpoint:     args
      .url
      .or(file_cfg.url)
      .unwrap_or_else(|| DEFAULT_URL.to_string()),
    phone_policy: PhonePolicy::from(args.phone_required || file_cfg.phone_required),
  };

  let mut form = SubmissionController::new(HttpTransport::new()?, config);
  for (field, value) in [
    (Field::FullName, args.name),
    (Field::Email, args.email),
    (Field::Phone, args.phone),
    (Field::Message, args.message),
  ] {
    form.update_field(field, value);
  }

  let status = form.submit().await;
  if status.is_failed() {
    bail!("{status}");
  }
  println!("{status}");

  Ok(())
}
