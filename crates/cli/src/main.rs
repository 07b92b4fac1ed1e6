use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

/// driftcheck - Spot live app configuration missing from a deployment manifest
#[derive(Parser)]
#[command(name = "driftcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Check a manifest isn't missing ENV vars or services currently on an app
  CheckManifest {
    /// Name of the deployed application
    app: String,

    /// Path to the application manifest
    #[arg(short = 'f', long = "manifest")]
    manifest: PathBuf,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
  },
}

fn main() {
  let cli = Cli::parse();

  // --verbose raises the filter floor to debug; RUST_LOG still wins.
  let filter = if cli.verbose {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
  } else {
    EnvFilter::from_default_env()
  };
  tracing_subscriber::fmt().with_env_filter(filter).without_time().init();

  let outcome = match cli.command {
    Commands::CheckManifest { app, manifest, json } => cmd::cmd_check_manifest(&app, &manifest, json),
  };

  // Exit-code mapping happens only here: detected drift and stage errors
  // are both failures, a clean report is success.
  match outcome {
    Ok(true) => {}
    Ok(false) => std::process::exit(1),
    Err(err) => {
      output::print_error(&format!("{:#}", err));
      std::process::exit(1);
    }
  }
}
