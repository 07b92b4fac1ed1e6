//! Implementation of the `driftcheck check-manifest` command.
//!
//! Orchestrates the linear check flow: progress line, platform client from
//! the environment, manifest-vs-live comparison, report rendering. Returns
//! whether the manifest is clean; exit codes are decided in `main`.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use tracing::debug;

use driftcheck_lib::check::run_check;
use driftcheck_lib::client::HttpPlatformClient;
use driftcheck_lib::compare::DriftReport;

use crate::output::{print_info, print_json, symbols};

/// Run the drift check and print the report.
///
/// Returns `Ok(true)` when the manifest covers everything on the live app,
/// `Ok(false)` when drift was found. Stage errors bubble up unchanged.
pub fn cmd_check_manifest(app: &str, manifest: &Path, json: bool) -> Result<bool> {
  print_info(&format!(
    "Checking manifest {} against app '{}'",
    manifest.display(),
    app
  ));

  let client = HttpPlatformClient::from_env().context("platform API is not configured")?;
  let report = run_check(manifest, app, &client)?;
  debug!(clean = report.is_clean(), "rendering report");

  if json {
    print_json(&serde_json::json!({
      "app": app,
      "manifest": manifest.display().to_string(),
      "missing_env": report.missing_env,
      "missing_services": report.missing_services,
    }))?;
    return Ok(report.is_clean());
  }

  if report.is_clean() {
    return Ok(true);
  }

  print_drift(app, manifest, &report);
  Ok(false)
}

/// One labeled section per non-empty category, env vars first.
fn print_drift(app: &str, manifest: &Path, report: &DriftReport) {
  if !report.missing_env.is_empty() {
    println!();
    println!(
      "App '{}' has unexpected ENV vars (missing from manifest {}):",
      app,
      manifest.display()
    );
    print_bullets(&report.missing_env);
  }

  if !report.missing_services.is_empty() {
    println!();
    println!(
      "App '{}' has unexpected services (missing from manifest {}):",
      app,
      manifest.display()
    );
    print_bullets(&report.missing_services);
  }
}

fn print_bullets(keys: &[String]) {
  for key in keys {
    println!(
      "{} {}",
      symbols::MINUS.if_supports_color(Stream::Stdout, |s| s.red()),
      key
    );
  }
}
