//! End-to-end drift check orchestration.
//!
//! Strictly sequential: read the manifest, fetch live state once, run the
//! comparator for env vars and for services. One attempt per stage; any
//! stage error aborts the check.

use std::path::Path;

use tracing::info;

use crate::client::{ClientError, PlatformClient};
use crate::compare::{DriftReport, missing_from_manifest};
use crate::manifest::{self, ManifestError};

/// Tagged failure of a drift check. Exit-code mapping is the caller's
/// concern; no stage here touches the process.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
  #[error(transparent)]
  Manifest(#[from] ManifestError),

  #[error(transparent)]
  Client(#[from] ClientError),
}

/// Compare the manifest entry for `app_name` against the app's live state.
pub fn run_check(
  manifest_path: &Path,
  app_name: &str,
  client: &dyn PlatformClient,
) -> Result<DriftReport, CheckError> {
  let declared = manifest::load_app_keys(manifest_path, app_name)?;
  let live = client.app_state(app_name)?;

  let report = DriftReport {
    missing_env: missing_from_manifest(&declared.env, &live.env),
    missing_services: missing_from_manifest(&declared.services, &live.services),
  };
  info!(
    app = app_name,
    missing_env = report.missing_env.len(),
    missing_services = report.missing_services.len(),
    "drift check complete"
  );

  Ok(report)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::client::LiveAppState;
  use crate::keyset::KeySet;
  use std::path::PathBuf;
  use tempfile::TempDir;

  /// Test double returning a fixed live state.
  struct FakeClient {
    state: LiveAppState,
  }

  impl PlatformClient for FakeClient {
    fn app_state(&self, _app_name: &str) -> Result<LiveAppState, ClientError> {
      Ok(self.state.clone())
    }
  }

  /// Test double that always fails.
  struct BrokenClient;

  impl PlatformClient for BrokenClient {
    fn app_state(&self, app_name: &str) -> Result<LiveAppState, ClientError> {
      Err(ClientError::Status {
        app: app_name.to_string(),
        status: 500,
      })
    }
  }

  fn fake(env: &[&str], services: &[&str]) -> FakeClient {
    FakeClient {
      state: LiveAppState {
        env: env.iter().copied().collect::<KeySet>(),
        services: services.iter().copied().collect::<KeySet>(),
      },
    }
  }

  fn write_manifest(content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("manifest.yml");
    std::fs::write(&path, content).unwrap();
    (temp, path)
  }

  const MANIFEST: &str = r#"
applications:
- name: web
  env:
    ENV_VAR_1: one
  services:
  - app-db
"#;

  #[test]
  fn matching_state_is_clean() {
    let (_temp, path) = write_manifest(MANIFEST);
    let client = fake(&["ENV_VAR_1"], &["app-db"]);

    let report = run_check(&path, "web", &client).unwrap();
    assert!(report.is_clean());
  }

  #[test]
  fn live_extras_show_up_in_live_order() {
    let (_temp, path) = write_manifest(MANIFEST);
    let client = fake(&["ENV_VAR_1", "ENV_SNOW", "ENV_FLAKE"], &["app-db", "app-cache"]);

    let report = run_check(&path, "web", &client).unwrap();
    assert_eq!(report.missing_env, vec!["ENV_SNOW".to_string(), "ENV_FLAKE".to_string()]);
    assert_eq!(report.missing_services, vec!["app-cache".to_string()]);
  }

  #[test]
  fn manifest_errors_surface_as_check_errors() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.yml");
    let client = fake(&[], &[]);

    let err = run_check(&missing, "web", &client).unwrap_err();
    assert!(matches!(err, CheckError::Manifest(ManifestError::Unreadable { .. })));
  }

  #[test]
  fn client_errors_surface_unmodified() {
    let (_temp, path) = write_manifest(MANIFEST);

    let err = run_check(&path, "web", &BrokenClient).unwrap_err();
    assert!(matches!(
      err,
      CheckError::Client(ClientError::Status { status: 500, .. })
    ));
  }

  #[test]
  fn manifest_stage_runs_before_live_fetch() {
    // A broken client must not be consulted when the manifest is bad.
    let (_temp, path) = write_manifest("applications: []\n");

    let err = run_check(&path, "web", &BrokenClient).unwrap_err();
    assert!(matches!(err, CheckError::Manifest(ManifestError::NoApplications)));
  }
}
