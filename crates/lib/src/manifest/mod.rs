//! Deployment manifest loading and key extraction.
//!
//! Reads a YAML manifest from disk, locates the application entry matching a
//! requested name, and extracts the declared environment variable and
//! service name key sets. The manifest is read once per invocation and
//! discarded after extraction.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

mod types;
pub use types::{ApplicationEntry, ManifestDocument};

use crate::keyset::KeySet;

/// Errors from the manifest stage. All fatal, none retried.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
  /// The file could not be read at the given path.
  #[error("unable to read manifest file: {path}")]
  Unreadable {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The file content is not valid manifest YAML.
  #[error("unable to parse manifest YAML: {0}")]
  Malformed(#[from] serde_yaml::Error),

  /// The document parsed but declares no applications at all.
  #[error("no application found in manifest")]
  NoApplications,

  /// No entry's name matches the requested application.
  #[error("application '{0}' not found in manifest")]
  AppNotFound(String),
}

/// Keys declared for one application in a manifest.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AppKeys {
  pub env: KeySet,
  pub services: KeySet,
}

/// Read and parse a manifest file.
pub fn load_manifest(path: &Path) -> Result<ManifestDocument, ManifestError> {
  let raw = std::fs::read_to_string(path).map_err(|source| ManifestError::Unreadable {
    path: path.to_path_buf(),
    source,
  })?;
  let document: ManifestDocument = serde_yaml::from_str(&raw)?;
  debug!(path = %path.display(), applications = document.applications.len(), "parsed manifest");
  Ok(document)
}

/// Extract the declared env and service keys for `app_name`.
///
/// The first entry whose name matches wins; later entries with the same
/// name are ignored with a warning. An entry with no `env` mapping or no
/// `services` list yields empty key sets, not an error.
pub fn app_keys(document: &ManifestDocument, app_name: &str) -> Result<AppKeys, ManifestError> {
  if document.applications.is_empty() {
    return Err(ManifestError::NoApplications);
  }

  let mut matches = document.applications.iter().filter(|app| app.name == app_name);
  let app = matches
    .next()
    .ok_or_else(|| ManifestError::AppNotFound(app_name.to_string()))?;
  if matches.next().is_some() {
    warn!(
      app = app_name,
      "manifest declares multiple applications with this name; using the first"
    );
  }

  let env: KeySet = app.env.keys().cloned().collect();
  let services: KeySet = app.services.iter().cloned().collect();
  Ok(AppKeys { env, services })
}

/// Load a manifest and extract the keys for `app_name` in one step.
pub fn load_app_keys(path: &Path, app_name: &str) -> Result<AppKeys, ManifestError> {
  let document = load_manifest(path)?;
  app_keys(&document, app_name)
}
