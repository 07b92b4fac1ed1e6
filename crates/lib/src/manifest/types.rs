//! Serde types for the deployment manifest file.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Root of a parsed deployment manifest.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ManifestDocument {
  /// Application entries in document order.
  #[serde(default)]
  pub applications: Vec<ApplicationEntry>,
}

/// One application entry in a manifest.
///
/// Both `env` and `services` are optional in the document; an absent mapping
/// or list deserializes to its empty default rather than failing.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ApplicationEntry {
  /// Application name, treated as an opaque string.
  #[serde(default)]
  pub name: String,

  /// Declared environment variables. Values are never inspected, only keys.
  #[serde(default)]
  pub env: BTreeMap<String, serde_yaml::Value>,

  /// Declared service bindings, by name.
  #[serde(default)]
  pub services: Vec<String>,
}
