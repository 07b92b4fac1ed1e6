//! Live application state retrieval.
//!
//! The platform is an opaque collaborator: the only capability this crate
//! needs from it is "given an application name, report its current
//! environment variable names and bound service names". The [`PlatformClient`]
//! trait is that seam; [`HttpPlatformClient`] is the real adapter.

use crate::keyset::KeySet;

mod http;
pub use http::{API_TOKEN_VAR, API_URL_VAR, HttpPlatformClient};

/// Errors from the live-state stage. Opaque and fatal to the caller; the
/// check is never retried.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
  /// Required configuration is missing from the environment.
  #[error("{0} is not set")]
  MissingConfig(&'static str),

  /// The configured base URL is not a usable HTTP URL.
  #[error("invalid platform API URL: {0}")]
  BadBaseUrl(String),

  /// The request could not be sent or the response body not decoded.
  #[error("platform request failed: {0}")]
  Transport(#[from] reqwest::Error),

  /// The platform answered with a non-success status.
  #[error("platform returned HTTP {status} for app '{app}'")]
  Status { app: String, status: u16 },
}

/// Live configuration of one deployed application.
///
/// Fetched fresh per invocation; never cached or persisted.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LiveAppState {
  /// Environment variable names currently set on the app.
  pub env: KeySet,

  /// Service names currently bound to the app.
  pub services: KeySet,
}

/// Capability the host platform must provide.
pub trait PlatformClient {
  /// Report the live configuration of the named application.
  fn app_state(&self, app_name: &str) -> Result<LiveAppState, ClientError>;
}
