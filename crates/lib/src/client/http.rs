//! HTTP implementation of [`PlatformClient`].
//!
//! A thin adapter over the platform's application-detail endpoint. One
//! fetch per invocation satisfies both logical queries (env vars and
//! services); the adapter extracts key names from the richer records and
//! does no further filtering or normalization.

use reqwest::Url;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use super::{ClientError, LiveAppState, PlatformClient};
use crate::keyset::KeySet;

/// Environment variable naming the platform API base URL.
pub const API_URL_VAR: &str = "DRIFTCHECK_API";

/// Environment variable carrying the bearer token, when the API requires one.
pub const API_TOKEN_VAR: &str = "DRIFTCHECK_TOKEN";

/// Application detail as returned by `GET {base}/v2/apps/{name}`.
#[derive(Debug, Deserialize)]
struct AppDetail {
  /// Only the keys are used; values stay opaque.
  #[serde(default)]
  environment_variables: serde_json::Map<String, serde_json::Value>,

  #[serde(default)]
  services: Vec<ServiceBinding>,
}

/// A bound service record. Only the name is extracted.
#[derive(Debug, Deserialize)]
struct ServiceBinding {
  name: String,
}

/// Queries the platform API over HTTP.
pub struct HttpPlatformClient {
  http: Client,
  base_url: String,
  token: Option<String>,
}

impl HttpPlatformClient {
  pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Self {
      http: Client::new(),
      base_url,
      token,
    }
  }

  /// Build a client from `DRIFTCHECK_API` and `DRIFTCHECK_TOKEN`.
  pub fn from_env() -> Result<Self, ClientError> {
    let base_url = std::env::var(API_URL_VAR).map_err(|_| ClientError::MissingConfig(API_URL_VAR))?;
    let token = std::env::var(API_TOKEN_VAR).ok();
    Ok(Self::new(base_url, token))
  }

  /// Build the app-detail URL. The app name is pushed as a single path
  /// segment, so reserved characters in it get percent-encoded.
  fn app_url(&self, app_name: &str) -> Result<Url, ClientError> {
    let mut url =
      Url::parse(&self.base_url).map_err(|_| ClientError::BadBaseUrl(self.base_url.clone()))?;
    url
      .path_segments_mut()
      .map_err(|_| ClientError::BadBaseUrl(self.base_url.clone()))?
      .pop_if_empty()
      .extend(["v2", "apps", app_name]);
    Ok(url)
  }
}

impl PlatformClient for HttpPlatformClient {
  fn app_state(&self, app_name: &str) -> Result<LiveAppState, ClientError> {
    let url = self.app_url(app_name)?;
    debug!(%url, "fetching live app state");

    let mut request = self.http.get(url);
    if let Some(ref token) = self.token {
      request = request.bearer_auth(token);
    }

    let response = request.send()?;
    let status = response.status();
    if !status.is_success() {
      return Err(ClientError::Status {
        app: app_name.to_string(),
        status: status.as_u16(),
      });
    }

    let detail: AppDetail = response.json()?;
    let env: KeySet = detail.environment_variables.keys().cloned().collect();
    let services: KeySet = detail.services.into_iter().map(|binding| binding.name).collect();
    debug!(app = app_name, env = env.len(), services = services.len(), "live state fetched");

    Ok(LiveAppState { env, services })
  }
}
