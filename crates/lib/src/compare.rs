//! Drift computation between declared and live key sets.
//!
//! This module computes which keys present on the running application are
//! absent from the manifest. The difference is intentionally asymmetric:
//! keys declared in the manifest but not yet set on the deployed instance
//! are not drift by this tool's definition.

use serde::Serialize;

use crate::keyset::KeySet;

/// Result of comparing a manifest entry against live application state.
///
/// Empty sequences signal "no drift". Ordering follows the live state's
/// enumeration order in both fields.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct DriftReport {
  /// Environment variable names set on the app but missing from the manifest.
  pub missing_env: Vec<String>,

  /// Service names bound to the app but missing from the manifest.
  pub missing_services: Vec<String>,
}

impl DriftReport {
  /// Returns true if the manifest covers everything on the live app.
  pub fn is_clean(&self) -> bool {
    self.missing_env.is_empty() && self.missing_services.is_empty()
  }
}

/// Keys present in `live` but absent from `manifest`, in `live`'s order.
///
/// Pure and infallible. Duplicates in `live` are reported once per
/// occurrence; `manifest` is only ever used for membership tests.
pub fn missing_from_manifest(manifest: &KeySet, live: &KeySet) -> Vec<String> {
  live
    .iter()
    .filter(|key| !manifest.contains(key))
    .map(str::to_string)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn keys(items: &[&str]) -> KeySet {
    items.iter().copied().collect()
  }

  #[test]
  fn live_subset_of_manifest_is_clean() {
    let manifest = keys(&["ENV_VAR_1", "ENV_VAR_2"]);
    let live = keys(&["ENV_VAR_1"]);
    assert!(missing_from_manifest(&manifest, &live).is_empty());
  }

  #[test]
  fn reports_live_only_keys_in_live_order() {
    let manifest = keys(&["ENV_VAR_1"]);
    let live = keys(&["ENV_VAR_1", "ENV_SNOW", "ENV_FLAKE"]);
    assert_eq!(
      missing_from_manifest(&manifest, &live),
      vec!["ENV_SNOW".to_string(), "ENV_FLAKE".to_string()]
    );
  }

  #[test]
  fn manifest_only_keys_are_never_reported() {
    let manifest = keys(&["DECLARED_BUT_UNSET", "SHARED"]);
    let live = keys(&["SHARED"]);
    assert!(missing_from_manifest(&manifest, &live).is_empty());
  }

  #[test]
  fn empty_live_set_yields_empty_result() {
    let manifest = keys(&["A", "B"]);
    let live = KeySet::new();
    assert!(missing_from_manifest(&manifest, &live).is_empty());

    let empty_manifest = KeySet::new();
    assert!(missing_from_manifest(&empty_manifest, &live).is_empty());
  }

  #[test]
  fn identical_sets_yield_empty_result() {
    let manifest = keys(&["A", "B", "C"]);
    let live = keys(&["A", "B", "C"]);
    assert!(missing_from_manifest(&manifest, &live).is_empty());
  }

  #[test]
  fn empty_manifest_reports_all_live_keys() {
    let manifest = KeySet::new();
    let live = keys(&["pg", "redis"]);
    assert_eq!(
      missing_from_manifest(&manifest, &live),
      vec!["pg".to_string(), "redis".to_string()]
    );
  }

  #[test]
  fn duplicate_live_keys_reported_per_occurrence() {
    let manifest = keys(&["A"]);
    let live = keys(&["B", "B"]);
    assert_eq!(
      missing_from_manifest(&manifest, &live),
      vec!["B".to_string(), "B".to_string()]
    );
  }

  #[test]
  fn comparator_is_idempotent() {
    let manifest = keys(&["A"]);
    let live = keys(&["A", "B", "C"]);
    let first = missing_from_manifest(&manifest, &live);
    let second = missing_from_manifest(&manifest, &live);
    assert_eq!(first, second);
  }

  #[test]
  fn clean_report() {
    let report = DriftReport::default();
    assert!(report.is_clean());

    let with_env = DriftReport {
      missing_env: vec!["X".to_string()],
      ..Default::default()
    };
    assert!(!with_env.is_clean());

    let with_services = DriftReport {
      missing_services: vec!["db".to_string()],
      ..Default::default()
    };
    assert!(!with_services.is_clean());
  }
}
