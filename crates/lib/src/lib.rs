//! driftcheck-lib: manifest-vs-live-state reconciliation.
//!
//! This crate provides the core logic for spotting deployment drift:
//! - `manifest`: loads a YAML deployment manifest and extracts declared keys
//! - `client`: fetches the live configuration of a deployed application
//! - `compare`: the asymmetric set difference between declared and live keys
//! - `check`: orchestration tying the stages together
//!
//! Exit-code and output policy belong to the binary; everything here returns
//! tagged results and performs no process control.

pub mod check;
pub mod client;
pub mod compare;
pub mod keyset;
pub mod manifest;
