//! Configuration parsing for provisioning manifests
//!
//! A manifest is a single YAML file declaring the task graph; its parent
//! directory becomes the invocation root for commands and completion markers.

pub mod manifest;

pub use manifest::{parse_manifest, Command, ManifestConfig, TaskConfig};
