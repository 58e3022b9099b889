//! Rigup Core Library
//!
//! This is the core library for the rigup environment provisioning tool. It
//! provides all the business logic for manifest parsing, task graph
//! resolution, and task execution.
//!
//! ## Architecture
//!
//! The core library is organized into several modules:
//!
//! - [`provisioner`] - High-level provisioning interface
//! - [`graph`] - Task graph construction and dependency resolution
//! - [`execution`] - Task execution engine with completion-marker skipping
//! - [`markers`] - Completion probes that decide whether a task already ran
//! - [`configs`] - Configuration parsing for provisioning manifests
//! - [`colors`] - Consistent task colors for terminal output
//! - [`results`] - Result types for provisioner operations
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
//!
//! The primary entry point is the [`Provisioner`] which provides a
//! high-level interface for all provisioning operations:
//!
//! ```rust,no_run
//! use rigup_core::provisioner::{Provisioner, ProvisionerConfig};
//! use std::path::PathBuf;
//!
//! # fn example() -> rigup_core::types::RigupResult<()> {
//! let provisioner = Provisioner::new(ProvisionerConfig {
//!     manifest_path: PathBuf::from("rigup.yml"),
//! })?;
//!
//! let listing = provisioner.list_tasks()?;
//! # Ok(())
//! # }
//! ```

pub mod colors;
pub mod configs;
pub mod execution;
pub mod graph;
pub mod markers;
pub mod provisioner;
pub mod results;
pub mod types;

// Re-export the main types for easier usage
pub use provisioner::{Provisioner, ProvisionerConfig};
pub use types::{RigupError, RigupResult};
