//! CLI command implementations
//!
//! Each submodule renders one subcommand. All business logic lives in
//! rigup_core; these modules only handle presentation.

pub mod graph;
pub mod list;
pub mod plan;
pub mod run;
