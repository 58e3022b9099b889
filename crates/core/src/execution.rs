//! Task execution module
//!
//! This module handles the actual execution of provisioning tasks including
//! command execution, completion-marker skipping, and result reporting.

pub mod command;
pub mod runner;

pub use command::{ActionExecutor, CommandExecutor};
pub use runner::TaskRunner;
