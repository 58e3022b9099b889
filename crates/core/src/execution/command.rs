//! Command execution utilities
//!
//! This module provides a unified interface for executing task actions
//! (shell commands or argv vectors) with consistent error handling and
//! terminal output.

use std::path::Path;
use std::process::Command;

use colored::*;

use crate::colors::get_task_color;
use crate::configs::Command as TaskCommand;
use crate::graph::Task;
use crate::types::{RigupError, RigupResult};

/// Runs a task's action. The runner only depends on this trait, so tests can
/// substitute an executor that records calls instead of spawning processes.
pub trait ActionExecutor {
    fn execute(&self, task: &Task) -> RigupResult<()>;
}

/// Executor that spawns real processes in the provisioning root.
pub struct CommandExecutor<'a> {
    root: &'a Path,
}

impl<'a> CommandExecutor<'a> {
    pub fn new(root: &'a Path) -> Self {
        Self { root }
    }

    /// Execute a command with common setup and error handling
    fn run_command(&self, command: &mut Command, task: &Task, display: &str) -> RigupResult<()> {
        // Common setup
        command.current_dir(self.root);
        command.env("RIGUP_TASK", &task.name);
        command.env("RIGUP_ROOT", self.root);
        for (key, value) in &task.env {
            command.env(key, value);
        }

        // Execute command
        let status = command.status().map_err(|e| RigupError::Action {
            task: task.name.clone(),
            detail: format!("Failed to execute command '{}': {}", display, e),
        })?;

        if !status.success() {
            return Err(RigupError::Action {
                task: task.name.clone(),
                detail: format!(
                    "Command '{}' failed with exit code: {}",
                    display,
                    status.code().unwrap_or(-1)
                ),
            });
        }

        self.show_completion_message(task);
        Ok(())
    }

    /// Execute a single shell command
    fn execute_shell_command(&self, task: &Task, cmd: &str) -> RigupResult<()> {
        let mut command = Command::new("sh");
        command.arg("-c").arg(cmd);
        self.run_command(&mut command, task, cmd)
    }

    /// Execute a command with arguments, without a shell
    fn execute_with_args(&self, task: &Task, program: &str, args: &[String]) -> RigupResult<()> {
        let mut command = Command::new(program);
        command.args(args);
        self.run_command(&mut command, task, program)
    }

    /// Show completion message for the task
    fn show_completion_message(&self, task: &Task) {
        let task_color = get_task_color(&task.name);
        println!(
            "{} {}",
            "✓".green().bold(),
            format!("Completed {}", task.name).color(task_color)
        );
    }
}

impl ActionExecutor for CommandExecutor<'_> {
    fn execute(&self, task: &Task) -> RigupResult<()> {
        match &task.command {
            // Aggregate tasks only group their prerequisites
            None => Ok(()),
            Some(TaskCommand::Single(cmd)) => self.execute_shell_command(task, cmd),
            Some(TaskCommand::Multiple(argv)) => {
                if argv.is_empty() {
                    return Ok(());
                }
                self.execute_with_args(task, &argv[0], &argv[1..])
            }
        }
    }
}
