//! High-level provisioning interface
//!
//! This module provides the [`Provisioner`] which serves as the primary
//! interface for all provisioning operations. It loads the manifest, builds
//! the task graph, and exposes the list, plan, run, and graph operations.
//!
//! ## Example
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
//! // Show what would run for a target
//! let plan = provisioner.plan(&["browsers".to_string()])?;
//! assert!(!plan.steps.is_empty());
//!
//! // Provision the target
//! provisioner.run(&["browsers".to_string()])?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use crate::configs::{parse_manifest, ManifestConfig};
use crate::execution::command::CommandExecutor;
use crate::execution::runner::TaskRunner;
use crate::graph::TaskGraph;
use crate::markers::{ArtifactProbe, CompletionProbe};
use crate::results::{
    DependencyGraphResult, ExecutionPlan, InvocationSummary, PlanStep, TaskInfo, TaskListResult,
};
use crate::types::{RigupError, RigupResult};

/// High-level provisioner that encapsulates all manifest operations
pub struct Provisioner {
    manifest: ManifestConfig,
    graph: TaskGraph,
    root: PathBuf,
}

/// Configuration for initializing a provisioner
pub struct ProvisionerConfig {
    pub manifest_path: PathBuf,
}

impl Provisioner {
    /// Initialize a provisioner from a manifest file. The manifest's parent
    /// directory becomes the provisioning root: commands run there and
    /// completion markers are checked against it.
    pub fn new(config: ProvisionerConfig) -> RigupResult<Self> {
        let manifest = Self::load_manifest(&config.manifest_path)?;
        let graph = TaskGraph::from_manifest(&manifest)?;
        let root = Self::provisioning_root(&config.manifest_path);

        Ok(Self {
            manifest,
            graph,
            root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List all tasks in the manifest with their completion status
    pub fn list_tasks(&self) -> RigupResult<TaskListResult> {
        let probe = ArtifactProbe::new(&self.root);
        let mut tasks = Vec::with_capacity(self.graph.len());
        for task in self.graph.tasks() {
            tasks.push(TaskInfo {
                name: task.name.clone(),
                description: task.description.clone(),
                prerequisites: task.prerequisites.clone(),
                creates: task.creates.clone(),
                satisfied: probe.is_satisfied(task)?,
            });
        }

        Ok(TaskListResult {
            manifest_name: self.manifest.name.clone(),
            tasks,
        })
    }

    /// Compute the execution plan for the given targets without running
    /// anything
    pub fn plan(&self, targets: &[String]) -> RigupResult<ExecutionPlan> {
        let targets = self.effective_targets(targets)?;
        let probe = ArtifactProbe::new(&self.root);

        let mut steps = Vec::new();
        for task in self.graph.resolve_many(&targets)? {
            steps.push(PlanStep {
                name: task.name.clone(),
                command: task.command.as_ref().map(|c| c.to_string()),
                up_to_date: probe.is_satisfied(task)?,
            });
        }

        Ok(ExecutionPlan { targets, steps })
    }

    /// Provision the given targets, or the manifest's default targets when
    /// none are given
    pub fn run(&self, targets: &[String]) -> RigupResult<InvocationSummary> {
        let targets = self.effective_targets(targets)?;
        let executor = CommandExecutor::new(&self.root);
        let probe = ArtifactProbe::new(&self.root);
        let runner = TaskRunner::new(&self.graph, &executor, &probe);
        runner.run_targets(&targets)
    }

    /// Get dependency graph information
    pub fn dependency_graph(&self) -> DependencyGraphResult {
        DependencyGraphResult {
            graph: self.graph.graph().clone(),
            cycles: self.graph.cycles().to_vec(),
        }
    }

    // Private helper methods

    fn load_manifest(manifest_path: &Path) -> RigupResult<ManifestConfig> {
        let content = std::fs::read_to_string(manifest_path).map_err(|e| {
            RigupError::Config(format!(
                "Failed to read manifest {}: {}",
                manifest_path.display(),
                e
            ))
        })?;

        parse_manifest(&content).map_err(|e| {
            RigupError::Config(format!(
                "Failed to parse manifest {}: {}",
                manifest_path.display(),
                e
            ))
        })
    }

    fn provisioning_root(manifest_path: &Path) -> PathBuf {
        match manifest_path.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn effective_targets(&self, targets: &[String]) -> RigupResult<Vec<String>> {
        if !targets.is_empty() {
            return Ok(targets.to_vec());
        }

        match &self.manifest.default_targets {
            Some(defaults) if !defaults.is_empty() => Ok(defaults.clone()),
            _ => Err(RigupError::Config(
                "No targets given and the manifest declares no defaultTargets".to_string(),
            )),
        }
    }
}
