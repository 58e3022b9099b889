//! Result types for provisioner operations
//!
//! This module contains all result types returned by provisioner operations,
//! providing a centralized location for output structures.

use std::path::PathBuf;

/// Information about one task as declared in the manifest
#[derive(Debug, Clone)]
pub struct TaskInfo {
    pub name: String,
    pub description: Option<String>,
    pub prerequisites: Vec<String>,
    pub creates: Option<PathBuf>,
    /// Whether the completion marker already exists.
    pub satisfied: bool,
}

/// Result of listing the tasks of a manifest
#[derive(Debug)]
pub struct TaskListResult {
    pub manifest_name: Option<String>,
    pub tasks: Vec<TaskInfo>,
}

/// One step of an execution plan
#[derive(Debug, Clone)]
pub struct PlanStep {
    pub name: String,
    pub command: Option<String>,
    /// Whether the step would be skipped because its marker exists.
    pub up_to_date: bool,
}

/// Result of planning an invocation without running it
#[derive(Debug)]
pub struct ExecutionPlan {
    pub targets: Vec<String>,
    pub steps: Vec<PlanStep>,
}

/// Result of getting the dependency graph
#[derive(Debug)]
pub struct DependencyGraphResult {
    pub graph: petgraph::Graph<String, ()>,
    pub cycles: Vec<Vec<String>>,
}

/// What an invocation actually did, in execution order
#[derive(Debug, Default)]
pub struct InvocationSummary {
    pub executed: Vec<String>,
    pub skipped: Vec<String>,
}
