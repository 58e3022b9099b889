use petgraph::algo::kosaraju_scc;
use petgraph::prelude::*;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::PathBuf;

use crate::configs::{Command, ManifestConfig, TaskConfig};
use crate::types::{RigupError, RigupResult};

/// A fully resolved task from the manifest.
#[derive(Debug, Clone)]
pub struct Task {
    pub name: String,
    pub description: Option<String>,
    /// Prerequisite task names, in declaration order.
    pub prerequisites: Vec<String>,
    pub command: Option<Command>,
    /// Path relative to the provisioning root whose existence marks the task
    /// as already satisfied.
    pub creates: Option<PathBuf>,
    pub env: BTreeMap<String, String>,
}

impl Task {
    fn from_config(config: &TaskConfig) -> Task {
        Task {
            name: config.name.clone(),
            description: config.description.clone(),
            prerequisites: config.prerequisites.clone().unwrap_or_default(),
            command: config.command.clone(),
            creates: config.creates.as_ref().map(PathBuf::from),
            env: config.env.clone().unwrap_or_default(),
        }
    }
}

/// The immutable task graph built from a manifest. Holds the tasks in
/// declaration order plus a petgraph view used for display and cycle
/// reporting.
#[derive(Debug)]
pub struct TaskGraph {
    tasks: Vec<Task>,
    index: HashMap<String, usize>,
    dep_graph: DiGraph<String, ()>,
    cycles: Vec<Vec<String>>,
}

enum VisitState {
    InProgress,
    Done,
}

impl TaskGraph {
    /// Build the graph from a parsed manifest. Fails on duplicate task names
    /// and on prerequisites that name no declared task. Cycles do not fail
    /// the build; they are recorded and only rejected when a resolution
    /// actually reaches them.
    pub fn from_manifest(config: &ManifestConfig) -> RigupResult<TaskGraph> {
        let mut tasks: Vec<Task> = Vec::with_capacity(config.tasks.len());
        let mut index = HashMap::new();

        for task_config in &config.tasks {
            if index.contains_key(&task_config.name) {
                return Err(RigupError::Config(format!(
                    "Duplicate task name '{}'",
                    task_config.name
                )));
            }
            index.insert(task_config.name.clone(), tasks.len());
            tasks.push(Task::from_config(task_config));
        }

        for task in &tasks {
            for prereq in &task.prerequisites {
                if !index.contains_key(prereq) {
                    return Err(RigupError::UnknownTask(prereq.clone()));
                }
            }
        }

        let mut dep_graph = DiGraph::<String, ()>::new();
        let mut node_indices = HashMap::new();

        for task in &tasks {
            let node_index = dep_graph.add_node(task.name.clone());
            node_indices.insert(task.name.clone(), node_index);
        }

        for task in &tasks {
            let from_node = node_indices[&task.name];
            for prereq in &task.prerequisites {
                // Edge: task -> prerequisite (prerequisite comes first)
                dep_graph.add_edge(from_node, node_indices[prereq], ());
            }
        }

        // Detect cycles using strongly connected components
        let mut cycles: Vec<Vec<String>> = kosaraju_scc(&dep_graph)
            .into_iter()
            .filter_map(|component| {
                if component.len() > 1 {
                    let mut cycle = component
                        .iter()
                        .map(|node| dep_graph[*node].clone())
                        .collect::<Vec<_>>();
                    cycle.sort();
                    Some(cycle)
                } else {
                    let node = component[0];
                    if dep_graph.contains_edge(node, node) {
                        Some(vec![dep_graph[node].clone()])
                    } else {
                        None
                    }
                }
            })
            .collect();

        cycles.sort();

        Ok(TaskGraph {
            tasks,
            index,
            dep_graph,
            cycles,
        })
    }

    pub fn task(&self, name: &str) -> Option<&Task> {
        self.index.get(name).map(|&i| &self.tasks[i])
    }

    /// All tasks in manifest declaration order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn graph(&self) -> &DiGraph<String, ()> {
        &self.dep_graph
    }

    /// Cycles recorded at build time, each as a sorted list of member names.
    pub fn cycles(&self) -> &[Vec<String>] {
        &self.cycles
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Resolve the execution order for a single target: a depth-first walk
    /// that lists every prerequisite before its dependent, each task at most
    /// once. Prerequisites are visited in declaration order, so the result
    /// is deterministic for a given manifest.
    pub fn resolve(&self, target: &str) -> RigupResult<Vec<&Task>> {
        let task = self
            .task(target)
            .ok_or_else(|| RigupError::UnknownTask(target.to_string()))?;

        let mut states = HashMap::new();
        let mut order = Vec::new();
        let mut path = Vec::new();
        self.visit(&task.name, &mut states, &mut order, &mut path)?;
        Ok(order)
    }

    /// Resolve several targets into one combined order, keeping the first
    /// occurrence of each task.
    pub fn resolve_many(&self, targets: &[String]) -> RigupResult<Vec<&Task>> {
        let mut seen = HashSet::new();
        let mut order = Vec::new();
        for target in targets {
            for task in self.resolve(target)? {
                if seen.insert(task.name.as_str()) {
                    order.push(task);
                }
            }
        }
        Ok(order)
    }

    fn visit<'a>(
        &'a self,
        name: &'a str,
        states: &mut HashMap<&'a str, VisitState>,
        order: &mut Vec<&'a Task>,
        path: &mut Vec<&'a str>,
    ) -> RigupResult<()> {
        match states.get(name) {
            Some(VisitState::Done) => return Ok(()),
            Some(VisitState::InProgress) => {
                // Report the closed loop starting from the first task on it
                let start = path.iter().position(|n| *n == name).unwrap_or(0);
                let mut cycle: Vec<String> =
                    path[start..].iter().map(|n| n.to_string()).collect();
                cycle.push(name.to_string());
                return Err(RigupError::Cycle(cycle));
            }
            None => {}
        }

        let task = self
            .task(name)
            .ok_or_else(|| RigupError::UnknownTask(name.to_string()))?;

        states.insert(name, VisitState::InProgress);
        path.push(name);
        for prereq in &task.prerequisites {
            self.visit(prereq, states, order, path)?;
        }
        path.pop();
        states.insert(name, VisitState::Done);
        order.push(task);
        Ok(())
    }
}
