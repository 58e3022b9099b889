//! High-level task runner
//!
//! This module provides the main execution loop that coordinates dependency
//! resolution, completion-marker checks, and action execution.

use std::collections::HashSet;

use colored::*;

use crate::colors::get_task_color;
use crate::execution::command::ActionExecutor;
use crate::graph::{Task, TaskGraph};
use crate::markers::CompletionProbe;
use crate::results::InvocationSummary;
use crate::types::RigupResult;

/// Runs targets against a task graph. Holds the executor and completion
/// probe behind traits so tests can observe execution without spawning
/// processes.
pub struct TaskRunner<'a> {
    graph: &'a TaskGraph,
    executor: &'a dyn ActionExecutor,
    probe: &'a dyn CompletionProbe,
}

impl<'a> TaskRunner<'a> {
    pub fn new(
        graph: &'a TaskGraph,
        executor: &'a dyn ActionExecutor,
        probe: &'a dyn CompletionProbe,
    ) -> Self {
        Self {
            graph,
            executor,
            probe,
        }
    }

    /// Run the given targets in order. Each task runs at most once per
    /// invocation, tasks whose completion marker already exists are skipped,
    /// and the first action failure halts everything that follows it,
    /// including tasks of later unrelated targets.
    pub fn run_targets(&self, targets: &[String]) -> RigupResult<InvocationSummary> {
        // Resolve every target before any action runs, so a resolution error
        // never leaves the root half-provisioned.
        let mut plans = Vec::with_capacity(targets.len());
        for target in targets {
            plans.push(self.graph.resolve(target)?);
        }

        let mut summary = InvocationSummary::default();
        let mut satisfied: HashSet<&str> = HashSet::new();

        for plan in plans {
            for task in plan {
                if satisfied.contains(task.name.as_str()) {
                    continue;
                }

                if self.probe.is_satisfied(task)? {
                    println!(
                        "{}",
                        format!("○ Skipping '{}' (already satisfied)", task.name).bright_black()
                    );
                    satisfied.insert(&task.name);
                    summary.skipped.push(task.name.clone());
                    continue;
                }

                self.announce(task);
                self.executor.execute(task)?;
                satisfied.insert(&task.name);
                summary.executed.push(task.name.clone());
            }
        }

        Ok(summary)
    }

    /// Print task execution header with colors
    fn announce(&self, task: &Task) {
        let task_color = get_task_color(&task.name);
        println!();
        println!(
            "┌─ {}",
            format!("Running task '{}'", task.name)
                .color(task_color)
                .bold()
        );
        match &task.command {
            Some(command) => println!("└─ {} {}", "Command:".bright_black(), command),
            None => println!("└─ {}", "Aggregate of prerequisites".bright_black()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::parse_manifest;
    use crate::types::RigupError;
    use std::cell::RefCell;

    struct RecordingExecutor {
        calls: RefCell<Vec<String>>,
    }

    impl RecordingExecutor {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl ActionExecutor for RecordingExecutor {
        fn execute(&self, task: &Task) -> RigupResult<()> {
            self.calls.borrow_mut().push(task.name.clone());
            Ok(())
        }
    }

    struct FailingExecutor {
        fail_on: String,
        calls: RefCell<Vec<String>>,
    }

    impl FailingExecutor {
        fn new(fail_on: &str) -> Self {
            Self {
                fail_on: fail_on.to_string(),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl ActionExecutor for FailingExecutor {
        fn execute(&self, task: &Task) -> RigupResult<()> {
            self.calls.borrow_mut().push(task.name.clone());
            if task.name == self.fail_on {
                return Err(RigupError::Action {
                    task: task.name.clone(),
                    detail: "Command 'false' failed with exit code: 1".to_string(),
                });
            }
            Ok(())
        }
    }

    struct StaticProbe {
        satisfied: HashSet<String>,
    }

    impl StaticProbe {
        fn none() -> Self {
            Self {
                satisfied: HashSet::new(),
            }
        }

        fn with(names: &[&str]) -> Self {
            Self {
                satisfied: names.iter().map(|n| n.to_string()).collect(),
            }
        }
    }

    impl CompletionProbe for StaticProbe {
        fn is_satisfied(&self, task: &Task) -> RigupResult<bool> {
            Ok(self.satisfied.contains(&task.name))
        }
    }

    fn scraper_graph() -> TaskGraph {
        let config = parse_manifest(
            r#"
tasks:
  - name: venv
    command: python3 -m venv venv
    creates: venv
  - name: requirements
    prerequisites: [venv]
    command: venv/bin/pip install -r requirements.txt
  - name: browsers
    prerequisites: [venv]
    command: venv/bin/playwright install
"#,
        )
        .unwrap();
        TaskGraph::from_manifest(&config).unwrap()
    }

    fn targets(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_runs_prerequisites_before_dependents() {
        let graph = scraper_graph();
        let executor = RecordingExecutor::new();
        let probe = StaticProbe::none();
        let runner = TaskRunner::new(&graph, &executor, &probe);

        let summary = runner.run_targets(&targets(&["requirements"])).unwrap();

        assert_eq!(executor.calls(), vec!["venv", "requirements"]);
        assert_eq!(summary.executed, vec!["venv", "requirements"]);
        assert!(summary.skipped.is_empty());
    }

    #[test]
    fn test_shared_prerequisite_runs_once_across_targets() {
        let graph = scraper_graph();
        let executor = RecordingExecutor::new();
        let probe = StaticProbe::none();
        let runner = TaskRunner::new(&graph, &executor, &probe);

        let summary = runner
            .run_targets(&targets(&["requirements", "browsers"]))
            .unwrap();

        assert_eq!(
            executor.calls(),
            vec!["venv", "requirements", "browsers"],
            "The shared prerequisite should execute once per invocation"
        );
        assert_eq!(summary.executed, vec!["venv", "requirements", "browsers"]);
    }

    #[test]
    fn test_marker_satisfied_task_is_skipped() {
        let graph = scraper_graph();
        let executor = RecordingExecutor::new();
        let probe = StaticProbe::with(&["venv"]);
        let runner = TaskRunner::new(&graph, &executor, &probe);

        let summary = runner
            .run_targets(&targets(&["requirements", "browsers"]))
            .unwrap();

        assert_eq!(
            executor.calls(),
            vec!["requirements", "browsers"],
            "A task with an existing marker should not run its action"
        );
        assert_eq!(summary.skipped, vec!["venv"]);
        assert_eq!(summary.executed, vec!["requirements", "browsers"]);
    }

    #[test]
    fn test_prerequisite_runs_when_dependent_marker_is_satisfied() {
        let graph = scraper_graph();
        let executor = RecordingExecutor::new();
        let probe = StaticProbe::with(&["requirements"]);
        let runner = TaskRunner::new(&graph, &executor, &probe);

        let summary = runner.run_targets(&targets(&["requirements"])).unwrap();

        assert_eq!(
            executor.calls(),
            vec!["venv"],
            "An unsatisfied prerequisite should still run when its dependent is skipped"
        );
        assert_eq!(summary.executed, vec!["venv"]);
        assert_eq!(summary.skipped, vec!["requirements"]);
    }

    #[test]
    fn test_fully_satisfied_invocation_runs_nothing() {
        let graph = scraper_graph();
        let executor = RecordingExecutor::new();
        let probe = StaticProbe::with(&["venv", "requirements", "browsers"]);
        let runner = TaskRunner::new(&graph, &executor, &probe);

        let summary = runner
            .run_targets(&targets(&["requirements", "browsers"]))
            .unwrap();

        assert!(
            executor.calls().is_empty(),
            "A fully provisioned root should execute no actions"
        );
        assert!(summary.executed.is_empty());
        assert_eq!(summary.skipped.len(), 3);
    }

    #[test]
    fn test_failure_halts_remaining_tasks() {
        let config = parse_manifest(
            r#"
tasks:
  - name: first
    command: "true"
  - name: second
    prerequisites: [first]
    command: "false"
  - name: third
    prerequisites: [second]
    command: "true"
"#,
        )
        .unwrap();
        let graph = TaskGraph::from_manifest(&config).unwrap();
        let executor = FailingExecutor::new("second");
        let probe = StaticProbe::none();
        let runner = TaskRunner::new(&graph, &executor, &probe);

        let err = runner
            .run_targets(&targets(&["third"]))
            .expect_err("Failing action should halt the run");

        assert_eq!(
            executor.calls(),
            vec!["first", "second"],
            "Nothing after the failing task should execute"
        );
        assert!(matches!(err, RigupError::Action { task, .. } if task == "second"));
    }

    #[test]
    fn test_failure_halts_unrelated_later_targets() {
        let config = parse_manifest(
            r#"
tasks:
  - name: doomed
    command: "false"
  - name: safe
    command: "true"
"#,
        )
        .unwrap();
        let graph = TaskGraph::from_manifest(&config).unwrap();
        let executor = FailingExecutor::new("doomed");
        let probe = StaticProbe::none();
        let runner = TaskRunner::new(&graph, &executor, &probe);

        let err = runner
            .run_targets(&targets(&["doomed", "safe"]))
            .expect_err("Failure should halt the whole invocation");

        assert_eq!(
            executor.calls(),
            vec!["doomed"],
            "Tasks of later targets should not run after a failure"
        );
        assert!(matches!(err, RigupError::Action { task, .. } if task == "doomed"));
    }

    #[test]
    fn test_unknown_target_executes_nothing() {
        let graph = scraper_graph();
        let executor = RecordingExecutor::new();
        let probe = StaticProbe::none();
        let runner = TaskRunner::new(&graph, &executor, &probe);

        let err = runner
            .run_targets(&targets(&["venv", "missing"]))
            .expect_err("Unknown target should fail the invocation");

        assert!(
            executor.calls().is_empty(),
            "All targets resolve before any action runs"
        );
        assert!(matches!(err, RigupError::UnknownTask(name) if name == "missing"));
    }

    #[test]
    fn test_cycle_executes_nothing() {
        let config = parse_manifest(
            r#"
tasks:
  - name: standalone
    command: "true"
  - name: a
    prerequisites: [b]
    command: "true"
  - name: b
    prerequisites: [a]
    command: "true"
"#,
        )
        .unwrap();
        let graph = TaskGraph::from_manifest(&config).unwrap();
        let executor = RecordingExecutor::new();
        let probe = StaticProbe::none();
        let runner = TaskRunner::new(&graph, &executor, &probe);

        let err = runner
            .run_targets(&targets(&["standalone", "a"]))
            .expect_err("A target on a cycle should fail the invocation");

        assert!(
            executor.calls().is_empty(),
            "No action should run when any target fails to resolve"
        );
        assert!(matches!(err, RigupError::Cycle(_)));
    }

    #[test]
    fn test_aggregate_target_runs_its_prerequisites() {
        let config = parse_manifest(
            r#"
tasks:
  - name: venv
    command: python3 -m venv venv
  - name: all
    prerequisites: [venv]
"#,
        )
        .unwrap();
        let graph = TaskGraph::from_manifest(&config).unwrap();
        let executor = RecordingExecutor::new();
        let probe = StaticProbe::none();
        let runner = TaskRunner::new(&graph, &executor, &probe);

        let summary = runner.run_targets(&targets(&["all"])).unwrap();

        assert_eq!(executor.calls(), vec!["venv", "all"]);
        assert_eq!(summary.executed, vec!["venv", "all"]);
    }
}
