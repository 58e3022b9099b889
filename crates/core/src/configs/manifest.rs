use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::RigupResult;

/// A task's action: either a single shell command string or an argv vector
/// executed without a shell.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Command {
    Single(String),
    Multiple(Vec<String>),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Single(cmd) => write!(f, "{}", cmd),
            Command::Multiple(argv) => write!(f, "{}", argv.join(" ")),
        }
    }
}

#[derive(Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TaskConfig {
    /// Unique task name.
    pub name: String,
    pub description: Option<String>,
    /// Action to run once prerequisites are satisfied. A task without a
    /// command is an aggregate: it only groups its prerequisites.
    pub command: Option<Command>,
    /// Names of tasks that must complete first, in order.
    pub prerequisites: Option<Vec<String>>,
    /// Path whose existence (relative to the manifest directory) marks the
    /// task as already satisfied.
    pub creates: Option<String>,
    /// Extra environment variables for the command.
    pub env: Option<BTreeMap<String, String>>,
}

#[derive(Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ManifestConfig {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Targets used when an invocation names none.
    pub default_targets: Option<Vec<String>>,
    pub tasks: Vec<TaskConfig>,
}

pub fn parse_manifest(yaml_str: &str) -> RigupResult<ManifestConfig> {
    let config: ManifestConfig = serde_yaml::from_str(yaml_str)?;
    Ok(config)
}
