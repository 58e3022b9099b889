use thiserror::Error;

/// The main error type for rigup operations
#[derive(Debug, Error)]
pub enum RigupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown task '{0}'")]
    UnknownTask(String),

    #[error("Circular dependency detected: {}", .0.join(" -> "))]
    Cycle(Vec<String>),

    #[error("Task '{task}' failed: {detail}")]
    Action { task: String, detail: String },
}

/// Result type alias for rigup operations
pub type RigupResult<T> = Result<T, RigupError>;
