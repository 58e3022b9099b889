use std::path::PathBuf;

use crate::graph::Task;
use crate::types::RigupResult;

/// Decides whether a task's work is already done and its action can be
/// skipped. Implementations other than the filesystem probe exist mainly so
/// tests can run without touching disk.
pub trait CompletionProbe {
    fn is_satisfied(&self, task: &Task) -> RigupResult<bool>;
}

/// Filesystem probe: a task with a `creates` path is satisfied when that
/// path exists under the provisioning root. Tasks without a marker are
/// never satisfied up front.
pub struct ArtifactProbe {
    root: PathBuf,
}

impl ArtifactProbe {
    pub fn new(root: impl Into<PathBuf>) -> ArtifactProbe {
        ArtifactProbe { root: root.into() }
    }
}

impl CompletionProbe for ArtifactProbe {
    fn is_satisfied(&self, task: &Task) -> RigupResult<bool> {
        match &task.creates {
            Some(marker) => Ok(self.root.join(marker).try_exists()?),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn task_with_marker(marker: Option<&str>) -> Task {
        Task {
            name: "venv".to_string(),
            description: None,
            prerequisites: Vec::new(),
            command: None,
            creates: marker.map(PathBuf::from),
            env: BTreeMap::new(),
        }
    }

    #[test]
    fn test_satisfied_when_marker_exists() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp_dir.path().join("venv")).unwrap();

        let probe = ArtifactProbe::new(temp_dir.path());
        let task = task_with_marker(Some("venv"));
        assert!(probe.is_satisfied(&task).unwrap());
    }

    #[test]
    fn test_unsatisfied_when_marker_missing() {
        let temp_dir = tempfile::tempdir().unwrap();

        let probe = ArtifactProbe::new(temp_dir.path());
        let task = task_with_marker(Some("venv"));
        assert!(!probe.is_satisfied(&task).unwrap());
    }

    #[test]
    fn test_unsatisfied_without_marker() {
        let temp_dir = tempfile::tempdir().unwrap();

        let probe = ArtifactProbe::new(temp_dir.path());
        let task = task_with_marker(None);
        assert!(
            !probe.is_satisfied(&task).unwrap(),
            "A task without a marker should always run"
        );
    }

    #[test]
    fn test_marker_file_counts_like_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join(".installed"), "").unwrap();

        let probe = ArtifactProbe::new(temp_dir.path());
        let task = task_with_marker(Some(".installed"));
        assert!(probe.is_satisfied(&task).unwrap());
    }
}
