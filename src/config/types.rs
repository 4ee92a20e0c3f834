use serde::{Deserialize, Serialize};

/// What to do when the container-removal step fails.
///
/// The default mirrors the historical behavior: "no containers to remove"
/// is a common, non-error case, so the sequence proceeds regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemovePolicy {
    Continue,
    Halt,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Compose file passed as `-f`. None lets compose use its own lookup.
    pub compose_file: Option<String>,
    /// Project name passed as `-p`. None lets compose derive it.
    pub project: Option<String>,
    /// Marker file touched at the start of every run.
    pub marker_path: String,
    pub remove_failure: RemovePolicy,
    /// Timeout in seconds for the remove and up steps.
    pub command_timeout: u64,
    /// Timeout in seconds for the build step.
    pub build_timeout: u64,
    /// Follow combined logs after the stack is up. Disable for
    /// non-blocking runs.
    pub follow_logs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compose_file: None,
            project: None,
            marker_path: "last_sent.txt".to_string(),
            remove_failure: RemovePolicy::Continue,
            command_timeout: 120,
            build_timeout: 600,
            follow_logs: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_script_behavior() {
        let cfg = Config::default();
        assert_eq!(cfg.marker_path, "last_sent.txt");
        assert_eq!(cfg.remove_failure, RemovePolicy::Continue);
        assert!(cfg.follow_logs);
        assert!(cfg.compose_file.is_none());
        assert!(cfg.project.is_none());
    }

    #[test]
    fn remove_policy_parses_lowercase() {
        let cfg: Config = serde_yaml::from_str("remove_failure: halt").unwrap();
        assert_eq!(cfg.remove_failure, RemovePolicy::Halt);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg: Config = serde_yaml::from_str("project: mailer\nfollow_logs: false").unwrap();
        assert_eq!(cfg.project.as_deref(), Some("mailer"));
        assert!(!cfg.follow_logs);
        assert_eq!(cfg.build_timeout, 600);
    }
}
