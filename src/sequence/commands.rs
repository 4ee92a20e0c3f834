use std::path::Path;
use std::time::Duration;

use crate::compose::ComposeCommand;
use crate::config::Config;

/// Shared prefix for every compose invocation: the `compose` subcommand plus
/// any `-f`/`-p` overrides from config.
fn base_args(cfg: &Config) -> Vec<String> {
    let mut args = vec!["compose".to_string()];
    if let Some(ref file) = cfg.compose_file {
        args.extend(["-f".into(), file.clone()]);
    }
    if let Some(ref project) = cfg.project {
        args.extend(["-p".into(), project.clone()]);
    }
    args
}

/// Build a `docker compose rm` command that stops and force-removes all
/// containers of the stack.
pub fn remove_command(cfg: &Config, work_dir: &Path) -> ComposeCommand {
    let mut args = base_args(cfg);
    args.extend(["rm".into(), "--force".into(), "--stop".into()]);

    ComposeCommand {
        args,
        work_dir: work_dir.to_path_buf(),
        timeout: Some(Duration::from_secs(cfg.command_timeout)),
    }
}

/// Build a `docker compose build` command that rebuilds every service image
/// from scratch.
pub fn build_command(cfg: &Config, work_dir: &Path) -> ComposeCommand {
    let mut args = base_args(cfg);
    args.extend(["build".into(), "--no-cache".into()]);

    ComposeCommand {
        args,
        work_dir: work_dir.to_path_buf(),
        timeout: Some(Duration::from_secs(cfg.build_timeout)),
    }
}

/// Build a `docker compose up` command that starts the stack detached.
pub fn up_command(cfg: &Config, work_dir: &Path) -> ComposeCommand {
    let mut args = base_args(cfg);
    args.extend(["up".into(), "--detach".into()]);

    ComposeCommand {
        args,
        work_dir: work_dir.to_path_buf(),
        timeout: Some(Duration::from_secs(cfg.command_timeout)),
    }
}

/// Build a `docker compose logs` command that follows combined output until
/// interrupted. No timeout: streaming ends when the operator does.
pub fn logs_command(cfg: &Config, work_dir: &Path) -> ComposeCommand {
    let mut args = base_args(cfg);
    args.extend(["logs".into(), "--follow".into()]);

    ComposeCommand {
        args,
        work_dir: work_dir.to_path_buf(),
        timeout: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            compose_file: Some("docker-compose.yaml".into()),
            project: Some("mailer".into()),
            command_timeout: 120,
            build_timeout: 600,
            ..Config::default()
        }
    }

    #[test]
    fn remove_command_stops_and_forces() {
        let cmd = remove_command(&test_config(), Path::new("/tmp"));
        assert_eq!(cmd.args[0], "compose");
        assert!(cmd.args.contains(&"rm".into()));
        assert!(cmd.args.contains(&"--force".into()));
        assert!(cmd.args.contains(&"--stop".into()));
        assert_eq!(cmd.timeout, Some(Duration::from_secs(120)));
        assert_eq!(cmd.work_dir, Path::new("/tmp"));
    }

    #[test]
    fn build_command_discards_cache() {
        let cmd = build_command(&test_config(), Path::new("/tmp"));
        assert!(cmd.args.contains(&"build".into()));
        assert!(cmd.args.contains(&"--no-cache".into()));
        assert_eq!(cmd.timeout, Some(Duration::from_secs(600)));
    }

    #[test]
    fn up_command_is_detached() {
        let cmd = up_command(&test_config(), Path::new("/tmp"));
        assert!(cmd.args.contains(&"up".into()));
        assert!(cmd.args.contains(&"--detach".into()));
    }

    #[test]
    fn logs_command_follows_without_timeout() {
        let cmd = logs_command(&test_config(), Path::new("/tmp"));
        assert!(cmd.args.contains(&"logs".into()));
        assert!(cmd.args.contains(&"--follow".into()));
        assert!(cmd.timeout.is_none());
    }

    #[test]
    fn overrides_precede_the_subcommand() {
        let cmd = up_command(&test_config(), Path::new("/tmp"));
        let up_pos = cmd.args.iter().position(|a| a == "up").unwrap();
        let f_pos = cmd.args.iter().position(|a| a == "-f").unwrap();
        let p_pos = cmd.args.iter().position(|a| a == "-p").unwrap();
        assert!(f_pos < up_pos);
        assert!(p_pos < up_pos);
        assert_eq!(cmd.args[f_pos + 1], "docker-compose.yaml");
        assert_eq!(cmd.args[p_pos + 1], "mailer");
    }

    #[test]
    fn no_overrides_means_bare_compose() {
        let cmd = remove_command(&Config::default(), Path::new("/tmp"));
        assert_eq!(cmd.args[0], "compose");
        assert_eq!(cmd.args[1], "rm");
        assert!(!cmd.args.contains(&"-f".into()));
        assert!(!cmd.args.contains(&"-p".into()));
    }
}
