use std::path::Path;

use anyhow::{Context, Result};

use super::types::Config;

const CONFIG_FILE: &str = ".restack.yaml";

/// Load config from a `.restack.yaml` file in the given directory.
/// A missing file yields the defaults; a malformed file is an error.
pub fn load(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: Config = serde_yaml::from_str(&contents)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(config)
}
