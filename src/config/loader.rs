use std::path::Path;

use anyhow::{Context, Result};

use super::types::RunConfig;

pub const CONFIG_FILE_NAME: &str = ".dbstage.yml";

/// Load `.dbstage.yml` from the given directory. A missing file means defaults.
pub fn load(dir: &Path) -> Result<RunConfig> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(RunConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: RunConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    config.validate()?;
    Ok(config)
}
