use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};

/// Variables read from the env file. Opaque to the runner: they are handed
/// to every orchestrator invocation and never inspected.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    vars: BTreeMap<String, String>,
}

impl EnvFile {
    /// Read a dotenv-style file. A missing file yields an empty mapping.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "env file not found, continuing without it");
            return Ok(Self::default());
        }

        let iter = dotenvy::from_path_iter(path)
            .with_context(|| format!("failed to open env file {}", path.display()))?;

        let mut vars = BTreeMap::new();
        for item in iter {
            let (key, value) =
                item.with_context(|| format!("failed to parse env file {}", path.display()))?;
            vars.insert(key, value);
        }

        tracing::debug!(path = %path.display(), count = vars.len(), "env file loaded");
        Ok(Self { vars })
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvFile {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

// Values are usually credentials; only keys are printed.
impl fmt::Debug for EnvFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.vars.keys()).finish()
    }
}
