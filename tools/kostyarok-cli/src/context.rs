//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::config::{CliConfig, CONFIG_FILE_NAME};
use crate::output::Output;

/// File names probed in each directory, in priority order.
const CONFIG_CANDIDATES: [&str; 3] = [CONFIG_FILE_NAME, ".kostyarok.toml", "kostyarok.json"];

/// Shared state handed to every command.
pub struct Context {
    pub config: CliConfig,
    pub output: Output,
    pub cwd: PathBuf,
}

impl Context {
    /// Build the context.
    ///
    /// An explicit `--config` path must exist and parse. Without one the
    /// nearest config file up the directory tree is used, falling back
    /// to defaults.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = match config_path {
            Some(path) => CliConfig::load(path)?,
            None => match discover_config(&cwd) {
                Some(path) => {
                    output.debug(&format!("using config {}", path.display()));
                    CliConfig::load(&path.to_string_lossy())?
                }
                None => CliConfig::default(),
            },
        };

        Ok(Self { config, output, cwd })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        self.cwd.join(path)
    }
}

/// Nearest config file at or above `start`.
fn discover_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_CANDIDATES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join("kostyarok.json"), "{}").unwrap();

        assert_eq!(
            discover_config(&nested),
            Some(root.path().join("kostyarok.json"))
        );
    }

    #[test]
    fn test_discover_config_prefers_toml() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("kostyarok.json"), "{}").unwrap();
        std::fs::write(root.path().join(CONFIG_FILE_NAME), "").unwrap();

        assert_eq!(
            discover_config(root.path()),
            Some(root.path().join(CONFIG_FILE_NAME))
        );
    }
}
