use std::path::{Path, PathBuf};

use config::{Config, Environment};
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Environment-backed settings. `WINE_DESCRIPTIONS_DIR` lands in `descriptions_dir`.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    pub descriptions_dir: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Self {
        Config::builder()
            .add_source(Environment::with_prefix("WINE"))
            .build()
            .and_then(|c| c.try_deserialize::<Settings>())
            .unwrap_or_default()
    }

    /// Positional argument wins over the environment. Empty values count as absent.
    pub fn resolve_root(&self, arg: Option<PathBuf>, bin: &'static str) -> Result<PathBuf> {
        let root = arg
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| {
                self.descriptions_dir
                    .clone()
                    .filter(|p| !p.as_os_str().is_empty())
            })
            .ok_or(Error::MissingRoot { bin })?;
        debug!(root = %root.display(), "resolved descriptions directory");
        ensure_dir(&root)?;
        Ok(root)
    }
}

fn ensure_dir(root: &Path) -> Result<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(Error::RootNotFound(root.to_path_buf()))
    }
}
