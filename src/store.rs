use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::model::{ConnectionConfig, ConsoleConfig};

const STORE_DIR: &str = ".piadmin";
const HOME_ENV: &str = "PIADMIN_HOME";

/// On-disk console settings (`config.json` under the store directory).
#[derive(Clone, Debug)]
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `$PIADMIN_HOME` when set, else `.piadmin` in the current directory.
    pub fn discover() -> Result<Self> {
        if let Some(home) = std::env::var_os(HOME_ENV) {
            return Ok(Self::at(PathBuf::from(home)));
        }
        let cwd = std::env::current_dir().context("get current dir")?;
        Ok(Self::at(cwd.join(STORE_DIR)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.json")
    }

    /// Reads the config; a missing file yields the default config.
    pub fn read_config(&self) -> Result<ConsoleConfig> {
        let path = self.config_path();
        if !path.exists() {
            return Ok(ConsoleConfig::default());
        }
        let bytes = fs::read(&path).with_context(|| format!("read {}", path.display()))?;
        let cfg: ConsoleConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            return Err(anyhow!("unsupported config version {}", cfg.version));
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &ConsoleConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize console config")?;
        write_atomic(&self.config_path(), &bytes).context("write config.json")
    }

    pub fn set_connection(&self, connection: ConnectionConfig) -> Result<()> {
        let mut cfg = self.read_config()?;
        cfg.connection = Some(connection);
        self.write_config(&cfg)
    }

    /// Drops the stored token but keeps the server address.
    pub fn clear_token(&self) -> Result<bool> {
        let mut cfg = self.read_config()?;
        let Some(conn) = cfg.connection.as_mut() else {
            return Ok(false);
        };
        let had = conn.token.take().is_some();
        self.write_config(&cfg)?;
        Ok(had)
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
