//! Runtime configuration loaded from JSON.

use crate::core::curve::SuccessCurve;
use crate::error::ForgeError;
use crate::logging::DEFAULT_LOG_FILTER;
use crate::utils::persistence::FileStorage;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForgeConfig {
    pub enchant_curve: SuccessCurve,
    pub upgrade_curve: SuccessCurve,
    /// Where persisted state lives. `None` means `~/.gearforge`.
    pub storage_dir: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            enchant_curve: SuccessCurve::ENCHANT,
            upgrade_curve: SuccessCurve::UPGRADE,
            storage_dir: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ForgeConfig {
    pub fn load(path: &Path) -> Result<Self, ForgeError> {
        let json = fs::read_to_string(path)
            .map_err(|e| ForgeError::Config(format!("{}: {e}", path.display())))?;
        let config: Self = serde_json::from_str(&json)
            .map_err(|e| ForgeError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "using default config");
                Self::default()
            }
        }
    }

    /// Curves must decay towards a floor inside [0, 1].
    pub fn validate(&self) -> Result<(), ForgeError> {
        let curves = [
            ("enchantCurve", &self.enchant_curve),
            ("upgradeCurve", &self.upgrade_curve),
        ];
        for (name, curve) in curves {
            if !(0.0..=1.0).contains(&curve.decay) || !(0.0..=1.0).contains(&curve.floor) {
                return Err(ForgeError::Config(format!(
                    "{name} decay and floor must lie in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    pub fn storage(&self) -> Result<FileStorage, ForgeError> {
        match &self.storage_dir {
            Some(dir) => Ok(FileStorage::new(dir.clone())),
            None => FileStorage::in_home_dir().map_err(|e| ForgeError::Config(e.to_string())),
        }
    }
}
