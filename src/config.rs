use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Highest fixed precision worth asking for; `f64` carries about 17 significant digits
pub const MAX_PRECISION: usize = 17;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
}

/// How results are presented. None of these settings change the arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub color: bool,
    /// Fixed number of fraction digits; unset means shortest round-trip form
    #[serde(default)]
    pub precision: Option<usize>,
    #[serde(default = "default_true")]
    pub show_expression: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            precision: None,
            show_expression: true,
        }
    }
}

impl Config {
    /// Load from `config_path`, writing the defaults there first if the file is missing.
    ///
    /// A location that cannot be written still yields the defaults.
    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            if let Err(e) = default_config.save_to(config_path) {
                tracing::warn!(path = %config_path.display(), error = %e, "using default configuration");
            }
            return Ok(default_config);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| AppError::Io(e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if let Some(precision) = self.display.precision {
            if precision > MAX_PRECISION {
                return Err(AppError::Config(format!(
                    "Display precision must be at most {} digits, got {}",
                    MAX_PRECISION, precision
                )));
            }
        }

        Ok(())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content).map_err(|e| AppError::Io(e.to_string()))?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("calcheus")
            .join("config.toml")
    }
}
