use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const APP_DIR: &str = "tug-of-war";

/// 用户配置 (config.toml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub left_team: String,
    pub right_team: String,
    /// 历史面板显示的回合数
    pub history_len: usize,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            left_team: "Left Team".to_string(),
            right_team: "Right Team".to_string(),
            history_len: 5,
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// 默认配置文件路径 (~/.config/tug-of-war/config.toml)
pub fn default_config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().ok_or(Error::NoPlatformDir("config"))?;
    Ok(dir.join(APP_DIR).join("config.toml"))
}

/// 默认日志文件路径 (~/.local/share/tug-of-war/tug-of-war.log)
pub fn default_log_path() -> Result<PathBuf> {
    let dir = dirs::data_dir().ok_or(Error::NoPlatformDir("data"))?;
    Ok(dir.join(APP_DIR).join("tug-of-war.log"))
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn to_toml(config: &Config) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}
