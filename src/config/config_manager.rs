// ==========================================
// 酸面包排程计算器 - 配置管理器
// ==========================================
// 职责: 配置加载、校验、环境变量覆写
// 存储: JSON 文件 (默认位于用户配置目录)
// ==========================================
// 环境变量:
// - SOURDOUGH_PLANNER_CONFIG: 配置文件路径
// - SOURDOUGH_PLANNER_FEEDING_POLICY: forward | exact
// ==========================================

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::planner_config::PlannerConfig;
use crate::domain::types::FeedingPolicy;
use crate::engine::ratio_table::RatioTable;
use crate::engine::time_parser::parse_start_time;

pub const CONFIG_PATH_ENV: &str = "SOURDOUGH_PLANNER_CONFIG";
pub const FEEDING_POLICY_ENV: &str = "SOURDOUGH_PLANNER_FEEDING_POLICY";

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败: {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("配置无效: {0}")]
    Invalid(String),
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager;

impl ConfigManager {
    /// 默认配置文件路径
    ///
    /// 优先级: 环境变量 → 用户配置目录 → 当前目录
    pub fn default_config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return PathBuf::from(trimmed);
            }
        }

        match dirs::config_dir() {
            Some(dir) => dir.join("sourdough-planner").join("config.json"),
            None => PathBuf::from("./sourdough_planner.json"),
        }
    }

    /// 加载配置（默认路径 + 环境变量覆写）
    pub fn load() -> Result<PlannerConfig, ConfigError> {
        let path = Self::default_config_path();
        let config = Self::load_or_default(&path)?;
        let policy_override = std::env::var(FEEDING_POLICY_ENV).ok();
        Self::apply_policy_override(config, policy_override.as_deref())
    }

    /// 文件不存在时返回缺省配置
    pub fn load_or_default(path: &Path) -> Result<PlannerConfig, ConfigError> {
        if !path.exists() {
            info!(path = %path.display(), "配置文件不存在, 使用缺省配置");
            return Ok(PlannerConfig::default());
        }
        Self::load_from_path(path)
    }

    /// 从 JSON 文件加载配置并校验
    pub fn load_from_path(path: &Path) -> Result<PlannerConfig, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: PlannerConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Self::validate(&config)?;
        info!(
            path = %path.display(),
            feeding_policy = %config.feeding_policy,
            "配置加载完成"
        );
        Ok(config)
    }

    /// 覆写喂养口径
    pub fn apply_policy_override(
        mut config: PlannerConfig,
        policy: Option<&str>,
    ) -> Result<PlannerConfig, ConfigError> {
        match policy.map(str::trim).filter(|p| !p.is_empty()) {
            Some(raw) => {
                let parsed: FeedingPolicy = raw.parse().map_err(ConfigError::Invalid)?;
                if parsed != config.feeding_policy {
                    warn!(from = %config.feeding_policy, to = %parsed, "喂养口径被环境变量覆写");
                }
                config.feeding_policy = parsed;
                Ok(config)
            }
            None => Ok(config),
        }
    }

    /// 校验缺省值
    pub fn validate(config: &PlannerConfig) -> Result<(), ConfigError> {
        let defaults = &config.defaults;

        if !RatioTable::contains(&defaults.feeding_ratio) {
            return Err(ConfigError::Invalid(format!(
                "defaults.feeding_ratio 不是已知配比: {}",
                defaults.feeding_ratio
            )));
        }

        if !(defaults.starter_amount.is_finite() && defaults.starter_amount > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "defaults.starter_amount 必须为正数: {}",
                defaults.starter_amount
            )));
        }

        parse_start_time(&defaults.start_time).map_err(|e| {
            ConfigError::Invalid(format!("defaults.start_time 无效: {}", e))
        })?;

        if defaults.hydration <= 0 {
            return Err(ConfigError::Invalid(format!(
                "defaults.hydration 必须为正数: {}",
                defaults.hydration
            )));
        }

        Ok(())
    }
}
