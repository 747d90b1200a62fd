// ==========================================
// 酸面包排程计算器 - 应用状态
// ==========================================
// 职责: 持有配置与 API 实例, 供命令层共享
// 只读: 请求之间没有可变状态
// ==========================================

use std::sync::Arc;

use crate::api::ScheduleApi;
use crate::config::{ConfigError, ConfigManager, PlannerConfig};
use crate::engine::clock::{Clock, SystemClock};

/// 应用状态
pub struct AppState {
    /// 排程API
    pub schedule_api: Arc<ScheduleApi>,
}

impl AppState {
    /// 创建新的AppState实例（系统时钟）
    pub fn new(config: PlannerConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// 创建新的AppState实例（注入时钟，用于测试或回放）
    pub fn with_clock(config: PlannerConfig, clock: Arc<dyn Clock>) -> Self {
        tracing::info!(
            feeding_policy = %config.feeding_policy,
            default_ratio = %config.defaults.feeding_ratio,
            "初始化AppState"
        );

        Self {
            schedule_api: Arc::new(ScheduleApi::with_clock(config, clock)),
        }
    }

    /// 从配置文件与环境变量初始化
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = ConfigManager::load()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &PlannerConfig {
        self.schedule_api.config()
    }
}
