// ==========================================
// 酸面包排程计算器 - 配置层
// ==========================================
// 职责: 部署级配置 (喂养口径 + 请求缺省值)
// 存储: JSON 文件 + 环境变量覆写
// ==========================================

pub mod config_manager;
pub mod planner_config;

// 重导出核心配置类型
pub use config_manager::{ConfigError, ConfigManager, CONFIG_PATH_ENV, FEEDING_POLICY_ENV};
pub use planner_config::{PlannerConfig, RequestDefaults};
