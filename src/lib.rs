// ==========================================
// 酸面包排程计算器 - 核心库
// ==========================================
// 输入: 酵种量 / 喂养配比 / 开始时间 / 目标含水量
// 输出: 配料方案 + 按日分组的工序时间线
// 系统定位: 无状态纯计算, 每次请求独立
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 计算规则
pub mod engine;

// 配置层 - 部署配置
pub mod config;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// 国际化
pub mod i18n;

// API 层 - 请求/响应边界
pub mod api;

// 应用层 - 命令入口
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    DaySchedule, FeedingPolicy, FeedingRatio, IngredientPlan, StarterFeeding, StepKind, Timeline,
    TimelineEntry,
};

// 引擎
pub use engine::{
    BakeSchedule, Clock, EngineError, FixedClock, IngredientCalculator, RatioTable,
    ScheduleOrchestrator, SystemClock, TimelineGenerator,
};

// API
pub use api::{ApiError, ErrorResponse, ScheduleApi, ScheduleRequest, ScheduleResponse};

// 配置
pub use config::{ConfigManager, PlannerConfig};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Sourdough Planner";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
