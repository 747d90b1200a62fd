// ==========================================
// 酸面包排程计算器 - 应用层
// ==========================================
// 职责: 连接外部请求处理方与 API 层
// ==========================================

pub mod commands;
pub mod state;

// 重导出
pub use commands::{describe_step, generate_schedule, health_check, list_feeding_ratios};
pub use state::AppState;
