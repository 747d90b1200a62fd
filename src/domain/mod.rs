// ==========================================
// 酸面包排程计算器 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含计算规则,不含请求解析
// ==========================================

pub mod ingredients;
pub mod ratio;
pub mod timeline;
pub mod types;

// 重导出核心类型
pub use ingredients::{IngredientPlan, StarterFeeding};
pub use ratio::FeedingRatio;
pub use timeline::{DaySchedule, Timeline, TimelineEntry};
pub use types::{FeedingPolicy, StepKind};
