// ==========================================
// 酸面包排程计算器 - 引擎层
// ==========================================
// 职责: 纯计算规则 (配比查询 / 配料 / 时间解析 / 时间线)
// 红线: 无 I/O, 无共享可变状态
// ==========================================

pub mod clock;
pub mod error;
pub mod ingredient_calculator;
pub mod orchestrator;
pub mod ratio_table;
pub mod time_parser;
pub mod timeline_generator;

// 重导出核心引擎
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{EngineError, EngineResult};
pub use ingredient_calculator::{round1, IngredientCalculator};
pub use orchestrator::{BakeSchedule, PlanInput, ScheduleOrchestrator};
pub use ratio_table::{RatioTable, DEFAULT_RATIO_LABEL};
pub use time_parser::{format_time_12h, parse_start_time};
pub use timeline_generator::TimelineGenerator;
