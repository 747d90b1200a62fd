// ==========================================
// 酸面包排程计算器 - API 层
// ==========================================
// 职责: 请求/响应边界, 供应用层命令调用
// ==========================================

pub mod dto;
pub mod error;
pub mod schedule_api;
pub mod step_display;
pub mod validator;

// 重导出核心类型
pub use dto::{
    DayGroupDto, RatioInfoDto, ScheduleRequest, ScheduleResponse, StepDto, TimelinePointDto,
};
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use schedule_api::ScheduleApi;
pub use validator::{RequestValidator, ValidatedRequest};
