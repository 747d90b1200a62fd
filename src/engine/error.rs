// ==========================================
// 酸面包排程计算器 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 错误消息面向最终用户 (英文)
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid feeding ratio: '{0}' (expected one of 1:1:1, 1:2:2, 1:3:3, 1:4:4, 1:5:5, 1:10:10)")]
    InvalidRatio(String),

    #[error("Invalid starter amount: {0} (must be a positive number)")]
    InvalidAmount(String),

    #[error("Invalid time format: '{0}' (expected 'h:mm AM/PM' or 'h AM/PM')")]
    InvalidTimeFormat(String),

    #[error(
        "Hydration {requested}% is unreachable: the starter feed alone brings {minimum}% hydration, main dough water would be negative"
    )]
    UnreachableHydration { requested: i32, minimum: f64 },
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
