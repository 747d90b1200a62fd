// ==========================================
// 酸面包排程计算器 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型, 转换引擎错误为结构化错误响应
// 红线: 出错时不返回任何部分结果
// ==========================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::error::EngineError;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 请求校验错误
    // ==========================================
    #[error("Invalid feeding ratio: '{0}' (expected one of 1:1:1, 1:2:2, 1:3:3, 1:4:4, 1:5:5, 1:10:10)")]
    InvalidRatio(String),

    #[error("Invalid time format: '{0}' (expected 'h:mm AM/PM' or 'h AM/PM')")]
    InvalidTimeFormat(String),

    #[error("Invalid starter amount: {0} (must be a positive number)")]
    InvalidAmount(String),

    #[error("Invalid hydration: {0} (must be an integer percentage)")]
    InvalidHydration(String),

    #[error("Invalid start date: '{0}' (expected YYYY-MM-DD)")]
    InvalidStartDate(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error(
        "Hydration {requested}% is unreachable: the starter feed alone brings {minimum}% hydration, main dough water would be negative"
    )]
    UnreachableHydration { requested: i32, minimum: f64 },

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    /// 稳定错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidRatio(_) => "INVALID_RATIO",
            ApiError::InvalidTimeFormat(_) => "INVALID_TIME_FORMAT",
            ApiError::InvalidAmount(_) => "INVALID_AMOUNT",
            ApiError::InvalidHydration(_) => "INVALID_HYDRATION",
            ApiError::InvalidStartDate(_) => "INVALID_START_DATE",
            ApiError::InvalidRequest(_) => "INVALID_REQUEST",
            ApiError::UnreachableHydration { .. } => "UNREACHABLE_HYDRATION",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// 转换为错误响应
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            success: false,
            code: self.code().to_string(),
            error: self.to_string(),
            details: match self {
                ApiError::UnreachableHydration { requested, minimum } => Some(serde_json::json!({
                    "requested_hydration": requested,
                    "minimum_hydration": minimum,
                })),
                _ => None,
            },
        }
    }
}

// ==========================================
// 从 EngineError 转换
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidRatio(label) => ApiError::InvalidRatio(label),
            EngineError::InvalidAmount(raw) => ApiError::InvalidAmount(raw),
            EngineError::InvalidTimeFormat(raw) => ApiError::InvalidTimeFormat(raw),
            EngineError::UnreachableHydration { requested, minimum } => {
                ApiError::UnreachableHydration { requested, minimum }
            }
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

/// 错误响应（返回给调用方）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 恒为 false
    pub success: bool,

    /// 错误代码
    pub code: String,

    /// 错误消息
    pub error: String,

    /// 详细信息（可选）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
