// ==========================================
// 酸面包排程计算器 - 请求/响应 DTO
// ==========================================
// 所有请求字段可省略, 缺省值来自配置
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::ingredients::IngredientPlan;

/// 排程请求
///
/// starter_amount / hydration 接受数字或数字字符串, 校验在 RequestValidator 中完成
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    #[serde(default, alias = "existing_starter_amount")]
    pub starter_amount: Option<serde_json::Value>,

    #[serde(default)]
    pub feeding_ratio: Option<String>,

    #[serde(default)]
    pub start_time: Option<serde_json::Value>,

    /// YYYY-MM-DD, 省略时取时钟的今天
    #[serde(default)]
    pub start_date: Option<String>,

    #[serde(default)]
    pub hydration: Option<serde_json::Value>,

    #[serde(default)]
    pub flour_type: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub locale: Option<String>,
}

/// 配比信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioInfoDto {
    pub label: String,
    pub starter_parts: u32,
    pub flour_parts: u32,
    pub water_parts: u32,
    pub peak_hours: u32,
    pub description: String,
}

/// 时间线节点 (逻辑顺序)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePointDto {
    pub step: String,
    pub datetime: String,
}

/// 单个工序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDto {
    /// 工序标识
    pub key: String,

    /// 展示名称
    pub step: String,

    /// 12 小时制时间 ("8:00 AM")
    pub time: String,

    /// ISO-8601 本地时间
    pub datetime: String,

    pub description: String,
}

/// 单日分组
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayGroupDto {
    /// YYYY-MM-DD
    pub date: String,

    /// "Saturday, October 17"
    pub date_label: String,

    pub steps: Vec<StepDto>,
}

/// 排程响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// 恒为 true
    pub success: bool,
    pub feeding_ratio: String,
    pub feeding_ratio_info: RatioInfoDto,
    pub ingredients: IngredientPlan,
    pub timeline: Vec<TimelinePointDto>,
    pub days: Vec<DayGroupDto>,
    pub start_time: String,
    pub hydration: i32,
    pub flour_type: String,
    pub notes: String,
    pub locale: String,
}
