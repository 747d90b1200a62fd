use serde::{Deserialize, Serialize};

use crate::domain::types::FeedingPolicy;
use crate::engine::ratio_table::DEFAULT_RATIO_LABEL;

/// 计算器配置
///
/// 文件格式：JSON，所有字段均可省略
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlannerConfig {
    /// 喂养口径（整个部署只使用一种）
    #[serde(default)]
    pub feeding_policy: FeedingPolicy,

    /// 请求字段缺省值
    #[serde(default)]
    pub defaults: RequestDefaults,
}

/// 请求字段缺省值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestDefaults {
    /// 酵种量 (g)
    pub starter_amount: f64,

    /// 喂养配比标签
    pub feeding_ratio: String,

    /// 开始时间（12 小时制）
    pub start_time: String,

    /// 目标含水量 (%)
    pub hydration: i32,

    /// 面粉种类（仅回显）
    pub flour_type: String,

    /// 备注（仅回显）
    pub notes: String,

    /// 展示语言
    pub locale: String,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            starter_amount: 100.0,
            feeding_ratio: DEFAULT_RATIO_LABEL.to_string(),
            start_time: "8:00 AM".to_string(),
            hydration: 70,
            flour_type: "bread flour".to_string(),
            notes: String::new(),
            locale: "en".to_string(),
        }
    }
}
