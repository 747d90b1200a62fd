// ==========================================
// 酸面包排程计算器 - 配料方案
// ==========================================
// 每次请求重新计算,不落库
// 所有克数已按一位小数取整 (四舍五入, 远离零)
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::FeedingPolicy;

/// 酵种喂养量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarterFeeding {
    /// 使用的已有酵种 (g)
    pub existing_starter_used: f64,

    /// 需加入的面粉 (g)
    pub flour_to_add: f64,

    /// 需加入的水 (g)
    pub water_to_add: f64,

    /// 喂养后酵种总量 (g)
    pub total_after_feeding: f64,

    /// 达峰小时数
    pub peak_hours: u32,
}

/// 完整配料方案
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientPlan {
    pub feeding_ratio: String,
    pub feeding_policy: FeedingPolicy,
    pub starter_feeding: StarterFeeding,

    /// 活性酵种总量 (g)
    pub active_starter_amount: f64,

    /// 投入主面团的酵种 (g),全部使用
    pub starter_for_bread: f64,

    pub main_flour: f64,
    pub main_water: f64,

    /// 基准含水量下的主面团水量 (g)
    pub baseline_main_water: f64,

    /// 为达到目标含水量对主面团水量的调整 (g),可为负
    pub water_adjustment: f64,

    pub salt: f64,
    pub total_flour: f64,
    pub total_water: f64,

    /// 请求的含水量 (%)
    pub target_hydration: i32,

    /// 实际含水量 (%),按未取整总量计算
    pub final_hydration: f64,
}
