// ==========================================
// 酸面包排程计算器 - 配料计算引擎
// ==========================================
// 输入: 酵种量 + 喂养配比 + 目标含水量
// 输出: IngredientPlan (喂养量 + 主面团配料)
// ==========================================
// 主面团系数: 以 120g 活性酵种对应 500g 面粉的常规配方为基准
// 含水量: 按 (喂养 + 主面团) 总量重算主面团水量
// 取整: 一位小数, 四舍五入 (远离零), 只在输出时取整
// ==========================================

use tracing::{debug, instrument};

use crate::domain::ingredients::{IngredientPlan, StarterFeeding};
use crate::domain::ratio::FeedingRatio;
use crate::domain::types::FeedingPolicy;
use crate::engine::error::{EngineError, EngineResult};

/// 基准配方的活性酵种量 (g)
pub const STANDARD_ACTIVE_STARTER_G: f64 = 120.0;

/// 主面团面粉 / 活性酵种 (≈4.17)
pub const MAIN_FLOUR_PER_STARTER: f64 = 500.0 / STANDARD_ACTIVE_STARTER_G;

/// 基准含水量下主面团水 / 活性酵种 (≈2.71)
pub const BASELINE_MAIN_WATER_PER_STARTER: f64 = 325.0 / STANDARD_ACTIVE_STARTER_G;

/// 盐 / 活性酵种 (≈0.083)
pub const SALT_PER_STARTER: f64 = 10.0 / STANDARD_ACTIVE_STARTER_G;

/// 基准含水量 (%)
pub const BASELINE_HYDRATION: i32 = 70;

/// 一位小数取整, 半数远离零
pub fn round1(value: f64) -> f64 {
    // + 0.0 把 -0.0 归一为 0.0
    (value * 10.0).round() / 10.0 + 0.0
}

/// 一位小数向上取整
fn ceil1(value: f64) -> f64 {
    (value * 10.0).ceil() / 10.0 + 0.0
}

/// 未取整的喂养量
#[derive(Debug, Clone, Copy, PartialEq)]
struct FeedAmounts {
    starter: f64,
    flour: f64,
    water: f64,
    total: f64,
}

impl FeedAmounts {
    /// 正向: 输入为喂养前已有酵种
    fn forward(existing: f64, ratio: &FeedingRatio) -> Self {
        let unit = existing / ratio.starter_parts as f64;
        let flour = unit * ratio.flour_parts as f64;
        let water = unit * ratio.water_parts as f64;
        Self {
            starter: existing,
            flour,
            water,
            total: existing + flour + water,
        }
    }

    /// 精确: 输入为喂养后期望总量,按份数拆分
    fn exact(desired_total: f64, ratio: &FeedingRatio) -> Self {
        let unit = desired_total / ratio.total_parts() as f64;
        let starter = unit * ratio.starter_parts as f64;
        let flour = unit * ratio.flour_parts as f64;
        Self {
            starter,
            flour,
            water: desired_total - starter - flour,
            total: desired_total,
        }
    }
}

impl StarterFeeding {
    /// 正向口径的喂养量
    pub fn forward(existing: f64, ratio: &FeedingRatio) -> Self {
        Self::from_forward_amounts(FeedAmounts::forward(existing, ratio), ratio)
    }

    /// 精确口径的喂养量
    ///
    /// 取整后三项之和仍等于取整后的输入量（水量吸收取整误差）
    pub fn exact(desired_total: f64, ratio: &FeedingRatio) -> Self {
        let amounts = FeedAmounts::exact(desired_total, ratio);
        let total = round1(amounts.total);
        let starter = round1(amounts.starter);
        let flour = round1(amounts.flour);
        Self {
            existing_starter_used: starter,
            flour_to_add: flour,
            water_to_add: round1(total - starter - flour),
            total_after_feeding: total,
            peak_hours: ratio.peak_hours,
        }
    }

    fn from_forward_amounts(amounts: FeedAmounts, ratio: &FeedingRatio) -> Self {
        Self {
            existing_starter_used: round1(amounts.starter),
            flour_to_add: round1(amounts.flour),
            water_to_add: round1(amounts.water),
            total_after_feeding: round1(amounts.total),
            peak_hours: ratio.peak_hours,
        }
    }
}

// ==========================================
// IngredientCalculator - 配料计算引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct IngredientCalculator {
    policy: FeedingPolicy,
}

impl IngredientCalculator {
    pub fn new(policy: FeedingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> FeedingPolicy {
        self.policy
    }

    /// 计算完整配料方案
    ///
    /// # 参数
    /// - amount: Forward 口径为已有酵种, Exact 口径为喂养后期望总量 (g)
    /// - ratio: 喂养配比
    /// - hydration: 目标含水量 (%)
    ///
    /// # 错误
    /// - InvalidAmount: amount 非正或非有限值, 或派生量超出 f64 可表示范围
    /// - UnreachableHydration: 主面团水量需要为负
    #[instrument(skip(self, ratio), fields(ratio = ratio.label, policy = %self.policy))]
    pub fn calculate(
        &self,
        amount: f64,
        ratio: &FeedingRatio,
        hydration: i32,
    ) -> EngineResult<IngredientPlan> {
        ensure_amount(amount)?;

        let feed = match self.policy {
            FeedingPolicy::Forward => FeedAmounts::forward(amount, ratio),
            FeedingPolicy::Exact => FeedAmounts::exact(amount, ratio),
        };

        // 全部活性酵种投入主面团
        let active_starter = feed.total;
        let main_flour = active_starter * MAIN_FLOUR_PER_STARTER;
        let baseline_main_water = active_starter * BASELINE_MAIN_WATER_PER_STARTER;
        let salt = active_starter * SALT_PER_STARTER;

        // 按总面粉重算主面团水量
        let total_flour = feed.flour + main_flour;
        let target_total_water = hydration as f64 / 100.0 * total_flour;
        let main_water = target_total_water - feed.water;
        let total_water = feed.water + main_water;
        let water_adjustment = main_water - baseline_main_water;

        // 溢出后 main_water 可能为 NaN, 必须先于不可达判断
        ensure_representable(
            amount,
            &[
                feed.total,
                feed.flour,
                feed.water,
                main_flour,
                baseline_main_water,
                salt,
                total_flour,
                main_water,
                total_water,
                water_adjustment,
            ],
        )?;

        if main_water < 0.0 {
            let minimum = ceil1(feed.water / total_flour * 100.0);
            debug!(hydration, minimum, "目标含水量不可达");
            return Err(EngineError::UnreachableHydration {
                requested: hydration,
                minimum,
            });
        }

        let starter_feeding = match self.policy {
            FeedingPolicy::Forward => StarterFeeding::forward(amount, ratio),
            FeedingPolicy::Exact => StarterFeeding::exact(amount, ratio),
        };

        Ok(IngredientPlan {
            feeding_ratio: ratio.label.to_string(),
            feeding_policy: self.policy,
            starter_feeding,
            active_starter_amount: round1(active_starter),
            starter_for_bread: round1(active_starter),
            main_flour: round1(main_flour),
            main_water: round1(main_water),
            baseline_main_water: round1(baseline_main_water),
            water_adjustment: round1(water_adjustment),
            salt: round1(salt),
            total_flour: round1(total_flour),
            total_water: round1(total_water),
            target_hydration: hydration,
            final_hydration: round1(total_water / total_flour * 100.0),
        })
    }
}

fn ensure_amount(amount: f64) -> EngineResult<()> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidAmount(amount.to_string()))
    }
}

/// 派生量及其取整中间值 (×10) 都必须是有限值
fn ensure_representable(amount: f64, derived: &[f64]) -> EngineResult<()> {
    if derived.iter().all(|v| v.is_finite() && (v * 10.0).is_finite()) {
        Ok(())
    } else {
        debug!(amount, "派生量溢出");
        Err(EngineError::InvalidAmount(amount.to_string()))
    }
}
