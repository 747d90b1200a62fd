// ==========================================
// 酸面包排程计算器 - 领域类型定义
// ==========================================
// 工序类型 (StepKind) + 喂养口径 (FeedingPolicy)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 工序类型 (Step Kind)
// ==========================================
// 顺序即逻辑顺序: 喂养 → 峰值 → 和面 → 水解 → 折叠 → 基础发酵 → 整形 → 冷藏 → 烘烤 → 冷却
// 同一时刻的多个工序按此顺序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    FeedStarter,
    PeakReady,
    MixDough,
    AutolyseEnd,
    #[serde(rename = "fold_1")]
    Fold1,
    #[serde(rename = "fold_2")]
    Fold2,
    #[serde(rename = "fold_3")]
    Fold3,
    #[serde(rename = "fold_4")]
    Fold4,
    BulkFermentationStart,
    BulkFermentationEnd,
    PreShape,
    BenchRestEnd,
    FinalShape,
    ColdProofStart,
    ReadyToBake,
    PreheatOven,
    Bake,
    CoolingDone,
}

impl StepKind {
    /// 全部工序（逻辑顺序）
    pub const ALL: [StepKind; 18] = [
        StepKind::FeedStarter,
        StepKind::PeakReady,
        StepKind::MixDough,
        StepKind::AutolyseEnd,
        StepKind::Fold1,
        StepKind::Fold2,
        StepKind::Fold3,
        StepKind::Fold4,
        StepKind::BulkFermentationStart,
        StepKind::BulkFermentationEnd,
        StepKind::PreShape,
        StepKind::BenchRestEnd,
        StepKind::FinalShape,
        StepKind::ColdProofStart,
        StepKind::ReadyToBake,
        StepKind::PreheatOven,
        StepKind::Bake,
        StepKind::CoolingDone,
    ];

    /// 工序标识（用于 i18n 键与响应中的 key 字段）
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::FeedStarter => "feed_starter",
            StepKind::PeakReady => "peak_ready",
            StepKind::MixDough => "mix_dough",
            StepKind::AutolyseEnd => "autolyse_end",
            StepKind::Fold1 => "fold_1",
            StepKind::Fold2 => "fold_2",
            StepKind::Fold3 => "fold_3",
            StepKind::Fold4 => "fold_4",
            StepKind::BulkFermentationStart => "bulk_fermentation_start",
            StepKind::BulkFermentationEnd => "bulk_fermentation_end",
            StepKind::PreShape => "pre_shape",
            StepKind::BenchRestEnd => "bench_rest_end",
            StepKind::FinalShape => "final_shape",
            StepKind::ColdProofStart => "cold_proof_start",
            StepKind::ReadyToBake => "ready_to_bake",
            StepKind::PreheatOven => "preheat_oven",
            StepKind::Bake => "bake",
            StepKind::CoolingDone => "cooling_done",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StepKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        StepKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == key)
            .ok_or_else(|| format!("未知工序: {}", s))
    }
}

// ==========================================
// 喂养口径 (Feeding Policy)
// ==========================================
// 一个部署只使用一种口径,不混用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedingPolicy {
    /// 输入量 = 喂养前已有酵种,按配比加粉加水
    #[default]
    Forward,
    /// 输入量 = 喂养后期望的活性酵种总量,按份数拆分,不浪费
    Exact,
}

impl FeedingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedingPolicy::Forward => "forward",
            FeedingPolicy::Exact => "exact",
        }
    }
}

impl fmt::Display for FeedingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FeedingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "forward" => Ok(FeedingPolicy::Forward),
            "exact" | "no_waste" | "no-waste" => Ok(FeedingPolicy::Exact),
            other => Err(format!("未知喂养口径: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_kind_order_matches_all() {
        let mut sorted = StepKind::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, StepKind::ALL.to_vec());
    }

    #[test]
    fn test_step_kind_from_str() {
        assert_eq!("fold_3".parse::<StepKind>(), Ok(StepKind::Fold3));
        assert_eq!(" Bake ".parse::<StepKind>(), Ok(StepKind::Bake));
        assert!("extra_rest".parse::<StepKind>().is_err());
    }

    #[test]
    fn test_step_kind_serde_matches_key() {
        for kind in StepKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_feeding_policy_parse() {
        assert_eq!("forward".parse::<FeedingPolicy>(), Ok(FeedingPolicy::Forward));
        assert_eq!("No-Waste".parse::<FeedingPolicy>(), Ok(FeedingPolicy::Exact));
        assert!("backward".parse::<FeedingPolicy>().is_err());
        assert_eq!(FeedingPolicy::default(), FeedingPolicy::Forward);
    }
}
