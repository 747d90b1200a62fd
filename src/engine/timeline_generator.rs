// ==========================================
// 酸面包排程计算器 - 时间线生成引擎
// ==========================================
// 输入: 开始时间 + 喂养配比 (peak_hours)
// 输出: Timeline (逻辑顺序, 时间非递减) + 按日分组
// ==========================================
// 偏移链 (只有达峰时间取决于配比):
//   feed → +peak_hours → mix → +30m autolyse → 4 次折叠 (间隔 30m)
//   → 基础发酵 10h → 预整形 → +30m 松弛 → 整形 → 冷藏 8h
//   → 预热 → +30m 烘烤 → +2h 冷却
// ==========================================

use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

use crate::domain::ratio::FeedingRatio;
use crate::domain::timeline::{DaySchedule, Timeline, TimelineEntry};
use crate::domain::types::StepKind;

/// 水解时长 (分钟)
pub const AUTOLYSE_MINUTES: i64 = 30;

/// 折叠间隔 (分钟)
pub const FOLD_INTERVAL_MINUTES: i64 = 30;

/// 基础发酵时长 (小时), 与配比无关
pub const BULK_FERMENTATION_HOURS: i64 = 10;

/// 松弛时长 (分钟)
pub const BENCH_REST_MINUTES: i64 = 30;

/// 冷藏发酵时长 (小时)
pub const COLD_PROOF_HOURS: i64 = 8;

/// 预热时长 (分钟)
pub const PREHEAT_MINUTES: i64 = 30;

/// 出炉冷却时长 (小时)
pub const COOLING_HOURS: i64 = 2;

// ==========================================
// TimelineGenerator - 时间线生成引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct TimelineGenerator;

impl TimelineGenerator {
    pub fn new() -> Self {
        Self
    }

    /// 生成完整时间线
    #[instrument(skip(self, ratio), fields(ratio = ratio.label))]
    pub fn generate(&self, start: NaiveDateTime, ratio: &FeedingRatio) -> Timeline {
        let mut entries = Vec::with_capacity(StepKind::ALL.len());
        let mut push = |step: StepKind, at: NaiveDateTime| {
            entries.push(TimelineEntry { step, at });
            at
        };

        let feed = push(StepKind::FeedStarter, start);
        let peak = push(
            StepKind::PeakReady,
            feed + Duration::hours(ratio.peak_hours as i64),
        );
        let mix = push(StepKind::MixDough, peak);
        let autolyse_end = push(
            StepKind::AutolyseEnd,
            mix + Duration::minutes(AUTOLYSE_MINUTES),
        );

        let fold_1 = push(StepKind::Fold1, autolyse_end);
        let fold_2 = push(StepKind::Fold2, fold_1 + Duration::minutes(FOLD_INTERVAL_MINUTES));
        let fold_3 = push(StepKind::Fold3, fold_2 + Duration::minutes(FOLD_INTERVAL_MINUTES));
        let fold_4 = push(StepKind::Fold4, fold_3 + Duration::minutes(FOLD_INTERVAL_MINUTES));

        let bulk_start = push(StepKind::BulkFermentationStart, fold_4);
        let bulk_end = push(
            StepKind::BulkFermentationEnd,
            bulk_start + Duration::hours(BULK_FERMENTATION_HOURS),
        );

        let pre_shape = push(StepKind::PreShape, bulk_end);
        let bench_rest_end = push(
            StepKind::BenchRestEnd,
            pre_shape + Duration::minutes(BENCH_REST_MINUTES),
        );
        let final_shape = push(StepKind::FinalShape, bench_rest_end);
        let cold_proof_start = push(StepKind::ColdProofStart, final_shape);

        let ready_to_bake = push(
            StepKind::ReadyToBake,
            cold_proof_start + Duration::hours(COLD_PROOF_HOURS),
        );
        let preheat = push(StepKind::PreheatOven, ready_to_bake);
        let bake = push(StepKind::Bake, preheat + Duration::minutes(PREHEAT_MINUTES));
        let cooling_done = push(StepKind::CoolingDone, bake + Duration::hours(COOLING_HOURS));

        debug!(start = %start, end = %cooling_done, "时间线生成完成");
        Timeline::new(entries)
    }

    /// 按日历日期分组
    ///
    /// 日期升序; 同一日期内按时间升序, 同一时刻保持工序逻辑顺序
    pub fn group_by_day(&self, timeline: &Timeline) -> Vec<DaySchedule> {
        let mut days: BTreeMap<NaiveDate, Vec<TimelineEntry>> = BTreeMap::new();
        for entry in &timeline.entries {
            days.entry(entry.at.date()).or_default().push(*entry);
        }

        days.into_iter()
            .map(|(date, mut entries)| {
                // sort_by_key 为稳定排序
                entries.sort_by_key(|e| e.at);
                DaySchedule { date, entries }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ratio_table::RatioTable;

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_generate_offsets_1_5_5() {
        let ratio = RatioTable::lookup("1:5:5").unwrap();
        let timeline = TimelineGenerator::new().generate(at(17, 8, 0), ratio);

        let expected = [
            (StepKind::FeedStarter, at(17, 8, 0)),
            (StepKind::PeakReady, at(17, 20, 0)),
            (StepKind::MixDough, at(17, 20, 0)),
            (StepKind::AutolyseEnd, at(17, 20, 30)),
            (StepKind::Fold1, at(17, 20, 30)),
            (StepKind::Fold2, at(17, 21, 0)),
            (StepKind::Fold3, at(17, 21, 30)),
            (StepKind::Fold4, at(17, 22, 0)),
            (StepKind::BulkFermentationStart, at(17, 22, 0)),
            (StepKind::BulkFermentationEnd, at(18, 8, 0)),
            (StepKind::PreShape, at(18, 8, 0)),
            (StepKind::BenchRestEnd, at(18, 8, 30)),
            (StepKind::FinalShape, at(18, 8, 30)),
            (StepKind::ColdProofStart, at(18, 8, 30)),
            (StepKind::ReadyToBake, at(18, 16, 30)),
            (StepKind::PreheatOven, at(18, 16, 30)),
            (StepKind::Bake, at(18, 17, 0)),
            (StepKind::CoolingDone, at(18, 19, 0)),
        ];

        assert_eq!(timeline.len(), expected.len());
        for (entry, (step, time)) in timeline.entries.iter().zip(expected) {
            assert_eq!(entry.step, step);
            assert_eq!(entry.at, time, "step {}", step);
        }
    }

    #[test]
    fn test_generate_order_for_all_ratios() {
        let generator = TimelineGenerator::new();
        for ratio in RatioTable::all() {
            let timeline = generator.generate(at(17, 23, 45), ratio);
            assert!(timeline.is_chronological());
            let steps: Vec<StepKind> = timeline.entries.iter().map(|e| e.step).collect();
            assert_eq!(steps, StepKind::ALL.to_vec());
            assert_eq!(
                timeline.time_of(StepKind::PeakReady).unwrap() - timeline.start().unwrap(),
                Duration::hours(ratio.peak_hours as i64)
            );
        }
    }

    #[test]
    fn test_group_by_day_three_days() {
        let ratio = RatioTable::lookup("1:5:5").unwrap();
        let generator = TimelineGenerator::new();
        let timeline = generator.generate(at(17, 20, 0), ratio);
        let days = generator.group_by_day(&timeline);

        assert_eq!(days.len(), 3);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        assert_eq!(days[2].date, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        assert_eq!(days[0].entries.len(), 1);

        let total: usize = days.iter().map(|d| d.entries.len()).sum();
        assert_eq!(total, StepKind::ALL.len());

        for day in &days {
            assert!(day.entries.windows(2).all(|w| w[0].at <= w[1].at));
            assert!(day.entries.windows(2).all(|w| w[0].at < w[1].at || w[0].step < w[1].step));
        }
    }
}
