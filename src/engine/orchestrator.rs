// ==========================================
// 酸面包排程计算器 - 引擎编排器
// ==========================================
// 用途: 串联配料计算与时间线生成
// 流程: 配料 → 开始时刻 → 时间线 → 按日分组
// 无共享可变状态, 相同输入 + 相同时钟 → 相同输出
// ==========================================

use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::ingredients::IngredientPlan;
use crate::domain::ratio::FeedingRatio;
use crate::domain::timeline::{DaySchedule, Timeline};
use crate::domain::types::FeedingPolicy;
use crate::engine::clock::{Clock, SystemClock};
use crate::engine::error::EngineResult;
use crate::engine::ingredient_calculator::IngredientCalculator;
use crate::engine::timeline_generator::TimelineGenerator;

// ==========================================
// PlanInput - 已校验的输入
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct PlanInput {
    pub starter_amount: f64,
    pub ratio: &'static FeedingRatio,
    pub start_time: NaiveTime,
    pub start_date: Option<NaiveDate>,
    pub hydration: i32,
}

// ==========================================
// BakeSchedule - 排程结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct BakeSchedule {
    pub ratio: &'static FeedingRatio,
    pub ingredients: IngredientPlan,
    pub timeline: Timeline,
    pub days: Vec<DaySchedule>,
}

// ==========================================
// ScheduleOrchestrator - 引擎编排器
// ==========================================
pub struct ScheduleOrchestrator {
    calculator: IngredientCalculator,
    generator: TimelineGenerator,
    clock: Arc<dyn Clock>,
}

impl ScheduleOrchestrator {
    /// 创建编排器（系统时钟）
    pub fn new(policy: FeedingPolicy) -> Self {
        Self::with_clock(policy, Arc::new(SystemClock))
    }

    /// 创建编排器（注入时钟）
    pub fn with_clock(policy: FeedingPolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            calculator: IngredientCalculator::new(policy),
            generator: TimelineGenerator::new(),
            clock,
        }
    }

    pub fn policy(&self) -> FeedingPolicy {
        self.calculator.policy()
    }

    /// 执行完整排程计算
    ///
    /// 任一步失败即整体失败, 不返回部分结果
    pub fn plan(&self, input: &PlanInput) -> EngineResult<BakeSchedule> {
        info!(
            ratio = input.ratio.label,
            starter_amount = input.starter_amount,
            hydration = input.hydration,
            policy = %self.policy(),
            "开始计算排程"
        );

        // ==========================================
        // 步骤1: 配料计算
        // ==========================================
        debug!("步骤1: 配料计算");
        let ingredients =
            self.calculator
                .calculate(input.starter_amount, input.ratio, input.hydration)?;

        // ==========================================
        // 步骤2: 时间线
        // ==========================================
        debug!("步骤2: 生成时间线");
        let start_date = input.start_date.unwrap_or_else(|| self.clock.today());
        let start = start_date.and_time(input.start_time);
        let timeline = self.generator.generate(start, input.ratio);

        // ==========================================
        // 步骤3: 按日分组
        // ==========================================
        debug!("步骤3: 按日分组");
        let days = self.generator.group_by_day(&timeline);

        info!(
            days = days.len(),
            steps = timeline.len(),
            total_flour = ingredients.total_flour,
            "排程计算完成"
        );

        Ok(BakeSchedule {
            ratio: input.ratio,
            ingredients,
            timeline,
            days,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::clock::FixedClock;
    use crate::engine::error::EngineError;
    use crate::engine::ratio_table::RatioTable;

    fn orchestrator() -> ScheduleOrchestrator {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        ScheduleOrchestrator::with_clock(FeedingPolicy::Forward, Arc::new(FixedClock::new(today)))
    }

    fn input(hydration: i32, start_date: Option<NaiveDate>) -> PlanInput {
        PlanInput {
            starter_amount: 50.0,
            ratio: RatioTable::lookup("1:5:5").unwrap(),
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            start_date,
            hydration,
        }
    }

    #[test]
    fn test_plan_uses_clock_when_date_missing() {
        let schedule = orchestrator().plan(&input(70, None)).unwrap();
        assert_eq!(
            schedule.timeline.start().unwrap().date(),
            NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
        );
        assert_eq!(schedule.days.len(), 2);
        assert_eq!(schedule.ingredients.starter_feeding.total_after_feeding, 550.0);
    }

    #[test]
    fn test_plan_prefers_explicit_date() {
        let date = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        let schedule = orchestrator().plan(&input(70, Some(date))).unwrap();
        assert_eq!(schedule.days[0].date, date);
    }

    #[test]
    fn test_plan_is_idempotent() {
        let o = orchestrator();
        assert_eq!(o.plan(&input(72, None)).unwrap(), o.plan(&input(72, None)).unwrap());
    }

    #[test]
    fn test_plan_fails_whole_on_unreachable_hydration() {
        let result = orchestrator().plan(&input(5, None));
        assert!(matches!(result, Err(EngineError::UnreachableHydration { .. })));
    }
}
