// ==========================================
// 酸面包排程计算器 - 排程 API
// ==========================================
// 职责: 校验请求 → 引擎计算 → 组装响应
// 无状态: 每次请求独立计算, 不持久化
// ==========================================

use chrono::NaiveDateTime;
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::dto::{
    DayGroupDto, RatioInfoDto, ScheduleRequest, ScheduleResponse, StepDto, TimelinePointDto,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::step_display::{step_description, step_name};
use crate::api::validator::{RequestValidator, ValidatedRequest};
use crate::config::planner_config::PlannerConfig;
use crate::domain::ratio::FeedingRatio;
use crate::engine::clock::{Clock, SystemClock};
use crate::engine::orchestrator::{BakeSchedule, ScheduleOrchestrator};
use crate::engine::ratio_table::RatioTable;
use crate::engine::time_parser::format_time_12h;
use crate::i18n::{resolve_locale, t};

const ISO_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_LABEL_FORMAT: &str = "%A, %B %d";

// ==========================================
// ScheduleApi - 排程 API
// ==========================================
pub struct ScheduleApi {
    config: PlannerConfig,
    orchestrator: ScheduleOrchestrator,
}

impl ScheduleApi {
    /// 创建 API 实例（系统时钟）
    pub fn new(config: PlannerConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// 创建 API 实例（注入时钟）
    pub fn with_clock(config: PlannerConfig, clock: Arc<dyn Clock>) -> Self {
        let orchestrator = ScheduleOrchestrator::with_clock(config.feeding_policy, clock);
        Self {
            config,
            orchestrator,
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// 生成排程
    ///
    /// # 错误
    /// - InvalidRatio / InvalidAmount / InvalidHydration / InvalidTimeFormat / InvalidStartDate
    /// - UnreachableHydration
    pub fn generate(&self, request: &ScheduleRequest) -> ApiResult<ScheduleResponse> {
        let validated = match RequestValidator::new(&self.config.defaults).validate(request) {
            Ok(v) => v,
            Err(e) => {
                warn!(code = e.code(), error = %e, "请求校验失败");
                return Err(e);
            }
        };

        let schedule = self
            .orchestrator
            .plan(&validated.plan_input())
            .map_err(ApiError::from)
            .inspect_err(|e| warn!(code = e.code(), error = %e, "排程计算失败"))?;

        info!(
            ratio = validated.ratio.label,
            days = schedule.days.len(),
            locale = %validated.locale,
            "排程生成成功"
        );

        Ok(build_response(&validated, schedule))
    }

    /// 全部喂养配比（表顺序）
    pub fn list_feeding_ratios(&self, locale: &str) -> Vec<RatioInfoDto> {
        let locale = resolve_locale(locale);
        RatioTable::all()
            .iter()
            .map(|ratio| ratio_info(ratio, &locale))
            .collect()
    }
}

// ==========================================
// 响应组装
// ==========================================

fn ratio_info(ratio: &FeedingRatio, locale: &str) -> RatioInfoDto {
    RatioInfoDto {
        label: ratio.label.to_string(),
        starter_parts: ratio.starter_parts,
        flour_parts: ratio.flour_parts,
        water_parts: ratio.water_parts,
        peak_hours: ratio.peak_hours,
        description: t(&ratio.description_key(), locale),
    }
}

fn iso(at: &NaiveDateTime) -> String {
    at.format(ISO_DATETIME_FORMAT).to_string()
}

fn build_response(validated: &ValidatedRequest, schedule: BakeSchedule) -> ScheduleResponse {
    let locale = validated.locale.as_str();

    let timeline = schedule
        .timeline
        .entries
        .iter()
        .map(|entry| TimelinePointDto {
            step: entry.step.as_str().to_string(),
            datetime: iso(&entry.at),
        })
        .collect();

    let days = schedule
        .days
        .iter()
        .map(|day| DayGroupDto {
            date: day.date.format("%Y-%m-%d").to_string(),
            date_label: day.date.format(DATE_LABEL_FORMAT).to_string(),
            steps: day
                .entries
                .iter()
                .map(|entry| StepDto {
                    key: entry.step.as_str().to_string(),
                    step: step_name(entry.step, locale),
                    time: format_time_12h(&entry.at),
                    datetime: iso(&entry.at),
                    description: step_description(entry.step, locale),
                })
                .collect(),
        })
        .collect();

    ScheduleResponse {
        success: true,
        feeding_ratio: schedule.ratio.label.to_string(),
        feeding_ratio_info: ratio_info(schedule.ratio, locale),
        ingredients: schedule.ingredients,
        timeline,
        days,
        start_time: format_time_12h(&validated.start_time),
        hydration: validated.hydration,
        flour_type: validated.flour_type.clone(),
        notes: validated.notes.clone(),
        locale: validated.locale.clone(),
    }
}
