// ==========================================
// 酸面包排程计算器 - 请求校验器
// ==========================================
// 职责: 合并缺省值 + 校验全部输入, 在任何计算之前完成
// 顺序: 配比 → 酵种量 → 含水量 → 开始时间 → 开始日期
// ==========================================

use chrono::{NaiveDate, NaiveTime};
use serde_json::Value;

use crate::api::dto::ScheduleRequest;
use crate::api::error::{ApiError, ApiResult};
use crate::config::planner_config::RequestDefaults;
use crate::domain::ratio::FeedingRatio;
use crate::engine::orchestrator::PlanInput;
use crate::engine::ratio_table::RatioTable;
use crate::engine::time_parser::parse_start_time;
use crate::i18n::resolve_locale;

/// 校验后的请求
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub starter_amount: f64,
    pub ratio: &'static FeedingRatio,
    pub start_time: NaiveTime,
    pub start_date: Option<NaiveDate>,
    pub hydration: i32,
    pub flour_type: String,
    pub notes: String,
    pub locale: String,
}

impl ValidatedRequest {
    pub fn plan_input(&self) -> PlanInput {
        PlanInput {
            starter_amount: self.starter_amount,
            ratio: self.ratio,
            start_time: self.start_time,
            start_date: self.start_date,
            hydration: self.hydration,
        }
    }
}

// ==========================================
// RequestValidator - 请求校验器
// ==========================================
pub struct RequestValidator<'a> {
    defaults: &'a RequestDefaults,
}

impl<'a> RequestValidator<'a> {
    pub fn new(defaults: &'a RequestDefaults) -> Self {
        Self { defaults }
    }

    /// 校验请求
    ///
    /// 任一字段无效即返回错误, 不做部分计算
    pub fn validate(&self, request: &ScheduleRequest) -> ApiResult<ValidatedRequest> {
        let ratio_label = request
            .feeding_ratio
            .as_deref()
            .unwrap_or(&self.defaults.feeding_ratio);
        let ratio = RatioTable::lookup(ratio_label)?;

        let starter_amount =
            parse_amount(request.starter_amount.as_ref(), self.defaults.starter_amount)?;
        let hydration = parse_hydration(request.hydration.as_ref(), self.defaults.hydration)?;

        let start_time_raw = match request.start_time.as_ref() {
            None => self.defaults.start_time.clone(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(other) => return Err(ApiError::InvalidTimeFormat(other.to_string())),
        };
        let start_time = parse_start_time(&start_time_raw)?;

        let start_date = match request.start_date.as_deref() {
            None => None,
            Some(raw) => Some(
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .map_err(|_| ApiError::InvalidStartDate(raw.to_string()))?,
            ),
        };

        let locale = resolve_locale(request.locale.as_deref().unwrap_or(&self.defaults.locale));

        Ok(ValidatedRequest {
            starter_amount,
            ratio,
            start_time,
            start_date,
            hydration,
            flour_type: request
                .flour_type
                .clone()
                .unwrap_or_else(|| self.defaults.flour_type.clone()),
            notes: request
                .notes
                .clone()
                .unwrap_or_else(|| self.defaults.notes.clone()),
            locale,
        })
    }
}

/// 酵种量: 正的有限数, 接受数字或数字字符串
fn parse_amount(value: Option<&Value>, default: f64) -> ApiResult<f64> {
    let amount = match value {
        None => default,
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| ApiError::InvalidAmount(n.to_string()))?,
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| ApiError::InvalidAmount(format!("'{}'", s)))?,
        Some(other) => return Err(ApiError::InvalidAmount(other.to_string())),
    };

    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(ApiError::InvalidAmount(amount.to_string()))
    }
}

/// 含水量: 整数百分比, 接受整数或整数字符串 (70.0 视为 70)
fn parse_hydration(value: Option<&Value>, default: i32) -> ApiResult<i32> {
    let invalid = |raw: String| ApiError::InvalidHydration(raw);

    match value {
        None => Ok(default),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                return i32::try_from(i).map_err(|_| invalid(n.to_string()));
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() <= i32::MAX as f64 => Ok(f as i32),
                _ => Err(invalid(n.to_string())),
            }
        }
        Some(Value::String(s)) => s.trim().parse::<i32>().map_err(|_| invalid(format!("'{}'", s))),
        Some(other) => Err(invalid(other.to_string())),
    }
}
