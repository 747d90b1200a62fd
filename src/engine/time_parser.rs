// ==========================================
// 酸面包排程计算器 - 开始时间解析
// ==========================================
// 语法 (12 小时制, 大小写不敏感):
//   "h:mm [AM|PM]" 或 "h [AM|PM]"
// 省略 AM/PM 时: 小时在 [6, 11] 视为 AM, 其余视为 PM
//   "8" → 08:00, "6" → 06:00, "1" → 13:00 ("1" 本身有歧义, 固定按 PM)
// ==========================================

use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::OnceLock;

use crate::engine::error::{EngineError, EngineResult};

fn time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d{1,2})(?::(\d{2}))?\s*(AM|PM|A\.M\.|P\.M\.)?$")
            .expect("time pattern is a valid regex")
    })
}

/// 省略 AM/PM 时的推断规则
pub fn infer_meridiem_is_pm(hour: u32) -> bool {
    !(6..=11).contains(&hour)
}

/// 解析 12 小时制时间字符串
pub fn parse_start_time(input: &str) -> EngineResult<NaiveTime> {
    let invalid = || EngineError::InvalidTimeFormat(input.to_string());

    let normalized = input.trim().to_uppercase();
    let caps = time_pattern().captures(&normalized).ok_or_else(invalid)?;

    let hour: u32 = caps[1].parse().map_err(|_| invalid())?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().map_err(|_| invalid())?,
        None => 0,
    };

    if !(1..=12).contains(&hour) || minute > 59 {
        return Err(invalid());
    }

    let is_pm = match caps.get(3).map(|m| m.as_str()) {
        Some(suffix) => suffix.starts_with('P'),
        None => infer_meridiem_is_pm(hour),
    };

    // 12 AM = 00 点, 12 PM = 12 点
    let hour_24 = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };

    NaiveTime::from_hms_opt(hour_24, minute, 0).ok_or_else(invalid)
}

/// 格式化为 12 小时制 ("8:00 AM", 无前导零)
pub fn format_time_12h(time: &impl Timelike) -> String {
    let (is_pm, hour) = time.hour12();
    format!(
        "{}:{:02} {}",
        hour,
        time.minute(),
        if is_pm { "PM" } else { "AM" }
    )
}
