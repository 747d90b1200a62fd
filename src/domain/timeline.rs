// ==========================================
// 酸面包排程计算器 - 时间线
// ==========================================
// 工序 + 绝对时间 (本地墙钟时间, 无时区)
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::StepKind;

/// 时间线条目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub step: StepKind,
    pub at: NaiveDateTime,
}

/// 时间线（按工序逻辑顺序）
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Timeline {
    pub entries: Vec<TimelineEntry>,
}

impl Timeline {
    pub fn new(entries: Vec<TimelineEntry>) -> Self {
        Self { entries }
    }

    /// 查询某工序的时间
    pub fn time_of(&self, step: StepKind) -> Option<NaiveDateTime> {
        self.entries.iter().find(|e| e.step == step).map(|e| e.at)
    }

    pub fn start(&self) -> Option<NaiveDateTime> {
        self.entries.first().map(|e| e.at)
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        self.entries.last().map(|e| e.at)
    }

    /// 时间是否按逻辑顺序非递减
    pub fn is_chronological(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].at <= w[1].at)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 单日工序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub entries: Vec<TimelineEntry>,
}
