// ==========================================
// 酸面包排程计算器 - 时钟
// ==========================================
// 调用方未指定开始日期时才读取"今天"
// 测试注入 FixedClock 保证结果可复现
// ==========================================

use chrono::NaiveDate;

/// 日期来源
pub trait Clock: Send + Sync {
    /// 本地日期
    fn today(&self) -> NaiveDate;
}

/// 系统本地时钟
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// 固定日期时钟
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
