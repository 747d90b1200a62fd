// ==========================================
// 酸面包排程计算器 - 喂养配比
// ==========================================
// 静态只读数据,按配比标签 (如 "1:5:5") 索引
// ==========================================

use serde::Serialize;

/// 喂养配比 (酵种:面粉:水)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeedingRatio {
    /// 配比标签
    pub label: &'static str,

    /// 酵种份数
    pub starter_parts: u32,

    /// 面粉份数
    pub flour_parts: u32,

    /// 水份数
    pub water_parts: u32,

    /// 达到活性峰值所需小时数
    pub peak_hours: u32,

    /// 展示说明
    pub description: &'static str,
}

impl FeedingRatio {
    /// 总份数
    pub fn total_parts(&self) -> u32 {
        self.starter_parts + self.flour_parts + self.water_parts
    }

    /// i18n 说明键
    pub fn description_key(&self) -> String {
        format!("ratios.{}", self.label.replace(':', "_"))
    }
}
