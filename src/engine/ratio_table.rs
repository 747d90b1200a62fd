// ==========================================
// 酸面包排程计算器 - 喂养配比表
// ==========================================
// 六种配比,只读静态数据
// 约束: 份数为正; 总份数越大发酵越慢 (peak_hours 非递减)
// ==========================================

use crate::domain::ratio::FeedingRatio;
use crate::engine::error::{EngineError, EngineResult};

/// 默认配比
pub const DEFAULT_RATIO_LABEL: &str = "1:5:5";

static FEEDING_RATIOS: [FeedingRatio; 6] = [
    FeedingRatio {
        label: "1:1:1",
        starter_parts: 1,
        flour_parts: 1,
        water_parts: 1,
        peak_hours: 5,
        description: "Fast (4-6h), same-day",
    },
    FeedingRatio {
        label: "1:2:2",
        starter_parts: 1,
        flour_parts: 2,
        water_parts: 2,
        peak_hours: 7,
        description: "Moderate (6-8h)",
    },
    FeedingRatio {
        label: "1:3:3",
        starter_parts: 1,
        flour_parts: 3,
        water_parts: 3,
        peak_hours: 9,
        description: "Standard (8-10h)",
    },
    FeedingRatio {
        label: "1:4:4",
        starter_parts: 1,
        flour_parts: 4,
        water_parts: 4,
        peak_hours: 11,
        description: "Professional (10-12h)",
    },
    FeedingRatio {
        label: "1:5:5",
        starter_parts: 1,
        flour_parts: 5,
        water_parts: 5,
        peak_hours: 12,
        description: "Overnight (12-14h)",
    },
    FeedingRatio {
        label: "1:10:10",
        starter_parts: 1,
        flour_parts: 10,
        water_parts: 10,
        peak_hours: 20,
        description: "Extended (16-24h)",
    },
];

// ==========================================
// RatioTable - 配比查询
// ==========================================
pub struct RatioTable;

impl RatioTable {
    /// 按标签查询配比
    ///
    /// 标签前后空白会被忽略,其余必须精确匹配
    pub fn lookup(label: &str) -> EngineResult<&'static FeedingRatio> {
        let key = label.trim();
        FEEDING_RATIOS
            .iter()
            .find(|r| r.label == key)
            .ok_or_else(|| EngineError::InvalidRatio(label.to_string()))
    }

    /// 全部配比（表顺序）
    pub fn all() -> &'static [FeedingRatio] {
        &FEEDING_RATIOS
    }

    pub fn contains(label: &str) -> bool {
        Self::lookup(label).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_all_labels() {
        let expected = [
            ("1:1:1", 1, 1, 1, 5, "Fast (4-6h), same-day"),
            ("1:2:2", 1, 2, 2, 7, "Moderate (6-8h)"),
            ("1:3:3", 1, 3, 3, 9, "Standard (8-10h)"),
            ("1:4:4", 1, 4, 4, 11, "Professional (10-12h)"),
            ("1:5:5", 1, 5, 5, 12, "Overnight (12-14h)"),
            ("1:10:10", 1, 10, 10, 20, "Extended (16-24h)"),
        ];

        for (label, s, f, w, peak, desc) in expected {
            let ratio = RatioTable::lookup(label).unwrap();
            assert_eq!(ratio.label, label);
            assert_eq!(ratio.starter_parts, s);
            assert_eq!(ratio.flour_parts, f);
            assert_eq!(ratio.water_parts, w);
            assert_eq!(ratio.peak_hours, peak);
            assert_eq!(ratio.description, desc);
        }
        assert_eq!(RatioTable::all().len(), 6);
    }

    #[test]
    fn test_lookup_unknown_label() {
        for label in ["1:6:6", "", "1:5", "1 : 5 : 5", "one"] {
            match RatioTable::lookup(label) {
                Err(EngineError::InvalidRatio(l)) => assert_eq!(l, label),
                other => panic!("Expected InvalidRatio for {:?}, got {:?}", label, other),
            }
        }
    }

    #[test]
    fn test_lookup_trims_whitespace() {
        assert_eq!(RatioTable::lookup(" 1:2:2 ").unwrap().peak_hours, 7);
    }

    #[test]
    fn test_peak_hours_monotonic_with_total_parts() {
        let mut ratios = RatioTable::all().to_vec();
        ratios.sort_by_key(|r| r.total_parts());
        for pair in ratios.windows(2) {
            assert!(pair[0].starter_parts > 0 && pair[0].flour_parts > 0 && pair[0].water_parts > 0);
            assert!(pair[0].peak_hours > 0);
            assert!(pair[0].peak_hours <= pair[1].peak_hours);
        }
    }

    #[test]
    fn test_default_label_is_known() {
        assert!(RatioTable::contains(DEFAULT_RATIO_LABEL));
    }
}
