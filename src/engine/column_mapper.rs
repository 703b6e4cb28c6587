// ==========================================
// 納品数シート作成 - 列映射引擎
// ==========================================
// 职责: 交货日 → 曜日列区间 → 待提取列清单
// 输入: DeliveryDate
// 输出: ColumnSelection（固定 4 列 + 曜日区间全部列）
// ==========================================

use crate::config::layout::{FIXED_COLUMNS, QUANTITY_LABEL};
use crate::config::{PrepareConfig, WeekdayRange};
use crate::domain::column::column_span;
use crate::domain::{ColumnSelection, DeliveryDate};
use crate::error::{PrepareError, PrepareResult};

// ==========================================
// ColumnMapper - 列映射引擎
// ==========================================
pub struct ColumnMapper<'a> {
    config: &'a PrepareConfig,
}

impl<'a> ColumnMapper<'a> {
    pub fn new(config: &'a PrepareConfig) -> Self {
        Self { config }
    }

    /// 解析交货日对应的列清单
    ///
    /// # 返回
    /// - Ok(ColumnSelection): 固定列 A/B/AN/AQ + 区间内全部列（含两端）
    /// - Err(UnsupportedWeekday): 日曜或未配置的曜日
    pub fn resolve(&self, date: DeliveryDate) -> PrepareResult<ColumnSelection> {
        let range = self.weekday_range(date)?;

        let day_range = column_span(&range.start, &range.end).ok_or_else(|| {
            PrepareError::Config(format!("列区间非法: {}:{}", range.start, range.end))
        })?;

        let fixed = FIXED_COLUMNS
            .iter()
            .map(|(letter, _)| letter.to_string())
            .collect();

        let selection = ColumnSelection::new(fixed, day_range);
        tracing::info!(
            "交货日 {} ({:?}) → 列区间 {}:{}，共 {} 列",
            date,
            date.weekday(),
            range.start,
            range.end,
            selection.len()
        );
        tracing::debug!("字段: {:?}", column_labels(&selection));
        Ok(selection)
    }

    /// 查询交货日所在曜日的列区间
    pub fn weekday_range(&self, date: DeliveryDate) -> PrepareResult<&'a WeekdayRange> {
        self.config
            .range_for(date.weekday())
            .ok_or(PrepareError::UnsupportedWeekday {
                date: date.date(),
                weekday: date.weekday(),
            })
    }
}

/// 目标表列顺序的字段名（A 列起）
///
/// 商品コード / 商品名 / 曜日区间（末列为「納品数」）/ 箱/こ/不 / 荷受
pub fn column_labels(selection: &ColumnSelection) -> Vec<String> {
    let label = |letter: &String| {
        FIXED_COLUMNS
            .iter()
            .find(|(l, _)| l == letter)
            .map(|(_, label)| label.to_string())
            .unwrap_or_else(|| letter.clone())
    };
    // 商品コード/商品名 在区间之前，其余固定列在区间之后
    let fixed = selection.fixed_columns();
    let (leading, trailing) = fixed.split_at(fixed.len().min(2));

    let last = selection.day_range().len().saturating_sub(1);
    let range = selection
        .day_range()
        .iter()
        .enumerate()
        .map(|(i, letter)| {
            if i == last {
                QUANTITY_LABEL.to_string()
            } else {
                letter.clone()
            }
        });

    leading
        .iter()
        .map(label)
        .chain(range)
        .chain(trailing.iter().map(label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, Weekday};

    fn date(y: i32, m: u32, d: u32) -> DeliveryDate {
        DeliveryDate::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_monday_selects_h_to_m() {
        let config = PrepareConfig::default();
        let mapper = ColumnMapper::new(&config);

        // 2025-06-02 为月曜
        let selection = mapper.resolve(date(2025, 6, 2)).unwrap();
        assert_eq!(
            selection.columns(),
            vec!["A", "B", "AN", "AQ", "H", "I", "J", "K", "L", "M"]
        );
        assert_eq!(selection.quantity_column(), Some("M"));
    }

    #[test]
    fn test_every_supported_weekday_has_fixed_prefix() {
        let config = PrepareConfig::default();
        let mapper = ColumnMapper::new(&config);

        let start = date(2025, 6, 2);
        for offset in 0..6 {
            let day = DeliveryDate::new(start.date() + Duration::days(offset));
            let selection = mapper.resolve(day).unwrap();
            assert_eq!(selection.fixed_columns().len(), 4);
            assert_eq!(selection.day_range().len(), 6);
            assert_eq!(selection.len(), 10);
        }
    }

    #[test]
    fn test_saturday_ends_at_al() {
        let config = PrepareConfig::default();
        let mapper = ColumnMapper::new(&config);

        let selection = mapper.resolve(date(2025, 6, 7)).unwrap();
        assert_eq!(selection.day_range().first().map(String::as_str), Some("AG"));
        assert_eq!(selection.quantity_column(), Some("AL"));
    }

    #[test]
    fn test_sunday_rejected() {
        let config = PrepareConfig::default();
        let mapper = ColumnMapper::new(&config);

        // 连续多个日曜
        let mut sunday = date(2025, 6, 1);
        for _ in 0..10 {
            assert_eq!(sunday.weekday(), Weekday::Sun);
            let err = mapper.resolve(sunday).unwrap_err();
            assert!(matches!(
                err,
                PrepareError::UnsupportedWeekday {
                    weekday: Weekday::Sun,
                    ..
                }
            ));
            sunday = DeliveryDate::new(sunday.date() + Duration::days(7));
        }
    }

    #[test]
    fn test_unmapped_weekday_rejected() {
        let mut config = PrepareConfig::default();
        config.weekday_ranges.retain(|r| r.weekday != Weekday::Wed);
        let mapper = ColumnMapper::new(&config);

        let err = mapper.resolve(date(2025, 6, 4)).unwrap_err();
        assert!(matches!(err, PrepareError::UnsupportedWeekday { .. }));
    }

    #[test]
    fn test_column_labels() {
        let config = PrepareConfig::default();
        let selection = ColumnMapper::new(&config).resolve(date(2025, 6, 2)).unwrap();
        assert_eq!(
            column_labels(&selection),
            vec!["商品コード", "商品名", "H", "I", "J", "K", "L", "納品数", "箱/こ/不", "荷受"]
        );
    }
}
