// ==========================================
// 納品数シート作成 - 领域类型定义
// ==========================================
// 职责: 单元格值 / 交货日
// ==========================================

use crate::error::{PrepareError, PrepareResult};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 单元格值 (Cell Value)
// ==========================================
// 源表读取与目标表写入共用
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// 是否视为缺失（空单元格或仅含空白的文本）
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// 数值零判定：仅数值单元格且等于 0
    pub fn is_zero(&self) -> bool {
        matches!(self, CellValue::Number(n) if *n == 0.0)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// 文本表示（排序键、前缀判定使用）
    ///
    /// 整数值的浮点数输出为整数形式（1001.0 → "1001"）
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Bool(b) => if *b { "True" } else { "False" }.to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_text())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

// ==========================================
// 交货日 (Delivery Date)
// ==========================================
// 由调用方输入创建，不可变，单次消费
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DeliveryDate(NaiveDate);

impl DeliveryDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// 解析 ISO 日期字符串（YYYY-MM-DD，允许前后空白）
    pub fn parse_iso(value: &str) -> PrepareResult<Self> {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| PrepareError::InvalidDate(value.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// YYYYMMDD 形式（下载文件名使用）
    pub fn compact(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }
}

impl fmt::Display for DeliveryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_missing() {
        assert!(CellValue::Empty.is_missing());
        assert!(CellValue::Text("   ".to_string()).is_missing());
        assert!(!CellValue::Text("A001".to_string()).is_missing());
        assert!(!CellValue::Number(0.0).is_missing());
    }

    #[test]
    fn test_cell_value_zero_only_for_numbers() {
        assert!(CellValue::Number(0.0).is_zero());
        assert!(!CellValue::Number(0.5).is_zero());
        assert!(!CellValue::Text("0".to_string()).is_zero());
        assert!(!CellValue::Empty.is_zero());
    }

    #[test]
    fn test_display_text_integral_numbers() {
        assert_eq!(CellValue::Number(1001.0).display_text(), "1001");
        assert_eq!(CellValue::Number(2.5).display_text(), "2.5");
        assert_eq!(CellValue::Text("箱".to_string()).display_text(), "箱");
        assert_eq!(CellValue::Empty.display_text(), "");
    }

    #[test]
    fn test_delivery_date_parse() {
        let date = DeliveryDate::parse_iso(" 2025-06-02 ").unwrap();
        assert_eq!(date.weekday(), Weekday::Mon);
        assert_eq!(date.compact(), "20250602");
        assert_eq!(date.to_string(), "2025-06-02");
    }

    #[test]
    fn test_delivery_date_parse_invalid() {
        let err = DeliveryDate::parse_iso("2025/06/02").unwrap_err();
        assert!(matches!(err, PrepareError::InvalidDate(_)));
    }
}
