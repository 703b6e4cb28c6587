// ==========================================
// 納品数シート作成 - 打印设置
// ==========================================
// 职责: 纸张方向 / 缩放 / 页边距 / 居中 / 打印区域
// ==========================================

use crate::config::layout::{
    MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP, PRINT_FIRST_COLUMN, PRINT_LAST_COLUMN,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// 页边距（英寸）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

/// 页面设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub orientation: Orientation,
    /// 横向缩放至 N 页宽
    pub fit_to_width: u32,
    pub margins: Margins,
    pub horizontal_centered: bool,
    pub vertical_centered: bool,
}

impl PageLayout {
    /// 納品数シート的固定设置：纵向、1 页宽、水平居中、垂直不居中
    pub fn delivery_sheet() -> Self {
        Self {
            orientation: Orientation::Portrait,
            fit_to_width: 1,
            margins: Margins {
                top: MARGIN_TOP,
                bottom: MARGIN_BOTTOM,
                left: MARGIN_LEFT,
                right: MARGIN_RIGHT,
            },
            horizontal_centered: true,
            vertical_centered: false,
        }
    }
}

// ==========================================
// CellRange - 单元格矩形区域
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRange {
    pub first_column: String,
    pub first_row: u32,
    pub last_column: String,
    pub last_row: u32,
}

impl CellRange {
    /// 打印区域：A1 至 M{last_row}
    pub fn print_area(last_row: u32) -> Self {
        Self {
            first_column: PRINT_FIRST_COLUMN.to_string(),
            first_row: 1,
            last_column: PRINT_LAST_COLUMN.to_string(),
            last_row,
        }
    }

    /// 绝对引用（定义名称使用）: '納品数'!$A$1:$M$6
    pub fn to_absolute(&self, sheet_name: &str) -> String {
        format!(
            "'{}'!${}${}:${}${}",
            sheet_name.replace('\'', "''"),
            self.first_column,
            self.first_row,
            self.last_column,
            self.last_row
        )
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}:{}{}",
            self.first_column, self.first_row, self.last_column, self.last_row
        )
    }
}
