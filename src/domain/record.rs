// ==========================================
// 納品数シート作成 - 提取记录定义
// ==========================================
// 职责: 列选择 (ColumnSelection) / 商品行 (ExtractedRow)
// 红线: 提取完成后一律按字段名访问，不再依赖列位置
// ==========================================

use crate::domain::column::column_index;
use crate::domain::types::CellValue;
use serde::{Deserialize, Serialize};

// ==========================================
// ColumnSelection - 待提取列
// ==========================================
// 固定前导列 + 曜日列区间（区间末列 = 当日納品数）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSelection {
    fixed: Vec<String>,
    day_range: Vec<String>,
}

impl ColumnSelection {
    pub fn new(fixed: Vec<String>, day_range: Vec<String>) -> Self {
        Self { fixed, day_range }
    }

    /// 全部列字母（固定列在前）
    pub fn columns(&self) -> Vec<&str> {
        self.fixed
            .iter()
            .chain(self.day_range.iter())
            .map(String::as_str)
            .collect()
    }

    pub fn fixed_columns(&self) -> &[String] {
        &self.fixed
    }

    pub fn day_range(&self) -> &[String] {
        &self.day_range
    }

    /// 当日納品数所在列（曜日区间末列）
    pub fn quantity_column(&self) -> Option<&str> {
        self.day_range.last().map(String::as_str)
    }

    /// 列号（1 起始）；无法解析的列字母被跳过
    pub fn column_indices(&self) -> Vec<u32> {
        self.columns()
            .into_iter()
            .filter_map(column_index)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.fixed.len() + self.day_range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ==========================================
// DayBlock - 曜日区间的值
// ==========================================
// 写入目标表 C 列起（C..H）；E 与 G 参与 K 列公式 (C - E + G)
// 区间含两端，共 6 列：第 3 列为出库、第 5 列为入库，末列为当日納品数
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DayBlock {
    values: Vec<CellValue>,
}

impl DayBlock {
    pub fn new(values: Vec<CellValue>) -> Self {
        Self { values }
    }

    /// 区间首列（目标表 C 列，K 列公式的起点）
    pub fn opening(&self) -> &CellValue {
        self.values.first().unwrap_or(&CellValue::Empty)
    }

    /// 区间第三列（目标表 E 列，K 列公式中被减项）
    pub fn outgoing(&self) -> &CellValue {
        self.values.get(2).unwrap_or(&CellValue::Empty)
    }

    /// 区间第五列（目标表 G 列，K 列公式中加项）
    pub fn incoming(&self) -> &CellValue {
        self.values.get(4).unwrap_or(&CellValue::Empty)
    }

    /// 区间末列：当日納品数
    pub fn quantity(&self) -> &CellValue {
        self.values.last().unwrap_or(&CellValue::Empty)
    }

    pub fn values(&self) -> &[CellValue] {
        &self.values
    }
}

// ==========================================
// ExtractedRow - 商品行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRow {
    /// 商品コード（非空）
    pub product_code: CellValue,
    /// 商品名
    pub product_name: CellValue,
    /// 箱/こ/不（「箱」为箱物，决定排序序位）
    pub unit_flag: CellValue,
    /// 荷受
    pub receiving: CellValue,
    pub day_block: DayBlock,
    /// 源表行号（日志用）
    pub source_row: u32,
}

impl ExtractedRow {
    /// 商品コード文本（排序键）
    pub fn code_text(&self) -> String {
        self.product_code.display_text()
    }

    /// 商品名文本
    pub fn name_text(&self) -> String {
        self.product_name.display_text()
    }

    pub fn quantity(&self) -> &CellValue {
        self.day_block.quantity()
    }

    /// 按目标表列顺序展开（A 列起，源表列顺序）
    ///
    /// A 商品コード / B 商品名 / C.. 曜日区间 / 箱/こ/不 / 荷受
    /// 默认区间 6 列时: C..H 区间，I 箱/こ/不，J 荷受
    pub fn to_cells(&self) -> Vec<CellValue> {
        let mut cells = Vec::with_capacity(4 + self.day_block.values().len());
        cells.push(self.product_code.clone());
        cells.push(self.product_name.clone());
        cells.extend(self.day_block.values().iter().cloned());
        cells.push(self.unit_flag.clone());
        cells.push(self.receiving.clone());
        cells
    }
}
