// ==========================================
// 納品数シート作成 - 内存工作表（测试用）
// ==========================================
// 职责: TemplateSheet 的内存实现，记录插入行/页面设置/打印区域
// ==========================================

use crate::domain::CellValue;
use crate::error::PrepareResult;
use crate::writer::page_layout::{CellRange, PageLayout};
use crate::writer::template_sheet::TemplateSheet;
use std::collections::BTreeMap;

/// 样式（各项以描述字符串表示）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellStyle {
    pub font: Option<String>,
    pub border: Option<String>,
    pub fill: Option<String>,
    pub number_format: Option<String>,
    pub alignment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryCell {
    pub value: CellValue,
    pub formula: Option<String>,
    pub style: CellStyle,
}

#[derive(Debug, Clone, Default)]
pub struct MemorySheet {
    /// key: (row, col)
    cells: BTreeMap<(u32, u32), MemoryCell>,
    heights: BTreeMap<u32, f64>,
    pub inserted: Vec<(u32, u32)>,
    pub layout: Option<PageLayout>,
    pub print_area: Option<CellRange>,
}

impl MemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_cell(&mut self, col: u32, row: u32, value: CellValue) {
        self.cells.entry((row, col)).or_default().value = value;
    }

    pub fn set_style(&mut self, col: u32, row: u32, style: CellStyle) {
        self.cells.entry((row, col)).or_default().style = style;
    }

    pub fn set_height(&mut self, row: u32, height: f64) {
        self.heights.insert(row, height);
    }

    pub fn value(&self, col: u32, row: u32) -> CellValue {
        self.cells
            .get(&(row, col))
            .map(|c| c.value.clone())
            .unwrap_or_default()
    }

    pub fn style(&self, col: u32, row: u32) -> CellStyle {
        self.cells
            .get(&(row, col))
            .map(|c| c.style.clone())
            .unwrap_or_default()
    }

    pub fn formula(&self, col: u32, row: u32) -> Option<String> {
        self.cells.get(&(row, col)).and_then(|c| c.formula.clone())
    }

    pub fn height(&self, row: u32) -> Option<f64> {
        self.heights.get(&row).copied()
    }

    pub fn snapshot(&self) -> (Vec<((u32, u32), MemoryCell)>, Vec<(u32, f64)>) {
        (
            self.cells.iter().map(|(k, v)| (*k, v.clone())).collect(),
            self.heights.iter().map(|(k, v)| (*k, *v)).collect(),
        )
    }
}

impl TemplateSheet for MemorySheet {
    fn highest_row(&self) -> u32 {
        self.cells.keys().map(|(r, _)| *r).max().unwrap_or(0)
    }

    fn highest_column(&self) -> u32 {
        self.cells.keys().map(|(_, c)| *c).max().unwrap_or(0)
    }

    fn insert_rows(&mut self, at_row: u32, count: u32) {
        self.inserted.push((at_row, count));

        let cells = std::mem::take(&mut self.cells);
        self.cells = cells
            .into_iter()
            .map(|((r, c), cell)| {
                let r = if r >= at_row { r + count } else { r };
                ((r, c), cell)
            })
            .collect();

        let heights = std::mem::take(&mut self.heights);
        self.heights = heights
            .into_iter()
            .map(|(r, h)| (if r >= at_row { r + count } else { r }, h))
            .collect();
    }

    fn row_height(&self, row: u32) -> Option<f64> {
        self.height(row)
    }

    fn set_row_height(&mut self, row: u32, height: Option<f64>) {
        match height {
            Some(h) => {
                self.heights.insert(row, h);
            }
            None => {
                self.heights.remove(&row);
            }
        }
    }

    fn copy_style(&mut self, col: u32, from_row: u32, to_row: u32) {
        let style = self.style(col, from_row);
        self.cells.entry((to_row, col)).or_default().style = style;
    }

    fn clear_cell(&mut self, col: u32, row: u32) {
        self.cells.remove(&(row, col));
    }

    fn write_value(&mut self, col: u32, row: u32, value: &CellValue) {
        let cell = self.cells.entry((row, col)).or_default();
        cell.value = value.clone();
        cell.formula = None;
    }

    fn write_formula(&mut self, col: u32, row: u32, formula: &str) {
        let cell = self.cells.entry((row, col)).or_default();
        cell.value = CellValue::Empty;
        cell.formula = Some(formula.to_string());
    }

    fn apply_page_layout(&mut self, layout: &PageLayout) {
        self.layout = Some(layout.clone());
    }

    fn set_print_area(&mut self, area: &CellRange) -> PrepareResult<()> {
        self.print_area = Some(area.clone());
        Ok(())
    }
}
