// ==========================================
// 納品数シート作成 - 模板工作表接口
// ==========================================
// 职责: 定义写入器所需的工作表操作（不包含实现）
// 实现者: UmyaSheet（文件） / MemorySheet（测试）
// 坐标: 行列号均为 1 起始
// ==========================================

use crate::domain::CellValue;
use crate::error::PrepareResult;
use crate::writer::page_layout::{CellRange, PageLayout};

// ==========================================
// TemplateSheet Trait
// ==========================================
pub trait TemplateSheet {
    /// 已使用的最大行号
    fn highest_row(&self) -> u32;

    /// 已使用的最大列号
    fn highest_column(&self) -> u32;

    /// 在 `at_row` 处插入 `count` 个空行
    fn insert_rows(&mut self, at_row: u32, count: u32);

    /// 行高；未设置返回 None
    fn row_height(&self, row: u32) -> Option<f64>;

    /// 设置行高；None 表示恢复默认
    fn set_row_height(&mut self, row: u32, height: Option<f64>);

    /// 复制样式（字体/边框/填充/数字格式/对齐）
    fn copy_style(&mut self, col: u32, from_row: u32, to_row: u32);

    /// 清空单元格：值 + 样式全部复位（无填充、常规格式）
    fn clear_cell(&mut self, col: u32, row: u32);

    /// 写入单元格值；Empty 写为空白
    fn write_value(&mut self, col: u32, row: u32, value: &CellValue);

    /// 写入公式（以 '=' 开头）
    fn write_formula(&mut self, col: u32, row: u32, formula: &str);

    /// 应用页面设置
    fn apply_page_layout(&mut self, layout: &PageLayout);

    /// 设置打印区域（替换已有设置）
    fn set_print_area(&mut self, area: &CellRange) -> PrepareResult<()>;
}
