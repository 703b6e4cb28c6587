// ==========================================
// 納品数シート作成 - 目标表写入器
// ==========================================
// 职责: 将排序后的商品行写入納品数シート
// 步骤:
// 1. 行数不足时在表尾追加行
// 2. 以起始行为模板，逐行复制样式与行高
// 3. 按位置写值（无表头）
// 4. 清空末行之后的全部行（值/样式/行高）
// 5. 写入 K/M 两列公式
// 6. 页面设置 + 打印区域 A1:M{末行}
// ==========================================

use crate::config::layout::{BALANCE_COLUMN, ROUTING_COLUMN};
use crate::domain::ExtractedRow;
use crate::error::{PrepareError, PrepareResult};
use crate::writer::formula::{balance_formula, routing_formula};
use crate::writer::page_layout::{CellRange, PageLayout};
use crate::writer::template_sheet::TemplateSheet;
use tracing::{debug, info};

/// 写入结果摘要
#[derive(Debug, Clone, PartialEq)]
pub struct WriteSummary {
    pub rows_written: u32,
    pub rows_inserted: u32,
    /// 清空的行区间（含两端）；无清空为 None
    pub cleared_rows: Option<(u32, u32)>,
    pub print_area: CellRange,
}

// ==========================================
// SheetWriter - 目标表写入器
// ==========================================
pub struct SheetWriter {
    start_row: u32,
    layout: PageLayout,
}

impl SheetWriter {
    /// # 参数
    /// - start_row: 数据起始行（同时为样式模板行）
    pub fn new(start_row: u32) -> Self {
        Self {
            start_row,
            layout: PageLayout::delivery_sheet(),
        }
    }

    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }

    /// 写入商品行
    pub fn write<S: TemplateSheet>(
        &self,
        sheet: &mut S,
        rows: &[ExtractedRow],
    ) -> PrepareResult<WriteSummary> {
        let need = u32::try_from(rows.len())
            .map_err(|_| PrepareError::WorkbookIo(format!("行数过多: {}", rows.len())))?;

        let rows_inserted = self.reflow(sheet, need);
        self.paste_values(sheet, rows);
        let cleared_rows = self.clear_from(sheet, self.start_row + need);
        self.inject_formulas(sheet, need);

        let last_row = (self.start_row + need).saturating_sub(1);
        let print_area = CellRange::print_area(last_row);
        sheet.apply_page_layout(&self.layout);
        sheet.set_print_area(&print_area)?;

        info!(
            "写入完成: {} 行（追加 {} 行），打印区域 {}",
            need, rows_inserted, print_area
        );

        Ok(WriteSummary {
            rows_written: need,
            rows_inserted,
            cleared_rows,
            print_area,
        })
    }

    // ==========================================
    // 步骤实现
    // ==========================================

    /// 追加行 + 复制模板行样式与行高
    ///
    /// 返回追加的行数
    fn reflow<S: TemplateSheet>(&self, sheet: &mut S, need: u32) -> u32 {
        let base_height = sheet.row_height(self.start_row);
        let highest = sheet.highest_row();
        let available = (highest + 1).saturating_sub(self.start_row);

        let mut inserted = 0;
        if need > available {
            inserted = need - available;
            sheet.insert_rows(highest + 1, inserted);
            debug!("表尾追加 {} 行（第 {} 行起）", inserted, highest + 1);
        }

        let max_col = sheet.highest_column();
        for offset in 0..need {
            let row = self.start_row + offset;
            sheet.set_row_height(row, base_height);
            for col in 1..=max_col {
                sheet.copy_style(col, self.start_row, row);
            }
        }
        inserted
    }

    /// 按位置写值（A 列起）
    fn paste_values<S: TemplateSheet>(&self, sheet: &mut S, rows: &[ExtractedRow]) {
        for (row, record) in (self.start_row..).zip(rows) {
            for (col, value) in (1u32..).zip(record.to_cells()) {
                sheet.write_value(col, row, &value);
            }
        }
    }

    /// 清空 `from_row` 至表尾
    fn clear_from<S: TemplateSheet>(&self, sheet: &mut S, from_row: u32) -> Option<(u32, u32)> {
        let highest = sheet.highest_row();
        if from_row > highest {
            return None;
        }

        let max_col = sheet.highest_column();
        for row in from_row..=highest {
            sheet.set_row_height(row, None);
            for col in 1..=max_col {
                sheet.clear_cell(col, row);
            }
        }
        debug!("清空第 {} ~ {} 行", from_row, highest);
        Some((from_row, highest))
    }

    /// K/M 列公式
    fn inject_formulas<S: TemplateSheet>(&self, sheet: &mut S, need: u32) {
        for row in self.start_row..self.start_row + need {
            sheet.write_formula(BALANCE_COLUMN, row, &balance_formula(row));
            sheet.write_formula(ROUTING_COLUMN, row, &routing_formula(row));
        }
    }
}
