// ==========================================
// 納品数シート作成 - 商品行提取器
// ==========================================
// 职责: 按列清单定位读取源表 → 命名字段 → 过滤
// 阶段:
// 1. 自数据起始行逐行读取选择列（按位置，不看表头）
// 2. 商品コード为空的行丢弃
// 3. 区间第三列（出库）与第五列（入库）同时为 0 的行丢弃
// 红线: 只读源表
// ==========================================

use crate::domain::{CellValue, ColumnSelection, DayBlock, ExtractedRow};
use crate::importer::sheet_reader::SheetGrid;

// ==========================================
// Extractor - 商品行提取器
// ==========================================
pub struct Extractor {
    data_start_row: u32,
}

impl Extractor {
    /// # 参数
    /// - data_start_row: 源表数据起始行（1 起始）
    pub fn new(data_start_row: u32) -> Self {
        Self { data_start_row }
    }

    /// 提取并过滤商品行
    pub fn extract(&self, grid: &SheetGrid, selection: &ColumnSelection) -> Vec<ExtractedRow> {
        let rows = self.read_rows(grid, selection);
        let read_count = rows.len();

        let kept = drop_idle_rows(rows);
        tracing::info!(
            "提取商品行: 有效 {} 行，零数量过滤后 {} 行",
            read_count,
            kept.len()
        );
        kept
    }

    /// 读取商品行（仅做商品コード非空过滤）
    pub fn read_rows(&self, grid: &SheetGrid, selection: &ColumnSelection) -> Vec<ExtractedRow> {
        let columns = selection.column_indices();
        let Some(last_row) = grid.last_row() else {
            return Vec::new();
        };

        let mut rows = Vec::new();
        let mut skipped = 0usize;
        for row in self.data_start_row..=last_row {
            let mut cells = columns.iter().map(|&col| grid.get(row, col).clone());

            let product_code = cells.next().unwrap_or_default();
            if product_code.is_missing() {
                skipped += 1;
                continue;
            }

            let product_name = cells.next().unwrap_or_default();
            let unit_flag = cells.next().unwrap_or_default();
            let receiving = cells.next().unwrap_or_default();
            let day_block = DayBlock::new(cells.collect());

            rows.push(ExtractedRow {
                product_code,
                product_name,
                unit_flag,
                receiving,
                day_block,
                source_row: row,
            });
        }

        if skipped > 0 {
            tracing::debug!("跳过商品コード为空的行: {} 行", skipped);
        }
        rows
    }
}

/// 零数量过滤
///
/// 区间第三列与第五列（目标表 E/G）同时为数值 0 时丢弃；任一非零（或非数值）即保留
pub fn drop_idle_rows(rows: Vec<ExtractedRow>) -> Vec<ExtractedRow> {
    rows.into_iter().filter(|row| !is_idle(row)).collect()
}

fn is_idle(row: &ExtractedRow) -> bool {
    let outgoing: &CellValue = row.day_block.outgoing();
    let incoming: &CellValue = row.day_block.incoming();
    outgoing.is_zero() && incoming.is_zero()
}
