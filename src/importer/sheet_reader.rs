// ==========================================
// 納品数シート作成 - 源工作表读取
// ==========================================
// 职责: 打开工作簿（.xlsx/.xlsm）并将指定工作表读为内存网格
// 工具: calamine
// ==========================================

use crate::domain::CellValue;
use crate::error::{PrepareError, PrepareResult};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::Path;

// ==========================================
// SheetGrid - 工作表内存网格
// ==========================================
// 行列号均为 1 起始；越界返回 Empty
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetGrid {
    first_row: u32,
    first_col: u32,
    rows: Vec<Vec<CellValue>>,
}

static EMPTY: CellValue = CellValue::Empty;

impl SheetGrid {
    /// 以 (first_row, first_col) 为左上角构建网格
    pub fn new(first_row: u32, first_col: u32, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            first_row: first_row.max(1),
            first_col: first_col.max(1),
            rows,
        }
    }

    /// 从 calamine Range 转换
    pub fn from_range(range: &Range<Data>) -> Self {
        let (start_row, start_col) = range.start().unwrap_or((0, 0));
        let rows = range
            .rows()
            .map(|row| row.iter().map(convert_cell).collect())
            .collect();
        Self::new(start_row + 1, start_col + 1, rows)
    }

    /// 读取单元格
    pub fn get(&self, row: u32, col: u32) -> &CellValue {
        if row < self.first_row || col < self.first_col {
            return &EMPTY;
        }
        self.rows
            .get((row - self.first_row) as usize)
            .and_then(|r| r.get((col - self.first_col) as usize))
            .unwrap_or(&EMPTY)
    }

    /// 最后一个有数据的行号；空表返回 None
    pub fn last_row(&self) -> Option<u32> {
        if self.rows.is_empty() {
            None
        } else {
            Some(self.first_row + self.rows.len() as u32 - 1)
        }
    }
}

/// calamine 单元格 → CellValue
///
/// 日期时间保留序列值；错误值按文本保存
pub fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(format!("{:?}", e)),
    }
}

// ==========================================
// 工作簿读取
// ==========================================

/// 读取工作簿中的指定工作表
///
/// # 返回
/// - Err(FileNotFound): 文件不存在
/// - Err(SheetNotFound): 工作表不存在
/// - Err(ExcelRead): 解析失败
pub fn read_sheet<P: AsRef<Path>>(path: P, sheet_name: &str) -> PrepareResult<SheetGrid> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PrepareError::FileNotFound(path.to_path_buf()));
    }

    let mut workbook: Xlsx<_> = open_workbook(path)?;

    if !workbook.sheet_names().iter().any(|name| name == sheet_name) {
        return Err(PrepareError::SheetNotFound(sheet_name.to_string()));
    }

    let range = workbook.worksheet_range(sheet_name)?;
    let grid = SheetGrid::from_range(&range);

    tracing::debug!(
        "读取工作表 {} 完成: 末行 {:?}",
        sheet_name,
        grid.last_row()
    );
    Ok(grid)
}
