// ==========================================
// 納品数シート作成 - umya 工作簿适配
// ==========================================
// 职责: 打开副本工作簿（保留宏）/ TemplateSheet 实现 / 保存
// 工具: umya-spreadsheet
// 注意: umya 坐标为 (col, row)，公式不带前导 '='
// ==========================================

use crate::domain::CellValue;
use crate::error::{PrepareError, PrepareResult};
use crate::writer::page_layout::{CellRange, Orientation, PageLayout};
use crate::writer::template_sheet::TemplateSheet;
use std::path::{Path, PathBuf};
use umya_spreadsheet::{OrientationValues, Spreadsheet, Style, Worksheet};

/// 打印区域的定义名称
pub const PRINT_AREA_NAME: &str = "_xlnm.Print_Area";

// ==========================================
// DestinationWorkbook - 副本工作簿
// ==========================================
pub struct DestinationWorkbook {
    path: PathBuf,
    book: Spreadsheet,
}

impl DestinationWorkbook {
    /// 完整读取（非惰性），保存时不丢失工作表与宏
    pub fn open<P: AsRef<Path>>(path: P) -> PrepareResult<Self> {
        let path = path.as_ref().to_path_buf();
        let book = umya_spreadsheet::reader::xlsx::read(&path)?;
        tracing::debug!(
            "打开工作簿 {}: {} 张工作表",
            path.display(),
            book.get_sheet_count()
        );
        Ok(Self { path, book })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 取目标工作表
    pub fn sheet_mut(&mut self, name: &str) -> PrepareResult<UmyaSheet<'_>> {
        let worksheet = self
            .book
            .get_sheet_by_name_mut(name)
            .ok_or_else(|| PrepareError::SheetNotFound(name.to_string()))?;
        Ok(UmyaSheet::new(worksheet, name))
    }

    /// 覆盖保存到原路径
    pub fn save(&self) -> PrepareResult<()> {
        umya_spreadsheet::writer::xlsx::write(&self.book, &self.path)?;
        tracing::debug!("保存工作簿: {}", self.path.display());
        Ok(())
    }
}

// ==========================================
// UmyaSheet - TemplateSheet 实现
// ==========================================
pub struct UmyaSheet<'a> {
    worksheet: &'a mut Worksheet,
    name: String,
}

impl<'a> UmyaSheet<'a> {
    pub fn new(worksheet: &'a mut Worksheet, name: &str) -> Self {
        Self {
            worksheet,
            name: name.to_string(),
        }
    }
}

impl TemplateSheet for UmyaSheet<'_> {
    fn highest_row(&self) -> u32 {
        self.worksheet.get_highest_row()
    }

    fn highest_column(&self) -> u32 {
        self.worksheet.get_highest_column()
    }

    fn insert_rows(&mut self, at_row: u32, count: u32) {
        self.worksheet.insert_new_row(&at_row, &count);
    }

    fn row_height(&self, row: u32) -> Option<f64> {
        self.worksheet
            .get_row_dimension(&row)
            .map(|dim| *dim.get_height())
            .filter(|height| *height > 0.0)
    }

    fn set_row_height(&mut self, row: u32, height: Option<f64>) {
        let dim = self.worksheet.get_row_dimension_mut(&row);
        match height {
            Some(h) => {
                dim.set_height(h);
                dim.set_custom_height(true);
            }
            None => {
                dim.set_height(0.0);
                dim.set_custom_height(false);
            }
        }
    }

    fn copy_style(&mut self, col: u32, from_row: u32, to_row: u32) {
        if from_row == to_row {
            return;
        }
        let style = self.worksheet.get_style((col, from_row)).clone();
        self.worksheet.set_style((col, to_row), style);
    }

    fn clear_cell(&mut self, col: u32, row: u32) {
        let cell = self.worksheet.get_cell_mut((col, row));
        cell.set_blank();
        cell.set_style(Style::default());
    }

    fn write_value(&mut self, col: u32, row: u32, value: &CellValue) {
        let cell = self.worksheet.get_cell_mut((col, row));
        match value {
            CellValue::Empty => {
                cell.set_blank();
            }
            CellValue::Text(s) => {
                cell.set_value_string(s.clone());
            }
            CellValue::Number(n) => {
                cell.set_value_number(*n);
            }
            CellValue::Bool(b) => {
                cell.set_value_bool(*b);
            }
        }
    }

    fn write_formula(&mut self, col: u32, row: u32, formula: &str) {
        let formula = formula.strip_prefix('=').unwrap_or(formula);
        self.worksheet
            .get_cell_mut((col, row))
            .set_formula(formula.to_string());
    }

    fn apply_page_layout(&mut self, layout: &PageLayout) {
        let orientation = match layout.orientation {
            Orientation::Portrait => OrientationValues::Portrait,
            Orientation::Landscape => OrientationValues::Landscape,
        };

        let page_setup = self.worksheet.get_page_setup_mut();
        page_setup.set_orientation(orientation);
        page_setup.set_fit_to_width(layout.fit_to_width);

        let margins = self.worksheet.get_page_margins_mut();
        margins.set_top(layout.margins.top);
        margins.set_bottom(layout.margins.bottom);
        margins.set_left(layout.margins.left);
        margins.set_right(layout.margins.right);

        let print_options = self.worksheet.get_print_options_mut();
        print_options.set_horizontal_centered(layout.horizontal_centered);
        print_options.set_vertical_centered(layout.vertical_centered);
    }

    fn set_print_area(&mut self, area: &CellRange) -> PrepareResult<()> {
        self.worksheet
            .get_defined_names_mut()
            .retain(|defined| defined.get_name() != PRINT_AREA_NAME);

        let address = area.to_absolute(&self.name);
        self.worksheet
            .add_defined_name(PRINT_AREA_NAME.to_string(), address.clone())
            .map_err(|e| PrepareError::PrintArea(format!("{}: {}", address, e)))
    }
}
