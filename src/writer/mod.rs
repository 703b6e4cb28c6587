// ==========================================
// 納品数シート作成 - 写入层
// ==========================================
// 职责: 复制源文件 → 写入納品数シート → 页面设置 → 保存
// 红线: 不修改源文件；公式与样式只写入副本
// ==========================================

pub mod formula;
pub mod output_path;
pub mod page_layout;
pub mod sheet_writer;
pub mod template_sheet;
pub mod umya_sheet;

#[cfg(test)]
pub(crate) mod memory_sheet;

// 重导出
pub use formula::{balance_formula, routing_formula};
pub use output_path::{candidate_path, duplicate_source, duplicate_with};
pub use page_layout::{CellRange, Margins, Orientation, PageLayout};
pub use sheet_writer::{SheetWriter, WriteSummary};
pub use template_sheet::TemplateSheet;
pub use umya_sheet::{DestinationWorkbook, UmyaSheet, PRINT_AREA_NAME};
