// ==========================================
// 納品数シート作成 - 领域模型层
// ==========================================
// 职责: 定义单元格值、交货日、列选择、商品行
// 红线: 不含文件读写逻辑,不含引擎逻辑
// ==========================================

pub mod column;
pub mod record;
pub mod types;

// 重导出核心类型
pub use column::{column_index, column_letter, column_span};
pub use record::{ColumnSelection, DayBlock, ExtractedRow};
pub use types::{CellValue, DeliveryDate};
