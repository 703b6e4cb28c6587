// ==========================================
// 納品数シート作成 - 导入层
// ==========================================
// 职责: 读取在庫集計表，生成命名字段的商品行
// 支持: Excel (.xlsx/.xlsm)
// ==========================================

// 模块声明
pub mod extractor;
pub mod sheet_reader;

// 重导出核心类型
pub use extractor::{drop_idle_rows, Extractor};
pub use sheet_reader::{read_sheet, SheetGrid};
