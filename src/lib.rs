// ==========================================
// 納品数シート作成 - 核心库
// ==========================================
// 输入: 在庫集計表（.xlsm）+ 交货日
// 输出: 写好納品数シート的副本（宏保留）
// 定位: 单人操作的本地工具，一次调用处理一个文件
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 单元格值/交货日/商品行
pub mod domain;

// 配置层 - 固定版式与可覆写配置
pub mod config;

// 导入层 - 读取源表
pub mod importer;

// 引擎层 - 列映射/排序/编排
pub mod engine;

// 写入层 - 副本/工作表写入/页面设置
pub mod writer;

// 应用层 - 上传适配
pub mod app;

// 日志系统
pub mod logging;

// 错误类型
pub mod error;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{CellValue, ColumnSelection, DayBlock, DeliveryDate, ExtractedRow};

pub use config::PrepareConfig;

pub use engine::{prepare, ColumnMapper, PrepareOrchestrator, PrepareReport, PrioritySorter};

pub use writer::SheetWriter;

pub use app::{prepare_upload, PreparedDownload};

pub use error::{ErrorKind, PrepareError, PrepareResult};

// ==========================================
// 常量定义
// ==========================================

// 版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 名称
pub const APP_NAME: &str = "納品数シート作成";
