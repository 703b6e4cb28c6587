// ==========================================
// 納品数シート作成 - 引擎层
// ==========================================
// 职责: 列映射 / 出力順排序 / 流程编排
// 红线: 引擎不直接读写文件，文件操作交给 importer / writer
// （编排器除外：它只串联各层）
// ==========================================

pub mod column_mapper;
pub mod orchestrator;
pub mod priority;

// 重导出核心引擎
pub use column_mapper::{column_labels, ColumnMapper};
pub use orchestrator::{prepare, PrepareOrchestrator, PrepareReport};
pub use priority::{PrefixClass, PrioritySorter, SortKey};
