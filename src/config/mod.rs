// ==========================================
// 納品数シート作成 - 配置层
// ==========================================
// 职责: 固定版式常量 + 可覆写运行配置
// 存储: 进程级常量 / 用户配置目录 JSON
// ==========================================

pub mod layout;
pub mod prepare_config;

// 重导出核心配置
pub use prepare_config::{default_config_path, PrepareConfig, WeekdayRange, CONFIG_FILE_NAME};
