// ==========================================
// 納品数シート作成 - 应用层
// ==========================================
// 职责: 面向调用方的适配（上传内容 → 生成 → 下载）
// ==========================================

pub mod upload;

// 重导出
pub use upload::{
    default_delivery_date, download_file_name, prepare_upload, prepare_upload_with,
    PreparedDownload, MACRO_ENABLED_MIME, UPLOAD_EXTENSION,
};
