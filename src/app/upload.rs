// ==========================================
// 納品数シート作成 - 上传适配
// ==========================================
// 职责: 上传字节 → 临时 .xlsm → 生成 → 下载文件名
// 下载名: YYYYMMDD + 納品 + 扩展名
// 说明: 临时文件与生成的副本均保留在磁盘上，由调用方负责清理
// ==========================================

use crate::config::layout::DOWNLOAD_SUFFIX;
use crate::domain::DeliveryDate;
use crate::engine::{ColumnMapper, PrepareOrchestrator};
use crate::error::{PrepareError, PrepareResult};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// 上传文件的扩展名（含宏）
pub const UPLOAD_EXTENSION: &str = ".xlsm";

/// 下载时的 MIME 类型
pub const MACRO_ENABLED_MIME: &str = "application/vnd.ms-excel.sheet.macroEnabled.12";

/// 可供下载的生成结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedDownload {
    /// 生成的文件
    pub path: PathBuf,
    /// 下载时使用的文件名
    pub file_name: String,
}

impl PreparedDownload {
    /// 以下载文件名复制到目录，返回复制后的路径
    pub fn save_to<P: AsRef<Path>>(&self, dir: P) -> PrepareResult<PathBuf> {
        let target = dir.as_ref().join(&self.file_name);
        fs::copy(&self.path, &target)?;
        tracing::info!("保存下载文件: {}", target.display());
        Ok(target)
    }
}

/// 以默认配置处理上传内容
pub fn prepare_upload(bytes: &[u8], date_iso: &str) -> PrepareResult<PreparedDownload> {
    prepare_upload_with(&PrepareOrchestrator::default(), bytes, date_iso)
}

/// 处理上传内容
///
/// 交货日先行校验，非法时不落盘
pub fn prepare_upload_with(
    orchestrator: &PrepareOrchestrator,
    bytes: &[u8],
    date_iso: &str,
) -> PrepareResult<PreparedDownload> {
    let date = DeliveryDate::parse_iso(date_iso)?;
    ColumnMapper::new(orchestrator.config()).weekday_range(date)?;

    let source = persist_upload(bytes)?;
    tracing::debug!("上传内容已写入 {}", source.display());

    let path = orchestrator.prepare(&source, date_iso)?;
    let file_name = download_file_name(date, UPLOAD_EXTENSION);
    Ok(PreparedDownload { path, file_name })
}

/// 下载文件名
///
/// `ext` 可带或不带前导 '.'
pub fn download_file_name(date: DeliveryDate, ext: &str) -> String {
    let ext = ext.trim_start_matches('.');
    if ext.is_empty() {
        format!("{}{}", date.compact(), DOWNLOAD_SUFFIX)
    } else {
        format!("{}{}.{}", date.compact(), DOWNLOAD_SUFFIX, ext)
    }
}

/// 默认交货日：明天；明天为日曜时顺延到月曜
pub fn default_delivery_date(today: NaiveDate) -> NaiveDate {
    let tomorrow = today + Duration::days(1);
    if tomorrow.weekday() == Weekday::Sun {
        tomorrow + Duration::days(1)
    } else {
        tomorrow
    }
}

fn persist_upload(bytes: &[u8]) -> PrepareResult<PathBuf> {
    let mut file = tempfile::Builder::new()
        .prefix("upload-")
        .suffix(UPLOAD_EXTENSION)
        .tempfile()?;
    file.write_all(bytes)?;
    file.flush()?;

    let (_, path) = file.keep().map_err(|e| PrepareError::Io(e.error))?;
    Ok(path)
}
