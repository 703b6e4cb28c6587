// ==========================================
// 納品数シート作成 - 输出文件复制
// ==========================================
// 职责: 复制输入文件为 <stem>_prepared.<ext>
//       已存在时依次尝试 <stem>_prepared(1..=99).<ext>
// 说明: 目标被其他进程锁定（权限/占用错误）时换下一个候选名；
//       其他 I/O 错误直接返回
// ==========================================

use crate::config::layout::{MAX_OUTPUT_ATTEMPTS, OUTPUT_SUFFIX};
use crate::error::{PrepareError, PrepareResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 候选输出路径
///
/// - `attempt = None`: `<stem>_prepared.<ext>`
/// - `attempt = Some(n)`: `<stem>_prepared(n).<ext>`
pub fn candidate_path(source: &Path, attempt: Option<u32>) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut name = match attempt {
        None => format!("{}{}", stem, OUTPUT_SUFFIX),
        Some(n) => format!("{}{}({})", stem, OUTPUT_SUFFIX, n),
    };
    if let Some(ext) = source.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    source.with_file_name(name)
}

/// 复制输入文件，返回副本路径
pub fn duplicate_source(source: &Path) -> PrepareResult<PathBuf> {
    duplicate_with(source, |from, to| fs::copy(from, to).map(|_| ()))
}

/// 复制输入文件（复制动作可注入）
pub fn duplicate_with<F>(source: &Path, mut copy: F) -> PrepareResult<PathBuf>
where
    F: FnMut(&Path, &Path) -> io::Result<()>,
{
    let base = candidate_path(source, None);
    if !base.exists() {
        copy(source, &base)?;
        tracing::info!("复制输入文件: {}", base.display());
        return Ok(base);
    }

    tracing::debug!("{} 已存在，开始探测候选文件名", base.display());
    for attempt in 1..=MAX_OUTPUT_ATTEMPTS {
        let candidate = candidate_path(source, Some(attempt));
        match copy(source, &candidate) {
            Ok(()) => {
                tracing::info!("复制输入文件: {}", candidate.display());
                return Ok(candidate);
            }
            Err(err) if is_contention(&err) => {
                tracing::warn!("无法写入 {}: {}", candidate.display(), err);
                continue;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Err(PrepareError::OutputCreation {
        stem: source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
        attempts: MAX_OUTPUT_ATTEMPTS,
    })
}

/// 文件被占用 / 无写权限
///
/// Windows 下 Excel 打开中的文件报 ERROR_SHARING_VIOLATION(32) / ERROR_LOCK_VIOLATION(33)
fn is_contention(err: &io::Error) -> bool {
    if err.kind() == io::ErrorKind::PermissionDenied {
        return true;
    }
    cfg!(windows) && matches!(err.raw_os_error(), Some(32) | Some(33))
}
