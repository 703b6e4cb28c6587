// ==========================================
// 納品数シート作成 - 统一错误类型
// ==========================================
// 工具: thiserror 派生宏
// 职责: 区分三类用户可见错误（日期非法 / 输入缺失 / 输出争用）
//       以及内部读写错误
// ==========================================

use chrono::{NaiveDate, Weekday};
use std::path::PathBuf;
use thiserror::Error;

/// 错误大类（供 UI / CLI 决定提示文案与退出码）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 交货日不可用（ValueError 类）
    InvalidDate,
    /// 输入文件不存在（FileNotFoundError 类）
    MissingInput,
    /// 输出文件名全部被占用（PermissionError 类）
    OutputContention,
    /// 其他读写/配置错误
    Internal,
}

/// 处理流程错误类型
#[derive(Error, Debug)]
pub enum PrepareError {
    // ===== 交货日错误 =====
    #[error("日曜・未設定曜日は出荷対象外です: {date} ({weekday})")]
    UnsupportedWeekday { date: NaiveDate, weekday: Weekday },

    #[error("日付の形式が不正です (YYYY-MM-DD): {0}")]
    InvalidDate(String),

    // ===== 文件错误 =====
    #[error("入力ファイルが見つかりません: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("出力ファイルを作成できません — 既存ファイルを閉じてください ({stem}, {attempts} 件試行)")]
    OutputCreation { stem: String, attempts: u32 },

    // ===== 工作簿错误 =====
    #[error("シートが見つかりません: {0}")]
    SheetNotFound(String),

    #[error("Excel 読み込みに失敗しました: {0}")]
    ExcelRead(String),

    #[error("ブックの読み書きに失敗しました: {0}")]
    WorkbookIo(String),

    #[error("印刷範囲を設定できません: {0}")]
    PrintArea(String),

    // ===== 配置错误 =====
    #[error("設定が不正です: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PrepareError {
    /// 错误归类
    pub fn kind(&self) -> ErrorKind {
        match self {
            PrepareError::UnsupportedWeekday { .. } | PrepareError::InvalidDate(_) => {
                ErrorKind::InvalidDate
            }
            PrepareError::FileNotFound(_) => ErrorKind::MissingInput,
            PrepareError::OutputCreation { .. } => ErrorKind::OutputContention,
            _ => ErrorKind::Internal,
        }
    }
}

// 实现 From<calamine::XlsxError>
impl From<calamine::XlsxError> for PrepareError {
    fn from(err: calamine::XlsxError) -> Self {
        PrepareError::ExcelRead(err.to_string())
    }
}

// 实现 From<umya_spreadsheet::XlsxError>
impl From<umya_spreadsheet::XlsxError> for PrepareError {
    fn from(err: umya_spreadsheet::XlsxError) -> Self {
        PrepareError::WorkbookIo(err.to_string())
    }
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for PrepareError {
    fn from(err: serde_json::Error) -> Self {
        PrepareError::Config(err.to_string())
    }
}

/// Result 类型别名
pub type PrepareResult<T> = Result<T, PrepareError>;
