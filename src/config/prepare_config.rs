// ==========================================
// 納品数シート作成 - 运行配置
// ==========================================
// 职责: 工作表名 / 起始行 / 曜日列区间的可覆写配置
// 缺省值 = layout 常量；可由 JSON 文件覆写
// ==========================================

use crate::config::layout;
use crate::domain::column::column_span;
use crate::error::{PrepareError, PrepareResult};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 配置文件名（位于用户配置目录）
pub const CONFIG_FILE_NAME: &str = "delivery-sheet-prep.json";

/// 曜日列区间
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayRange {
    pub weekday: Weekday,
    pub start: String,
    pub end: String,
}

/// 运行配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepareConfig {
    pub source_sheet: String,
    pub destination_sheet: String,
    pub source_start_row: u32,
    pub destination_start_row: u32,
    pub weekday_ranges: Vec<WeekdayRange>,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            source_sheet: layout::SOURCE_SHEET.to_string(),
            destination_sheet: layout::DESTINATION_SHEET.to_string(),
            source_start_row: layout::SOURCE_DATA_START_ROW,
            destination_start_row: layout::DESTINATION_DATA_START_ROW,
            weekday_ranges: layout::WEEKDAY_RANGES
                .iter()
                .map(|(weekday, start, end)| WeekdayRange {
                    weekday: *weekday,
                    start: start.to_string(),
                    end: end.to_string(),
                })
                .collect(),
        }
    }
}

impl PrepareConfig {
    /// 从 JSON 文件加载（缺省字段取默认值）并校验
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> PrepareResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            PrepareError::Config(format!("{}: {}", path.display(), e))
        })?;
        let config: PrepareConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// 查找用户配置目录下的配置文件；不存在时返回默认配置
    pub fn discover() -> PrepareResult<Self> {
        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::info!("加载配置文件: {}", path.display());
                Self::from_json_file(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// 校验配置
    ///
    /// - 起始行 >= 1
    /// - 曜日区间为合法列字母且 start <= end
    /// - 同一曜日不得重复
    pub fn validate(&self) -> PrepareResult<()> {
        if self.source_start_row == 0 || self.destination_start_row == 0 {
            return Err(PrepareError::Config("起始行必须 >= 1".to_string()));
        }
        if self.source_sheet.trim().is_empty() || self.destination_sheet.trim().is_empty() {
            return Err(PrepareError::Config("工作表名不能为空".to_string()));
        }

        let mut seen = Vec::with_capacity(self.weekday_ranges.len());
        for range in &self.weekday_ranges {
            if seen.contains(&range.weekday) {
                return Err(PrepareError::Config(format!(
                    "曜日重复: {:?}",
                    range.weekday
                )));
            }
            seen.push(range.weekday);

            if column_span(&range.start, &range.end).is_none() {
                return Err(PrepareError::Config(format!(
                    "列区间非法: {:?} {}:{}",
                    range.weekday, range.start, range.end
                )));
            }
        }
        Ok(())
    }

    /// 查询曜日对应的列区间
    pub fn range_for(&self, weekday: Weekday) -> Option<&WeekdayRange> {
        self.weekday_ranges.iter().find(|r| r.weekday == weekday)
    }
}

/// 用户配置目录下的配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}
