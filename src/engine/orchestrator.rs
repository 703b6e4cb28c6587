// ==========================================
// 納品数シート作成 - 流程编排器
// ==========================================
// 用途: 串联 列映射 → 提取 → 排序 → 写入
// 顺序:
// 1. 解析交货日 + 曜日校验（日曜即失败，不读文件）
// 2. 源文件存在性校验
// 3. 读取源表 → 提取商品行 → 零数量过滤
// 4. 优先级排序
// 5. 复制源文件 → 写入納品数シート → 保存
// 红线: 失败即中止，不回滚已生成的副本
// ==========================================

use crate::config::PrepareConfig;
use crate::domain::DeliveryDate;
use crate::engine::{ColumnMapper, PrioritySorter};
use crate::error::{PrepareError, PrepareResult};
use crate::importer::{read_sheet, Extractor};
use crate::writer::{duplicate_source, DestinationWorkbook, SheetWriter, WriteSummary};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// ==========================================
// PrepareReport - 执行结果
// ==========================================

#[derive(Debug, Clone)]
pub struct PrepareReport {
    pub output_path: PathBuf,
    pub delivery_date: DeliveryDate,
    /// 零数量过滤后的商品行数
    pub rows_extracted: usize,
    pub write: WriteSummary,
}

// ==========================================
// PrepareOrchestrator - 流程编排器
// ==========================================

pub struct PrepareOrchestrator {
    config: PrepareConfig,
    sorter: PrioritySorter,
}

impl PrepareOrchestrator {
    pub fn new(config: PrepareConfig) -> Self {
        Self {
            config,
            sorter: PrioritySorter::new(),
        }
    }

    pub fn config(&self) -> &PrepareConfig {
        &self.config
    }

    /// 生成納品数シート，返回输出文件路径
    pub fn prepare<P: AsRef<Path>>(&self, source: P, date_iso: &str) -> PrepareResult<PathBuf> {
        self.run(source, date_iso).map(|report| report.output_path)
    }

    /// 执行完整流程
    ///
    /// # 返回
    /// - Err(InvalidDate / UnsupportedWeekday): 交货日非法
    /// - Err(FileNotFound): 源文件不存在
    /// - Err(OutputCreation): 99 个候选文件名均不可用
    pub fn run<P: AsRef<Path>>(&self, source: P, date_iso: &str) -> PrepareResult<PrepareReport> {
        let source = source.as_ref();

        // ==========================================
        // 步骤1: 交货日 → 列清单
        // ==========================================
        let delivery_date = DeliveryDate::parse_iso(date_iso)?;
        let selection = ColumnMapper::new(&self.config).resolve(delivery_date)?;

        // ==========================================
        // 步骤2: 源文件
        // ==========================================
        if !source.is_file() {
            return Err(PrepareError::FileNotFound(source.to_path_buf()));
        }
        info!(source = %source.display(), date = %delivery_date, "开始生成納品数シート");

        // ==========================================
        // 步骤3: 读取 + 提取
        // ==========================================
        let grid = read_sheet(source, &self.config.source_sheet)?;
        let rows = Extractor::new(self.config.source_start_row).extract(&grid, &selection);
        let rows_extracted = rows.len();

        // ==========================================
        // 步骤4: 排序
        // ==========================================
        let rows = self.sorter.sort(rows);
        debug!("排序完成: {} 行", rows.len());

        // ==========================================
        // 步骤5: 复制 + 写入
        // ==========================================
        let output_path = duplicate_source(source)?;
        let mut workbook = DestinationWorkbook::open(&output_path)?;
        let write = {
            let mut sheet = workbook.sheet_mut(&self.config.destination_sheet)?;
            SheetWriter::new(self.config.destination_start_row).write(&mut sheet, &rows)?
        };
        workbook.save()?;

        info!(output = %output_path.display(), rows = write.rows_written, "納品数シート生成完了");

        Ok(PrepareReport {
            output_path,
            delivery_date,
            rows_extracted,
            write,
        })
    }
}

impl Default for PrepareOrchestrator {
    fn default() -> Self {
        Self::new(PrepareConfig::default())
    }
}

/// 以默认配置生成納品数シート
pub fn prepare<P: AsRef<Path>>(source: P, date_iso: &str) -> PrepareResult<PathBuf> {
    PrepareOrchestrator::default().prepare(source, date_iso)
}
