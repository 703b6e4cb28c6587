use super::key::{SortKey, TIER_BOX};
use crate::domain::ExtractedRow;
use std::cmp::Ordering;

// ==========================================
// PrioritySorter - 出力順排序引擎
// ==========================================
pub struct PrioritySorter {
    // 无状态引擎,不需要注入依赖
}

impl Default for PrioritySorter {
    fn default() -> Self {
        Self::new()
    }
}

impl PrioritySorter {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 排序商品行
    ///
    /// 排序键先整体预计算，再做稳定排序；
    /// 三键全相同的行保持源表相对顺序。
    ///
    /// # 参数
    /// - `rows`: 过滤后的商品行
    ///
    /// # 返回
    /// 排序后的商品行
    pub fn sort(&self, rows: Vec<ExtractedRow>) -> Vec<ExtractedRow> {
        let mut keyed: Vec<(SortKey, ExtractedRow)> = rows
            .into_iter()
            .map(|row| (SortKey::of_row(&row), row))
            .collect();

        // slice::sort_by 为稳定排序（归并）
        keyed.sort_by(|a, b| a.0.cmp(&b.0));

        let box_rows = keyed.iter().filter(|(k, _)| k.tier == TIER_BOX).count();
        tracing::debug!("排序完成: 共 {} 行，其中箱物 {} 行", keyed.len(), box_rows);

        keyed.into_iter().map(|(_, row)| row).collect()
    }

    /// 比较两行的出力顺序
    ///
    /// Ordering::Less 表示 a 排在 b 之前
    pub fn compare(&self, a: &ExtractedRow, b: &ExtractedRow) -> Ordering {
        SortKey::of_row(a).cmp(&SortKey::of_row(b))
    }

    /// 计算单行排序键
    pub fn sort_key(&self, row: &ExtractedRow) -> SortKey {
        SortKey::of_row(row)
    }
}
