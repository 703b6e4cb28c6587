use crate::config::layout::{BOX_MARKER, FILLED_SQUARE, HOLLOW_SQUARE};
use crate::domain::ExtractedRow;
use std::cmp::Ordering;

/// 箱物行序位
pub const TIER_BOX: u8 = 3;
/// 非箱物行序位
pub const TIER_STANDARD: u8 = 2;

// ==========================================
// PrefixClass - 商品名前缀分类
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrefixClass {
    FilledSquare = 0, // ■
    HollowSquare = 1, // □
    Other = 2,
    BoxTier = 3, // 箱物行不参与前缀分类
}

impl PrefixClass {
    /// 按商品名首字符分类
    pub fn of_name(name: &str) -> Self {
        match name.chars().next() {
            Some(c) if c == FILLED_SQUARE => PrefixClass::FilledSquare,
            Some(c) if c == HOLLOW_SQUARE => PrefixClass::HollowSquare,
            _ => PrefixClass::Other,
        }
    }
}

// ==========================================
// SortKey - 单行排序键
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub tier: u8,
    pub prefix_class: PrefixClass,
    pub code_key: String,
}

impl SortKey {
    pub fn of_row(row: &ExtractedRow) -> Self {
        // 箱/こ/不 列（源表 AN）
        let tier = if row.unit_flag.display_text().trim() == BOX_MARKER {
            TIER_BOX
        } else {
            TIER_STANDARD
        };

        let prefix_class = if tier == TIER_BOX {
            PrefixClass::BoxTier
        } else {
            PrefixClass::of_name(&row.name_text())
        };

        // ■ 行之间不再按商品コード区分
        let code_key = if prefix_class >= PrefixClass::HollowSquare {
            row.code_text()
        } else {
            String::new()
        };

        Self {
            tier,
            prefix_class,
            code_key,
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .tier
            .cmp(&self.tier)
            .then_with(|| self.prefix_class.cmp(&other.prefix_class))
            .then_with(|| self.code_key.cmp(&other.code_key))
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
