// ==========================================
// 納品数シート作成 - 出力順排序引擎
// ==========================================
// 职责: 计算多键排序序位并输出新的行顺序
// 输入: 过滤后的商品行
// 输出: 排序后的商品行（稳定排序）
// ==========================================
// 排序键:
// 1) tier 降序（箱/こ/不 列为「箱」的行 3 在前，其余 2）
// 2) prefix_class 升序（■ 0 → □ 1 → 其他 2；箱物固定 3）
// 3) code_key 升序（prefix_class >= 1 时为商品コード，否则空串）
// ==========================================

mod core;
mod key;


pub use core::PrioritySorter;
pub use key::{PrefixClass, SortKey, TIER_BOX, TIER_STANDARD};
