// ==========================================
// 納品数シート作成 - 固定版式常量
// ==========================================
// 职责: 工作表名、起始行、固定列、曜日列区间、标记字符、
//       打印设置、输出命名
// 红线: 进程级只读常量，无生命周期
// ==========================================

use chrono::Weekday;

// ===== 工作表 =====

/// 源工作表（在庫集計表）
pub const SOURCE_SHEET: &str = "在庫集計表";
/// 目标工作表（納品数）
pub const DESTINATION_SHEET: &str = "納品数";

/// 源表数据起始行（1 起始，前 7 行为表头）
pub const SOURCE_DATA_START_ROW: u32 = 8;
/// 目标表数据起始行（1 起始，同时作为样式模板行）
pub const DESTINATION_DATA_START_ROW: u32 = 5;

// ===== 列 =====

/// 固定前导列及其字段标签
pub const FIXED_COLUMNS: [(&str, &str); 4] = [
    ("A", "商品コード"),
    ("B", "商品名"),
    ("AN", "箱/こ/不"),
    ("AQ", "荷受"),
];

/// 曜日区间末列的字段标签
pub const QUANTITY_LABEL: &str = "納品数";

/// 曜日 → 列区间（含两端：起止相差 5 列，共 6 列；相邻曜日共用边界列）
pub const WEEKDAY_RANGES: [(Weekday, &str, &str); 6] = [
    (Weekday::Mon, "H", "M"),
    (Weekday::Tue, "M", "R"),
    (Weekday::Wed, "R", "W"),
    (Weekday::Thu, "W", "AB"),
    (Weekday::Fri, "AB", "AG"),
    (Weekday::Sat, "AG", "AL"),
];

// ===== 标记字符 =====

/// 箱物标记（排序首键）
pub const BOX_MARKER: &str = "箱";
/// 商品名前缀：黑方块
pub const FILLED_SQUARE: char = '■';
/// 商品名前缀：白方块
pub const HOLLOW_SQUARE: char = '□';

// ===== 公式列 =====

/// 差引列（K，列号 11）
pub const BALANCE_COLUMN: u32 = 11;
/// 区分列（M，列号 13）
pub const ROUTING_COLUMN: u32 = 13;

// ===== 打印设置 =====

/// 打印区域首列
pub const PRINT_FIRST_COLUMN: &str = "A";
/// 打印区域末列
pub const PRINT_LAST_COLUMN: &str = "M";
pub const MARGIN_TOP: f64 = 0.4;
pub const MARGIN_BOTTOM: f64 = 0.4;
pub const MARGIN_LEFT: f64 = 0.3;
pub const MARGIN_RIGHT: f64 = 0.3;

// ===== 输出命名 =====

/// 输出文件名后缀（<stem>_prepared.<ext>）
pub const OUTPUT_SUFFIX: &str = "_prepared";
/// 重名探测上限（_prepared(1) ~ _prepared(99)）
pub const MAX_OUTPUT_ATTEMPTS: u32 = 99;
/// 下载文件名后缀（YYYYMMDD納品.<ext>）
pub const DOWNLOAD_SUFFIX: &str = "納品";
/// 缺省输入文件
pub const DEFAULT_SOURCE_FILE: &str = "集計表.xlsm";
