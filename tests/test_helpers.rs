// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 用 umya 生成夹具工作簿（在庫集計表 + 納品数）到临时目录
// 源表: 1~7 行表头，8 行起数据；月曜区间 H:M
// 目标表: 1~4 行表头，5 行为样式模板，6~9 行为上次残留
// ==========================================
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use umya_spreadsheet::{Spreadsheet, Worksheet};

pub const SOURCE_SHEET: &str = "在庫集計表";
pub const DESTINATION_SHEET: &str = "納品数";
pub const NOTES_SHEET: &str = "メモ";

/// 2024-06-03 月曜
pub const MONDAY: &str = "2024-06-03";
/// 2024-06-02 日曜
pub const SUNDAY: &str = "2024-06-02";

/// 模板行高
pub const TEMPLATE_HEIGHT: f64 = 24.0;
/// 残留行高
pub const STALE_HEIGHT: f64 = 40.0;

// ==========================================
// SourceRow - 源表一行
// ==========================================
// 月曜区间 H..M: H 前日在庫 / J 出库 / L 入库 / M 納品数，I 与 K 固定为 0
#[derive(Debug, Clone)]
pub struct SourceRow {
    pub code: Option<f64>,
    pub name: String,
    /// AN 箱/こ/不
    pub unit_flag: String,
    /// AQ 荷受
    pub receiving: String,
    pub opening: Option<f64>,
    pub outgoing: Option<f64>,
    pub incoming: Option<f64>,
    pub quantity: Option<f64>,
    /// 区间内以文本覆盖的格子 (列号, 文本)
    pub range_text: Vec<(u32, String)>,
}

impl SourceRow {
    pub fn new(code: f64, name: &str) -> Self {
        Self {
            code: Some(code),
            name: name.to_string(),
            unit_flag: "こ".to_string(),
            receiving: String::new(),
            opening: Some(10.0),
            outgoing: Some(1.0),
            incoming: Some(1.0),
            quantity: Some(1.0),
            range_text: Vec::new(),
        }
    }

    /// 商品コード为空的行
    pub fn blank_code(name: &str) -> Self {
        Self {
            code: None,
            ..Self::new(0.0, name)
        }
    }

    pub fn opening(mut self, opening: f64) -> Self {
        self.opening = Some(opening);
        self
    }

    pub fn movement(mut self, outgoing: f64, incoming: f64) -> Self {
        self.outgoing = Some(outgoing);
        self.incoming = Some(incoming);
        self
    }

    /// 入库留空
    pub fn no_incoming(mut self) -> Self {
        self.incoming = None;
        self
    }

    /// 只设 AN；区间内容不变
    pub fn boxed(mut self) -> Self {
        self.unit_flag = "箱".to_string();
        self
    }

    pub fn quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn receiving(mut self, receiving: &str) -> Self {
        self.receiving = receiving.to_string();
        self
    }

    /// 在区间某列写文本（覆盖数值）
    pub fn range_text(mut self, col: u32, text: &str) -> Self {
        self.range_text.push((col, text.to_string()));
        self
    }
}

// ==========================================
// 夹具生成
// ==========================================

/// 标准三商品夹具：箱物 1 行 / 普通 1 行 / 无出入库 1 行 / 空コード 1 行
pub fn standard_rows() -> Vec<SourceRow> {
    vec![
        SourceRow::new(1001.0, "□普通品").movement(5.0, 2.0).quantity(5.0),
        SourceRow::new(1002.0, "■動かない品").movement(0.0, 0.0).quantity(0.0),
        SourceRow::new(1003.0, "箱入り品")
            .opening(8.0)
            .movement(2.0, 1.0)
            .quantity(3.0)
            .boxed()
            .receiving("○"),
        SourceRow::blank_code("コードなし"),
    ]
}

/// 生成夹具工作簿，返回路径
pub fn write_fixture(dir: &Path, file_name: &str, rows: &[SourceRow]) -> PathBuf {
    write_book(dir, file_name, rows, None)
}

/// 带 VBA 工程的夹具
pub fn write_fixture_with_macros(
    dir: &Path,
    file_name: &str,
    rows: &[SourceRow],
    macros: &[u8],
) -> PathBuf {
    write_book(dir, file_name, rows, Some(macros))
}

fn write_book(dir: &Path, file_name: &str, rows: &[SourceRow], macros: Option<&[u8]>) -> PathBuf {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();
    if let Some(code) = macros {
        book.set_macros_code(code.to_vec());
    }

    {
        let ws = add_sheet(&mut book, SOURCE_SHEET);
        fill_source(ws, rows);
    }
    {
        let ws = add_sheet(&mut book, DESTINATION_SHEET);
        fill_destination(ws);
    }
    {
        let ws = add_sheet(&mut book, NOTES_SHEET);
        ws.get_cell_mut("A1").set_value_string("keep me");
    }

    let path = dir.join(file_name);
    umya_spreadsheet::writer::xlsx::write(&book, &path).unwrap();
    path
}

fn add_sheet<'a>(book: &'a mut Spreadsheet, name: &str) -> &'a mut Worksheet {
    book.new_sheet(name).unwrap()
}

fn fill_source(ws: &mut Worksheet, rows: &[SourceRow]) {
    ws.get_cell_mut("A1").set_value_string("在庫集計表");
    ws.get_cell_mut("H7").set_value_string("月");

    for (row, source) in (8u32..).zip(rows) {
        if let Some(code) = source.code {
            ws.get_cell_mut((1, row)).set_value_number(code);
        }
        ws.get_cell_mut((2, row)).set_value_string(source.name.clone());
        // AN = 40, AQ = 43
        ws.get_cell_mut((40, row)).set_value_string(source.unit_flag.clone());
        if !source.receiving.is_empty() {
            ws.get_cell_mut((43, row)).set_value_string(source.receiving.clone());
        }

        // H=8 .. M=13
        let numbers = [
            (8, source.opening),
            (9, Some(0.0)),
            (10, source.outgoing),
            (11, Some(0.0)),
            (12, source.incoming),
            (13, source.quantity),
        ];
        for (col, v) in numbers {
            if let Some(v) = v {
                ws.get_cell_mut((col, row)).set_value_number(v);
            }
        }
        for (col, text) in &source.range_text {
            ws.get_cell_mut((*col, row)).set_value_string(text.clone());
        }
    }
}

fn fill_destination(ws: &mut Worksheet) {
    ws.get_cell_mut("A1").set_value_string("納品数");
    ws.get_cell_mut("A4").set_value_string("商品コード");
    ws.get_cell_mut("B4").set_value_string("商品名");

    for col in 1..=13u32 {
        let style = ws.get_style_mut((col, 5));
        style.get_font_mut().set_bold(true);
        style.set_background_color("FFFFFF00");
    }
    ws.get_row_dimension_mut(&5).set_height(TEMPLATE_HEIGHT);

    for row in 6..=9u32 {
        ws.get_cell_mut((1, row)).set_value_string("OLD");
        ws.get_cell_mut((11, row)).set_formula("1+1");
        ws.get_style_mut((2, row)).set_background_color("FFFF0000");
        ws.get_row_dimension_mut(&row).set_height(STALE_HEIGHT);
    }
}

// ==========================================
// 读取结果
// ==========================================

pub fn open_book(path: &Path) -> Spreadsheet {
    umya_spreadsheet::reader::xlsx::read(path).unwrap()
}

/// 工作簿内的 VBA 工程字节
pub fn macros_of(path: &Path) -> Option<Vec<u8>> {
    open_book(path).get_macros_code().map(|c| c.to_vec())
}

pub fn sheet<'a>(book: &'a Spreadsheet, name: &str) -> &'a Worksheet {
    book.get_sheet_by_name(name).unwrap()
}

pub fn value(ws: &Worksheet, coordinate: &str) -> String {
    ws.get_value(coordinate)
}

pub fn formula(ws: &Worksheet, coordinate: &str) -> String {
    ws.get_cell(coordinate)
        .map(|c| c.get_formula().to_string())
        .unwrap_or_default()
}

/// 打印区域地址（工作表级或工作簿级定义名称）
pub fn print_area(book: &Spreadsheet, ws: &Worksheet) -> Option<String> {
    ws.get_defined_names()
        .iter()
        .chain(book.get_defined_names().iter())
        .find(|d| d.get_name() == "_xlnm.Print_Area")
        .map(|d| d.get_address())
}

/// 目标表 A1:M{last_row} 的值与公式快照
pub fn destination_snapshot(path: &Path, last_row: u32) -> Vec<(String, String)> {
    let book = open_book(path);
    let ws = sheet(&book, DESTINATION_SHEET);
    let mut cells = Vec::new();
    for row in 1..=last_row {
        for col in 1..=13u32 {
            let (v, f) = match ws.get_cell((col, row)) {
                Some(cell) => (cell.get_value().to_string(), cell.get_formula().to_string()),
                None => (String::new(), String::new()),
            };
            cells.push((v, f));
        }
    }
    cells
}
