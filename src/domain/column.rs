// ==========================================
// 納品数シート作成 - 列字母换算
// ==========================================
// 列号均为 1 起始（A = 1）
// ==========================================

/// 列字母 → 列号（"A" → 1, "AN" → 40）
///
/// 非字母或空串返回 None
pub fn column_index(letters: &str) -> Option<u32> {
    let letters = letters.trim();
    if letters.is_empty() {
        return None;
    }

    let mut index: u32 = 0;
    for ch in letters.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let digit = (ch.to_ascii_uppercase() as u32) - ('A' as u32) + 1;
        index = index.checked_mul(26)?.checked_add(digit)?;
    }
    Some(index)
}

/// 列号 → 列字母（1 → "A", 28 → "AB"）
pub fn column_letter(index: u32) -> String {
    let mut n = index;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// 闭区间列字母序列（"H", "M" → H I J K L M）
pub fn column_span(start: &str, end: &str) -> Option<Vec<String>> {
    let first = column_index(start)?;
    let last = column_index(end)?;
    if first > last {
        return None;
    }
    Some((first..=last).map(column_letter).collect())
}
