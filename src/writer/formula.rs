// ==========================================
// 納品数シート作成 - 公式模板
// ==========================================
// 只生成两种固定公式，行号代入
// K 列: 差引 = C - E + G
// M 列: B 含「東一」→「東一」
//       L 含「■」→ (J 含「○」→「荷受」, 否则 -K)
//       其他 → 空
// ==========================================

/// 差引公式（K 列）
pub fn balance_formula(row: u32) -> String {
    format!("=C{r}-E{r}+G{r}", r = row)
}

/// 区分公式（M 列）
pub fn routing_formula(row: u32) -> String {
    format!(
        concat!(
            r#"=IF(COUNTIFS($B{r},"*東一*")>0,"東一","#,
            r#"IF(COUNTIF($L{r},"■")>0,"#,
            r#"IF(COUNTIF($J{r},"○")>0,"荷受",$K{r}*-1),""))"#
        ),
        r = row
    )
}
