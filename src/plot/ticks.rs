//! # k 点路径刻度
//!
//! 把刻度位置与标签配对，并识别固定的高对称路径
//! `(0,0,0)/6 → (3,0,0)/6 → (3,3,0)/6 → (2,2,0)/6 → (0,0,0)/6`，
//! 将其替换为 `Γ X M K Γ`。

/// 可识别的高对称路径（分数坐标标签）
pub const HIGH_SYMMETRY_PATH: [&str; 5] = [
    "(0,0,0)/6",
    "(3,0,0)/6",
    "(3,3,0)/6",
    "(2,2,0)/6",
    "(0,0,0)/6",
];

/// 对应的高对称点符号
pub const HIGH_SYMMETRY_SYMBOLS: [&str; 5] = ["Γ", "X", "M", "K", "Γ"];

/// 刻度标签的绘制方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStyle {
    /// 高对称点符号，居中
    Symbol,
    /// 原始坐标标签，右对齐
    Raw,
}

/// 计算显示用刻度标签
pub fn display_tick_labels(labels: &[String]) -> (Vec<String>, TickStyle) {
    if labels.iter().map(String::as_str).eq(HIGH_SYMMETRY_PATH) {
        let symbols = HIGH_SYMMETRY_SYMBOLS.iter().map(|s| s.to_string()).collect();
        (symbols, TickStyle::Symbol)
    } else {
        (labels.to_vec(), TickStyle::Raw)
    }
}

/// 刻度位置与标签配对；标签不足时补空串
pub fn tick_pairs(positions: &[f64], labels: &[String]) -> Vec<(f64, String)> {
    positions
        .iter()
        .enumerate()
        .map(|(i, &x)| (x, labels.get(i).cloned().unwrap_or_default()))
        .collect()
}
