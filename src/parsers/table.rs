//! # 列式数据表解析器
//!
//! 解析 `.BAND` / `.DOSS` 文件中的数值数据块。
//!
//! ## 格式
//! - 以 `@` 或 `#` 开头的行是元数据/注释，跳过
//! - 其余每行按空白分割为浮点数
//! - 行优先的表格转置为列优先：第一列为自变量，其余列为数据序列
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 的数据集加载函数使用

use crate::error::{BsDosError, Result};

/// 注释/元数据行标记
const COMMENT_MARKERS: [char; 2] = ['@', '#'];

/// 转置后的列数据
#[derive(Debug, Clone, PartialEq)]
pub struct Columns {
    /// 第一列（k 点位置或能量）
    pub axis: Vec<f64>,
    /// 其余各列
    pub series: Vec<Vec<f64>>,
}

/// 判断是否为注释行
pub fn is_comment_line(line: &str) -> bool {
    line.trim_start().starts_with(COMMENT_MARKERS)
}

/// 解析数据表文本
pub fn parse_table_content(content: &str, format: &str, source_name: &str) -> Result<Columns> {
    let parse_error = |line: usize, reason: String| BsDosError::ParseError {
        format: format.to_string(),
        path: source_name.to_string(),
        line,
        reason,
    };

    let mut columns: Vec<Vec<f64>> = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;

        if line.trim().is_empty() || is_comment_line(line) {
            continue;
        }

        let row: Vec<f64> = line
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| parse_error(line_no, format!("non-numeric token '{}'", token)))
            })
            .collect::<Result<_>>()?;

        if columns.is_empty() {
            columns = vec![Vec::new(); row.len()];
        } else if row.len() != columns.len() {
            return Err(parse_error(
                line_no,
                format!("expected {} columns, found {}", columns.len(), row.len()),
            ));
        }

        for (column, value) in columns.iter_mut().zip(row) {
            column.push(value);
        }
    }

    if columns.is_empty() {
        return Err(parse_error(0, "no data rows".to_string()));
    }
    if columns.len() < 2 {
        return Err(parse_error(
            0,
            "at least two columns are required (axis + one series)".to_string(),
        ));
    }

    let mut iter = columns.into_iter();
    let axis = iter.next().unwrap_or_default();
    let series = iter.collect();

    Ok(Columns { axis, series })
}
