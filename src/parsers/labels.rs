//! # 标签/元数据提取器
//!
//! 从 `.BAND` / `.DOSS` 文件的注释行中提取坐标轴标签、刻度与标题。
//!
//! ## 规则
//! - 刻度标签与刻度位置按文件顺序累积
//! - 标题、坐标轴标签以最后一条匹配行为准
//! - 能带图的 x 轴标签固定为 `k-points`
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `regex` 匹配标记与引号字符串

use crate::error::{BsDosError, Result};
use crate::parsers::table::is_comment_line;

use regex::Regex;
use std::sync::OnceLock;

/// 能带图固定 x 轴标签
pub const BAND_X_LABEL: &str = "k-points";
/// 能带图缺省标题
pub const DEFAULT_BAND_TITLE: &str = "Band Structure";
/// 态密度图固定标题
pub const DOS_TITLE: &str = "Density of States";
/// 缺省能量轴标签
pub const DEFAULT_ENERGY_LABEL: &str = "ENERGY (HARTREE)";
/// 缺省态密度轴标签
pub const DEFAULT_DOS_LABEL: &str = "DoS";

/// 能带文件标签集合
#[derive(Debug, Clone, PartialEq)]
pub struct BandLabels {
    /// 刻度标签（已去除引号）
    pub tick_labels: Vec<String>,
    /// 刻度位置
    pub tick_positions: Vec<f64>,
    pub x_label: String,
    pub y_label: String,
    pub title: String,
}

/// 态密度文件标签集合
#[derive(Debug, Clone, PartialEq)]
pub struct DosLabels {
    /// 能量轴标签
    pub x_label: String,
    /// 态密度轴标签
    pub y_label: String,
    pub title: String,
}

struct Patterns {
    tick_label: Regex,
    tick: Regex,
    x_label: Regex,
    y_label: Regex,
    title: Regex,
    quoted: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        tick_label: Regex::new(r"XAXIS\s+TICKLABEL\b").unwrap(),
        tick: Regex::new(r"XAXIS\s+TICK\s+(.+)$").unwrap(),
        x_label: Regex::new(r"XAXIS\s+LABEL\s").unwrap(),
        y_label: Regex::new(r"YAXIS\s+LABEL\s").unwrap(),
        title: Regex::new(r"(?:^|[\s@#])TITLE\s").unwrap(),
        quoted: Regex::new(r#""([^"]*)""#).unwrap(),
    })
}

/// 提取行内最后一个引号字符串
fn last_quoted(line: &str) -> Option<String> {
    patterns()
        .quoted
        .captures_iter(line)
        .last()
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// 解析刻度位置行
///
/// `XAXIS TICK SPEC 5` 之类的关键字行返回 `Ok(None)`；`MAJOR` 行取末尾数值。
fn parse_tick_position(args: &str) -> std::result::Result<Option<f64>, String> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    let first = match tokens.first() {
        Some(t) => *t,
        None => return Ok(None),
    };

    let is_keyword = first.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
    if is_keyword && !first.eq_ignore_ascii_case("MAJOR") {
        return Ok(None);
    }

    let last = tokens.last().copied().unwrap_or(first).trim_end_matches(',');
    last.parse::<f64>()
        .map(Some)
        .map_err(|_| format!("invalid tick position '{}'", last))
}

/// 解析能带文件标签
pub fn parse_band_labels(content: &str, source_name: &str) -> Result<BandLabels> {
    let p = patterns();

    let mut tick_labels = Vec::new();
    let mut tick_positions = Vec::new();
    let mut y_label = None;
    let mut title = None;

    for (idx, line) in content.lines().enumerate() {
        if !is_comment_line(line) {
            continue;
        }

        if p.tick_label.is_match(line) {
            // 无引号的 `XAXIS TICKLABEL ON` 等为关键字行
            if let Some(label) = last_quoted(line) {
                tick_labels.push(label);
            }
        } else if let Some(caps) = p.tick.captures(line) {
            let args = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            match parse_tick_position(args) {
                Ok(Some(pos)) => tick_positions.push(pos),
                Ok(None) => {}
                Err(reason) => {
                    return Err(BsDosError::ParseError {
                        format: "BAND".to_string(),
                        path: source_name.to_string(),
                        line: idx + 1,
                        reason,
                    })
                }
            }
        } else if p.y_label.is_match(line) {
            if let Some(label) = last_quoted(line) {
                y_label = Some(label);
            }
        } else if p.title.is_match(line) {
            if let Some(t) = last_quoted(line) {
                title = Some(t);
            }
        }
    }

    Ok(BandLabels {
        tick_labels,
        tick_positions,
        x_label: BAND_X_LABEL.to_string(),
        y_label: y_label.unwrap_or_else(|| DEFAULT_ENERGY_LABEL.to_string()),
        title: title.unwrap_or_else(|| DEFAULT_BAND_TITLE.to_string()),
    })
}

/// 解析态密度文件标签
pub fn parse_dos_labels(content: &str) -> DosLabels {
    let p = patterns();

    let mut x_label = None;
    let mut y_label = None;

    for line in content.lines().filter(|l| is_comment_line(l)) {
        if p.x_label.is_match(line) {
            if let Some(label) = last_quoted(line) {
                x_label = Some(label);
            }
        } else if p.y_label.is_match(line) {
            if let Some(label) = last_quoted(line) {
                y_label = Some(label.replace("DENSITY OF STATES", "DoS"));
            }
        }
    }

    DosLabels {
        x_label: x_label.unwrap_or_else(|| DEFAULT_ENERGY_LABEL.to_string()),
        y_label: y_label.unwrap_or_else(|| DEFAULT_DOS_LABEL.to_string()),
        title: DOS_TITLE.to_string(),
    }
}
