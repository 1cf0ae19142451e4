//! # 能带选择
//!
//! 解析并校验要绘制的能带范围（从 1 开始计数，闭区间）。
//!
//! ## 输入格式
//! - 空字符串：全部能带
//! - `n`：单条能带
//! - `a,b` / `a-b` / `a b`：闭区间
//!
//! ## 依赖关系
//! - 被 `cli/plot.rs`, `commands/plot/`, `commands/interactive.rs` 使用

use crate::error::{BsDosError, Result};

use std::ops::RangeInclusive;
use std::str::FromStr;

/// 能带选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BandSelection {
    #[default]
    All,
    Single(usize),
    Range(usize, usize),
}

impl BandSelection {
    /// 由 0、1 或 2 个数值构造
    pub fn from_values(values: &[usize]) -> Result<Self> {
        match values {
            [] => Ok(BandSelection::All),
            [n] => Ok(BandSelection::Single(*n)),
            [first, last] => Ok(BandSelection::Range(*first, *last)),
            _ => Err(BsDosError::TooManyBandArguments(format!("{:?}", values))),
        }
    }

    /// 对照文件中的能带数校验，返回 1 起始的闭区间
    pub fn resolve(&self, available: usize) -> Result<RangeInclusive<usize>> {
        let (first, last) = match *self {
            BandSelection::All => (1, available),
            BandSelection::Single(n) => (n, n),
            BandSelection::Range(a, b) => (a, b),
        };

        if last > available {
            return Err(BsDosError::BandOutOfRange {
                requested: last,
                available,
            });
        }
        if first < 1 {
            return Err(BsDosError::BandBelowOne);
        }
        if first > last {
            return Err(BsDosError::InvalidRange(format!("{}-{}", first, last)));
        }

        Ok(first..=last)
    }
}

impl FromStr for BandSelection {
    type Err = BsDosError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        // "2-5" 形式；首字符的负号不算分隔符
        if parts.len() == 1 {
            let single = parts[0];
            if let Some(pos) = single.get(1..).and_then(|rest| rest.find('-')) {
                parts = vec![&single[..pos + 1], &single[pos + 2..]];
            }
        }

        if parts.len() > 2 {
            return Err(BsDosError::TooManyBandArguments(s.to_string()));
        }

        let values = parts
            .iter()
            .map(|p| {
                let n: i64 = p.trim().parse().map_err(|_| {
                    BsDosError::InvalidArgument(format!("band index '{}' is not an integer", p))
                })?;
                if n < 1 {
                    return Err(BsDosError::BandBelowOne);
                }
                Ok(n as usize)
            })
            .collect::<Result<Vec<usize>>>()?;

        BandSelection::from_values(&values)
    }
}

impl std::fmt::Display for BandSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BandSelection::All => write!(f, "all"),
            BandSelection::Single(n) => write!(f, "{}", n),
            BandSelection::Range(a, b) => write!(f, "{}-{}", a, b),
        }
    }
}

/// clap value_parser
pub fn parse_band_selection(s: &str) -> std::result::Result<BandSelection, String> {
    s.parse().map_err(|e: BsDosError| e.to_string())
}
