//! # 解析器模块
//!
//! 解析 CRYSTAL 输出的 xmgrace 风格 `.BAND` / `.DOSS` 文件。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 构造 `models/` 数据集
//! - 子模块: table, labels, fermi

pub mod fermi;
pub mod labels;
pub mod table;

use crate::error::{BsDosError, Result};
use crate::models::{BandStructure, DensityOfStates};

use std::fs;
use std::path::Path;

/// 数据文件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    /// 能带结构 (.BAND)
    Band,
    /// 态密度 (.DOSS)
    Dos,
}

impl DataKind {
    /// 按扩展名推断类型（不区分大小写）
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "band" | "bnd" => Ok(DataKind::Band),
            "doss" | "dos" => Ok(DataKind::Dos),
            _ => Err(BsDosError::UnknownDataKind(path.display().to_string())),
        }
    }

    /// 错误信息中使用的格式名
    pub fn format_name(self) -> &'static str {
        match self {
            DataKind::Band => "BAND",
            DataKind::Dos => "DOSS",
        }
    }
}

impl std::fmt::Display for DataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataKind::Band => write!(f, "band structure"),
            DataKind::Dos => write!(f, "density of states"),
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(BsDosError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    fs::read_to_string(path).map_err(|e| BsDosError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 读取能带结构文件
pub fn load_band_structure(path: &Path) -> Result<BandStructure> {
    let content = read_file(path)?;
    parse_band_content(&content, &path.display().to_string())
}

/// 解析能带结构文本
pub fn parse_band_content(content: &str, source_name: &str) -> Result<BandStructure> {
    let columns = table::parse_table_content(content, DataKind::Band.format_name(), source_name)?;
    let labels = labels::parse_band_labels(content, source_name)?;
    let fermi_hartree =
        fermi::parse_fermi_content(content, DataKind::Band.format_name(), source_name)?;

    Ok(BandStructure {
        source: source_name.to_string(),
        kpoints: columns.axis,
        bands: columns.series,
        labels,
        fermi_hartree,
    })
}

/// 读取态密度文件
pub fn load_density_of_states(path: &Path) -> Result<DensityOfStates> {
    let content = read_file(path)?;
    parse_dos_content(&content, &path.display().to_string())
}

/// 解析态密度文本
pub fn parse_dos_content(content: &str, source_name: &str) -> Result<DensityOfStates> {
    let columns = table::parse_table_content(content, DataKind::Dos.format_name(), source_name)?;
    let fermi_hartree =
        fermi::parse_fermi_content(content, DataKind::Dos.format_name(), source_name)?;

    Ok(DensityOfStates {
        source: source_name.to_string(),
        energies: columns.axis,
        densities: columns.series,
        labels: labels::parse_dos_labels(content),
        fermi_hartree,
    })
}
