//! # 数据导出
//!
//! 将变换后的能带/态密度列数据以及文件摘要导出为 CSV。
//!
//! ## 依赖关系
//! - 被 `commands/plot/`, `commands/inspect.rs` 调用
//! - 使用 `csv` 库写入，`serde` 序列化摘要行

use crate::error::{BsDosError, Result};
use crate::models::{BandStructure, DensityOfStates};

use serde::Serialize;
use std::ops::RangeInclusive;
use std::path::Path;

/// 文件摘要（`info` 子命令的一行）
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub file: String,
    pub kind: String,
    pub rows: usize,
    pub series: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub fermi_hartree: Option<f64>,
}

fn write_columns(
    output_path: &Path,
    header: Vec<String>,
    axis: &[f64],
    series: &[Vec<f64>],
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    wtr.write_record(&header)?;

    for (row, x) in axis.iter().enumerate() {
        let mut record = Vec::with_capacity(series.len() + 1);
        record.push(format!("{:.8}", x));
        record.extend(
            series
                .iter()
                .map(|s| s.get(row).map(|v| format!("{:.8}", v)).unwrap_or_default()),
        );
        wtr.write_record(&record)?;
    }

    wtr.flush().map_err(|e| BsDosError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}

/// 导出所选能带
pub fn band_to_csv(bs: &BandStructure, bands: &RangeInclusive<usize>, output_path: &Path) -> Result<()> {
    let header = std::iter::once(bs.labels.x_label.clone())
        .chain(bands.clone().map(|n| format!("band_{}", n)))
        .collect();

    write_columns(output_path, header, &bs.kpoints, bs.selected(bands))
}

/// 导出态密度
pub fn dos_to_csv(dos: &DensityOfStates, output_path: &Path) -> Result<()> {
    let header = std::iter::once(dos.labels.x_label.clone())
        .chain((1..=dos.projection_count()).map(|n| format!("dos_{}", n)))
        .collect();

    write_columns(output_path, header, &dos.energies, &dos.densities)
}

/// 导出摘要表
pub fn summaries_to_csv(rows: &[DatasetSummary], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(|e| BsDosError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers;
    use std::fs;

    const BAND: &str = "@ YAXIS LABEL \"E (HARTREE)\"\n0.0 -0.5 0.1 0.2\n1.0 -0.4 0.2 0.3\n";

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("bsdos_export_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_band_to_csv_writes_selected_bands() {
        let bs = parsers::parse_band_content(BAND, "t.BAND").unwrap();
        let path = temp_path("bands.csv");

        band_to_csv(&bs, &(2..=3), &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "k-points,band_2,band_3");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("0.00000000,0.10000000"));
    }

    #[test]
    fn test_summaries_to_csv_has_header() {
        let path = temp_path("summary.csv");
        let row = DatasetSummary {
            file: "a.BAND".to_string(),
            kind: "band structure".to_string(),
            rows: 2,
            series: 3,
            x_min: 0.0,
            x_max: 1.0,
            y_min: -0.5,
            y_max: 0.3,
            fermi_hartree: None,
        };

        summaries_to_csv(&[row], &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(text.starts_with("file,kind,rows,series,x_min,x_max,y_min,y_max,fermi_hartree"));
    }
}
