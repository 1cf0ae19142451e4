//! # fermi / info 子命令实现
//!
//! - `fermi`: 输出文件记录的费米能
//! - `info`: 汇总多个文件的行数、列数与数值范围
//!
//! ## 依赖关系
//! - 使用 `cli/inspect.rs` 定义的参数
//! - 使用 `parsers/`, `export.rs`

use crate::cli::inspect::{FermiArgs, InfoArgs};
use crate::error::Result;
use crate::export::{self, DatasetSummary};
use crate::models::units::EnergyUnit;
use crate::parsers::{self, fermi, DataKind};
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 摘要表格行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Rows")]
    rows: usize,
    #[tabled(rename = "Series")]
    series: usize,
    #[tabled(rename = "X range")]
    x_range: String,
    #[tabled(rename = "Y range")]
    y_range: String,
    #[tabled(rename = "EFERMI (Ha)")]
    fermi: String,
}

impl From<&DatasetSummary> for SummaryRow {
    fn from(s: &DatasetSummary) -> Self {
        Self {
            file: s.file.clone(),
            kind: s.kind.clone(),
            rows: s.rows,
            series: s.series,
            x_range: format!("{:.4} .. {:.4}", s.x_min, s.x_max),
            y_range: format!("{:.4} .. {:.4}", s.y_min, s.y_max),
            fermi: s
                .fermi_hartree
                .map(|f| format!("{:.6}", f))
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// 执行 fermi 子命令
pub fn fermi(args: FermiArgs) -> Result<()> {
    let unit = EnergyUnit::from_ev_flag(args.ev);
    let value = fermi::read_fermi_energy(&args.input, unit)?;
    println!("{}", fermi::format_fermi_energy(value, unit));
    Ok(())
}

/// 读取单个文件的摘要
pub(crate) fn summarize(path: &Path) -> Result<DatasetSummary> {
    let kind = DataKind::from_path(path)?;
    let file = path.display().to_string();

    let summary = match kind {
        DataKind::Band => {
            let bs = parsers::load_band_structure(path)?;
            let all = 1..=bs.band_count();
            let (y_min, y_max) = bs.energy_bounds(&all).unwrap_or((0.0, 0.0));
            DatasetSummary {
                file,
                kind: kind.to_string(),
                rows: bs.kpoints.len(),
                series: bs.band_count(),
                x_min: bs.kpoints.first().copied().unwrap_or(0.0),
                x_max: bs.k_max(),
                y_min,
                y_max,
                fermi_hartree: bs.fermi_hartree,
            }
        }
        DataKind::Dos => {
            let dos = parsers::load_density_of_states(path)?;
            let (x_min, x_max) = dos.energy_bounds().unwrap_or((0.0, 0.0));
            let (y_min, y_max) = dos.density_bounds().unwrap_or((0.0, 0.0));
            DatasetSummary {
                file,
                kind: kind.to_string(),
                rows: dos.energies.len(),
                series: dos.projection_count(),
                x_min,
                x_max,
                y_min,
                y_max,
                fermi_hartree: dos.fermi_hartree,
            }
        }
    };

    Ok(summary)
}

/// 执行 info 子命令
///
/// 单个文件失败只给出警告，全部失败时返回最后一个错误。
pub fn info(args: InfoArgs) -> Result<()> {
    output::print_header("Dataset Summary");

    let mut summaries = Vec::new();
    let mut last_error = None;

    for path in &args.inputs {
        match summarize(path) {
            Ok(s) => summaries.push(s),
            Err(e) => {
                output::print_warning(&format!("{}: {}", path.display(), e));
                last_error = Some(e);
            }
        }
    }

    if summaries.is_empty() {
        if let Some(e) = last_error {
            return Err(e);
        }
    }

    let rows: Vec<SummaryRow> = summaries.iter().map(SummaryRow::from).collect();
    println!("{}", Table::new(&rows));

    if let Some(csv) = &args.csv {
        export::summaries_to_csv(&summaries, csv)?;
        output::print_success(&format!("Summary saved to '{}'", csv.display()));
    }

    Ok(())
}
