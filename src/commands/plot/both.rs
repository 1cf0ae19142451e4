//! # both 子命令实现
//!
//! 能带结构与态密度并排绘制，共享能量轴；两侧都使用能带文件的费米能。
//!
//! ## 依赖关系
//! - 使用 `cli/plot.rs` 定义的 BothArgs
//! - 复用 `commands/plot/bs.rs` 与 `commands/plot/dos.rs` 的数据准备

use super::{bs, dos, finish, report_bands, report_export, resolve_output};
use crate::cli::plot::BothArgs;
use crate::error::Result;
use crate::export;
use crate::models::{BandSelection, EnergyTransform};
use crate::parsers::{self, labels::DEFAULT_BAND_TITLE};
use crate::plot::{self, style, SideBySideFigure};

use std::path::{Path, PathBuf};

/// 读取两份数据，DoS 使用能带文件的费米能
pub(crate) fn prepare(
    band_input: &Path,
    dos_input: &Path,
    selection: &BandSelection,
    transform: &EnergyTransform,
) -> Result<(bs::PreparedBands, dos::PreparedDos)> {
    let bands = bs::prepare(band_input, selection, transform)?;

    let dos_data = parsers::load_density_of_states(dos_input)?;
    let source = band_input.display().to_string();
    let dos = dos::prepare_with_fermi(dos_data, transform, bands.data.fermi_hartree, &source)?;

    Ok((bands, dos))
}

/// CSV 导出：能带写入给定路径，态密度写入 `<stem>_dos.csv`
fn dos_export_path(csv: &Path) -> PathBuf {
    let stem = csv.file_stem().and_then(|s| s.to_str()).unwrap_or("export");
    csv.with_file_name(format!("{}_dos.csv", stem))
}

/// 执行 both 子命令
pub fn execute(args: BothArgs) -> Result<()> {
    let selection = args.bands.unwrap_or_default();
    let transform = args.energy.transform();
    let (bands, dos) = prepare(&args.band_input, &args.dos_input, &selection, &transform)?;
    report_bands(&selection, &bands);

    let canvas = args.render.canvas(style::SIDE_BY_SIDE_SIZE);
    let image = resolve_output(&args.render, &args.band_input, "_bs_dos", &canvas);

    let band_title = args
        .bs_title
        .clone()
        .unwrap_or_else(|| DEFAULT_BAND_TITLE.to_string());
    let dos_title = dos.title_or_default(args.dos_title.as_deref());

    let figure = SideBySideFigure {
        band: bands.figure(band_title),
        dos: dos.figure(dos_title),
    };
    plot::save(&figure, &image, &canvas)?;

    if let Some(csv) = &args.render.export {
        export::band_to_csv(&bands.data, &bands.bands, csv)?;
        report_export(csv);
        let dos_csv = dos_export_path(csv);
        export::dos_to_csv(&dos.data, &dos_csv)?;
        report_export(&dos_csv);
    }

    finish("Band structure + DoS", &image, args.render.show);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_dos_export_path() {
        assert_eq!(
            dos_export_path(Path::new("out/mgo.csv")),
            PathBuf::from("out/mgo_dos.csv")
        );
    }

    #[test]
    fn test_dos_uses_band_fermi_energy() {
        let dir = std::env::temp_dir();
        let band = dir.join(format!("bsdos_both_{}.BAND", std::process::id()));
        let doss = dir.join(format!("bsdos_both_{}.DOSS", std::process::id()));
        fs::write(&band, "# EFERMI -0.2\n0.0 -0.5 0.1\n1.0 -0.4 0.2\n").unwrap();
        fs::write(&doss, "# EFERMI -0.9\n-0.1 1.0\n0.1 2.0\n").unwrap();

        let (bands, dos) = prepare(
            &band,
            &doss,
            &BandSelection::All,
            &EnergyTransform::new(true, false),
        )
        .unwrap();
        fs::remove_file(&band).ok();
        fs::remove_file(&doss).ok();

        assert_eq!(bands.reference, -0.2);
        assert_eq!(dos.reference, -0.2);
        assert!((dos.data.energies[0] - (-0.3)).abs() < 1e-12);
    }
}
