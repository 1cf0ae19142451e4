//! # bs 子命令实现
//!
//! 读取 `.BAND` 文件，校验能带选择，做能量变换后绘图。
//!
//! ## 依赖关系
//! - 使用 `cli/plot.rs` 定义的 BsArgs
//! - 被 `commands/batch.rs`, `commands/interactive.rs` 复用

use super::{finish, report_bands, report_export, resolve_fermi, resolve_output};
use crate::cli::plot::BsArgs;
use crate::error::Result;
use crate::export;
use crate::models::{BandSelection, BandStructure, EnergyTransform};
use crate::parsers::{self, labels::DEFAULT_BAND_TITLE};
use crate::plot::{self, style, BandFigure};

use std::ops::RangeInclusive;
use std::path::Path;

/// 已变换、待绘制的能带数据
pub(crate) struct PreparedBands {
    pub data: BandStructure,
    pub bands: RangeInclusive<usize>,
    /// 参考线能级（已换算单位）
    pub reference: f64,
}

impl PreparedBands {
    pub fn figure(&self, title: impl Into<String>) -> BandFigure<'_> {
        BandFigure::new(&self.data, self.bands.clone(), self.reference, title)
    }
}

/// 读取、校验并变换能带数据
pub(crate) fn prepare(
    input: &Path,
    selection: &BandSelection,
    transform: &EnergyTransform,
) -> Result<PreparedBands> {
    let mut data = parsers::load_band_structure(input)?;
    let bands = selection.resolve(data.band_count())?;
    let fermi = resolve_fermi(transform, data.fermi_hartree, &data.source)?;
    let reference = transform.apply(&mut data, fermi);

    Ok(PreparedBands {
        data,
        bands,
        reference,
    })
}

/// 执行 bs 子命令
pub fn execute(args: BsArgs) -> Result<()> {
    let selection = args.bands.unwrap_or_default();
    let transform = args.energy.transform();
    let prepared = prepare(&args.input, &selection, &transform)?;
    report_bands(&selection, &prepared);

    let canvas = args.render.canvas(style::SINGLE_PANEL_SIZE);
    let image = resolve_output(&args.render, &args.input, "_bs", &canvas);
    let title = args
        .title
        .clone()
        .unwrap_or_else(|| DEFAULT_BAND_TITLE.to_string());

    plot::save(&prepared.figure(title), &image, &canvas)?;

    if let Some(csv) = &args.render.export {
        export::band_to_csv(&prepared.data, &prepared.bands, csv)?;
        report_export(csv);
    }

    finish("Band structure", &image, args.render.show);
    Ok(())
}
