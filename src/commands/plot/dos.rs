//! # dos 子命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/plot.rs` 定义的 DosArgs
//! - 被 `commands/plot/both.rs`, `commands/batch.rs`, `commands/interactive.rs` 复用

use super::{finish, report_export, resolve_fermi, resolve_output};
use crate::cli::plot::DosArgs;
use crate::error::Result;
use crate::export;
use crate::models::{DensityOfStates, EnergyTransform};
use crate::parsers;
use crate::plot::{self, style, DosFigure};

use std::path::Path;

/// 已变换、待绘制的态密度数据
pub(crate) struct PreparedDos {
    pub data: DensityOfStates,
    pub reference: f64,
}

impl PreparedDos {
    pub fn figure(&self, title: impl Into<String>) -> DosFigure<'_> {
        DosFigure::new(&self.data, self.reference, title)
    }

    /// 用户标题，缺省取文件标题
    pub fn title_or_default(&self, title: Option<&str>) -> String {
        title
            .map(str::to_string)
            .unwrap_or_else(|| self.data.labels.title.clone())
    }
}

/// 读取并用文件自身的费米能变换
pub(crate) fn prepare(input: &Path, transform: &EnergyTransform) -> Result<PreparedDos> {
    let data = parsers::load_density_of_states(input)?;
    let fermi = data.fermi_hartree;
    let source = data.source.clone();
    prepare_with_fermi(data, transform, fermi, &source)
}

/// 用给定来源的费米能变换（并排模式取能带文件的值）
pub(crate) fn prepare_with_fermi(
    mut data: DensityOfStates,
    transform: &EnergyTransform,
    fermi_hartree: Option<f64>,
    fermi_source: &str,
) -> Result<PreparedDos> {
    let fermi = resolve_fermi(transform, fermi_hartree, fermi_source)?;
    let reference = transform.apply(&mut data, fermi);
    Ok(PreparedDos { data, reference })
}

/// 执行 dos 子命令
pub fn execute(args: DosArgs) -> Result<()> {
    let transform = args.energy.transform();
    let prepared = prepare(&args.input, &transform)?;

    let canvas = args.render.canvas(style::SINGLE_PANEL_SIZE);
    let image = resolve_output(&args.render, &args.input, "_dos", &canvas);
    let title = prepared.title_or_default(args.title.as_deref());

    plot::save(&prepared.figure(title), &image, &canvas)?;

    if let Some(csv) = &args.render.export {
        export::dos_to_csv(&prepared.data, csv)?;
        report_export(csv);
    }

    finish("Density of states", &image, args.render.show);
    Ok(())
}
