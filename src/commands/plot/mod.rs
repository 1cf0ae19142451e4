//! # 绘图子命令公共逻辑
//!
//! 输出路径推断、费米能获取、收尾（保存提示 / CSV 导出 / 打开查看器）。
//!
//! ## 依赖关系
//! - 被 `commands/plot/{bs,dos,both}.rs`, `commands/batch.rs` 使用
//! - 使用 `plot/` 绘图，`export.rs` 导出

pub mod both;
pub mod bs;
pub mod dos;

use crate::cli::plot::RenderArgs;
use crate::error::{BsDosError, Result};
use crate::models::{BandSelection, EnergyTransform};
use crate::plot::{self, Canvas};
use crate::utils::{output, viewer};

use std::path::{Path, PathBuf};

/// 默认输出名：输入文件同目录下 `<stem><suffix>`
pub(crate) fn default_output(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("plot");
    input.with_file_name(format!("{}{}", stem, suffix))
}

/// 最终图像路径
pub(crate) fn resolve_output(
    render: &RenderArgs,
    input: &Path,
    suffix: &str,
    canvas: &Canvas,
) -> PathBuf {
    let name = render
        .output
        .clone()
        .unwrap_or_else(|| default_output(input, suffix));
    plot::output_path(&name, canvas)
}

/// 启用费米参考时必须有费米能；否则取文件值或 0
pub(crate) fn resolve_fermi(
    transform: &EnergyTransform,
    fermi_hartree: Option<f64>,
    source: &str,
) -> Result<f64> {
    match (transform.fermi_reference, fermi_hartree) {
        (true, None) => Err(BsDosError::FermiNotFound {
            path: source.to_string(),
        }),
        (_, value) => Ok(value.unwrap_or(0.0)),
    }
}

/// 保存后的统一收尾
pub(crate) fn finish(what: &str, image: &Path, show: bool) {
    output::print_saved(what, image);

    if show {
        if let Err(e) = viewer::open_image(image) {
            output::print_warning(&format!("Could not open image viewer: {}", e));
        }
    }
}

/// 打印所选能带
pub(crate) fn report_bands(selection: &BandSelection, prepared: &bs::PreparedBands) {
    output::print_info(&format!(
        "Bands: {} ({}-{} of {})",
        selection,
        prepared.bands.start(),
        prepared.bands.end(),
        prepared.data.band_count()
    ));
}

/// 打印 CSV 导出结果
pub(crate) fn report_export(path: &Path) {
    output::print_saved("Data", path);
}
