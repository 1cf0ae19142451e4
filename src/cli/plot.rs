//! # 绘图子命令 CLI 定义
//!
//! `bs`、`dos`、`both` 三个子命令共享能量变换与输出参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs`, `cli/batch.rs` 使用
//! - 参数传递给 `commands/plot/`

use crate::models::selection::{parse_band_selection, BandSelection};
use crate::models::EnergyTransform;
use crate::plot::Canvas;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 图像输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum ImageFormat {
    /// PNG raster image
    #[default]
    Png,
    /// SVG vector image
    Svg,
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFormat::Png => write!(f, "png"),
            ImageFormat::Svg => write!(f, "svg"),
        }
    }
}

/// 能量单位与参考能级
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct EnergyArgs {
    /// Convert energies from Hartree to eV
    #[arg(long, env = "BSDOS_EV", default_value_t = false)]
    pub ev: bool,

    /// Shift energies by the Fermi energy (absolute energy scale)
    #[arg(long, env = "BSDOS_FERMI", default_value_t = false)]
    pub fermi: bool,
}

impl EnergyArgs {
    pub fn transform(&self) -> EnergyTransform {
        EnergyTransform::new(self.fermi, self.ev)
    }
}

/// 图像输出参数
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Output image name; the format extension is appended when missing
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Image format
    #[arg(short, long, value_enum, default_value = "png")]
    pub format: ImageFormat,

    /// Figure width in pixels (PNG) or points (SVG)
    #[arg(long)]
    pub width: Option<u32>,

    /// Figure height in pixels (PNG) or points (SVG)
    #[arg(long)]
    pub height: Option<u32>,

    /// Open the saved image with the system viewer
    #[arg(long, default_value_t = false)]
    pub show: bool,

    /// Also write the plotted (transformed) columns to a CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl RenderArgs {
    /// 按默认尺寸构造画布
    pub fn canvas(&self, default_size: (u32, u32)) -> Canvas {
        let size = (
            self.width.unwrap_or(default_size.0),
            self.height.unwrap_or(default_size.1),
        );
        Canvas::new(size, self.format == ImageFormat::Svg)
    }
}

/// bs 子命令参数
#[derive(Args, Debug, Clone)]
pub struct BsArgs {
    /// Band structure file (.BAND)
    pub input: PathBuf,

    /// Bands to plot: "3", "2,8" or "2-8" (default: all)
    #[arg(short, long, value_parser = parse_band_selection)]
    pub bands: Option<BandSelection>,

    /// Plot title (default: "Band Structure")
    #[arg(short, long)]
    pub title: Option<String>,

    #[command(flatten)]
    pub energy: EnergyArgs,

    #[command(flatten)]
    pub render: RenderArgs,
}

/// dos 子命令参数
#[derive(Args, Debug, Clone)]
pub struct DosArgs {
    /// Density of states file (.DOSS)
    pub input: PathBuf,

    /// Plot title (default: "Density of States")
    #[arg(short, long)]
    pub title: Option<String>,

    #[command(flatten)]
    pub energy: EnergyArgs,

    #[command(flatten)]
    pub render: RenderArgs,
}

/// both 子命令参数
#[derive(Args, Debug, Clone)]
pub struct BothArgs {
    /// Band structure file (.BAND); its Fermi energy is used for both panels
    pub band_input: PathBuf,

    /// Density of states file (.DOSS)
    pub dos_input: PathBuf,

    /// Bands to plot: "3", "2,8" or "2-8" (default: all)
    #[arg(short, long, value_parser = parse_band_selection)]
    pub bands: Option<BandSelection>,

    /// Band structure panel title
    #[arg(long)]
    pub bs_title: Option<String>,

    /// Density of states panel title
    #[arg(long)]
    pub dos_title: Option<String>,

    #[command(flatten)]
    pub energy: EnergyArgs,

    #[command(flatten)]
    pub render: RenderArgs,
}
