//! # batch 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use crate::cli::plot::{EnergyArgs, ImageFormat};

use clap::Args;
use std::path::PathBuf;

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Directory containing .BAND/.DOSS files
    pub input: PathBuf,

    /// Output directory for the images
    #[arg(short, long, default_value = "plots")]
    pub output: PathBuf,

    /// Glob patterns for input files, comma separated (case-insensitive)
    #[arg(long, default_value = "*.BAND,*.DOSS")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Image format
    #[arg(short, long, value_enum, default_value = "png")]
    pub format: ImageFormat,

    /// Figure width in pixels (PNG) or points (SVG)
    #[arg(long)]
    pub width: Option<u32>,

    /// Figure height in pixels (PNG) or points (SVG)
    #[arg(long)]
    pub height: Option<u32>,

    #[command(flatten)]
    pub energy: EnergyArgs,
}
