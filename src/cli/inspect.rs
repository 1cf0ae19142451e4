//! # fermi / info 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/inspect.rs`

use clap::Args;
use std::path::PathBuf;

/// fermi 子命令参数
#[derive(Args, Debug)]
pub struct FermiArgs {
    /// .BAND or .DOSS file containing a '# EFERMI' line
    pub input: PathBuf,

    /// Print the value in eV instead of Hartree
    #[arg(long, env = "BSDOS_EV", default_value_t = false)]
    pub ev: bool,
}

/// info 子命令参数
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Files to summarize (.BAND / .DOSS)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Save the summary table as CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
