//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `bs`: 能带结构图
//! - `dos`: 态密度图
//! - `both`: 能带 + 态密度并排图
//! - `fermi`: 输出费米能
//! - `info`: 文件摘要
//! - `batch`: 目录批量绘图
//! - `interactive`: 交互式问答（无子命令时的默认行为）
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: plot, inspect, batch

pub mod batch;
pub mod inspect;
pub mod plot;

use clap::{Parser, Subcommand};

/// bsdos - 能带结构与态密度绘图工具
#[derive(Parser)]
#[command(name = "bsdos")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Plot CRYSTAL band structure (.BAND) and density of states (.DOSS) files",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Runs interactively when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Plot a band structure from a .BAND file
    Bs(plot::BsArgs),

    /// Plot a density of states from a .DOSS file
    Dos(plot::DosArgs),

    /// Plot band structure and density of states side by side
    Both(plot::BothArgs),

    /// Print the Fermi energy recorded in a .BAND or .DOSS file
    Fermi(inspect::FermiArgs),

    /// Summarize one or more .BAND/.DOSS files
    Info(inspect::InfoArgs),

    /// Plot every matching file in a directory
    Batch(batch::BatchArgs),

    /// Answer prompts on standard input
    Interactive,
}
