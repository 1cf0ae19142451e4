//! # bsdos - CRYSTAL 能带结构与态密度绘图工具
//!
//! 读取 CRYSTAL 输出的 xmgrace 风格 `.BAND` / `.DOSS` 文件，
//! 做费米能参考与单位换算后绘制能带图、态密度图或两者并排图。
//!
//! ## 子命令
//! - `bs` / `dos` / `both` - 绘图
//! - `fermi` - 输出费米能
//! - `info`  - 文件摘要表
//! - `batch` - 目录批量绘图
//! - `interactive` - 问答模式（默认）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (.BAND / .DOSS 解析)
//!   │     ├── models/    (数据集与能量变换)
//!   │     ├── plot/      (plotters 绘图)
//!   │     ├── export.rs  (CSV 导出)
//!   │     └── batch/     (批量收集与并行执行)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod export;
mod models;
mod parsers;
mod plot;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
