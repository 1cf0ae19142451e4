//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `models/`, `plot/`, `utils/`
//! - 子模块: plot, inspect, batch, interactive

pub mod batch;
pub mod inspect;
pub mod interactive;
pub mod plot;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令；未给出子命令时进入交互模式
pub fn run(cmd: Option<Commands>) -> Result<()> {
    match cmd {
        Some(Commands::Bs(args)) => plot::bs::execute(args),
        Some(Commands::Dos(args)) => plot::dos::execute(args),
        Some(Commands::Both(args)) => plot::both::execute(args),
        Some(Commands::Fermi(args)) => inspect::fermi(args),
        Some(Commands::Info(args)) => inspect::info(args),
        Some(Commands::Batch(args)) => batch::execute(args),
        Some(Commands::Interactive) | None => interactive::execute(),
    }
}
