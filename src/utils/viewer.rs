//! # 图像查看
//!
//! 调用系统默认程序打开生成的图像（`xdg-open` / `open` / `start`）。
//!
//! ## 依赖关系
//! - 被 `commands/plot/mod.rs` 使用

use crate::error::{BsDosError, Result};

use std::path::Path;
use std::process::{Command, Stdio};

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

/// 在后台打开图像，不等待查看器退出
pub fn open_image(path: &Path) -> Result<()> {
    let mut cmd = viewer_command(path);
    let program = cmd.get_program().to_string_lossy().to_string();

    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => BsDosError::CommandNotFound { command: program },
            _ => BsDosError::Other(format!("Failed to launch '{}': {}", program, e)),
        })
}
