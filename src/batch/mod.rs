//! # 批量处理模块
//!
//! 在目录中收集 `.BAND` / `.DOSS` 文件并并行绘图。
//!
//! ## 功能
//! - 多模式 glob 匹配（不区分大小写）
//! - 可选递归
//! - rayon 线程池并行执行，进度条反馈
//! - 成功 / 跳过 / 失败统计
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 使用
//! - 使用 `walkdir`, `glob`, `rayon`, `indicatif`

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchRunner, JobOutcome};
