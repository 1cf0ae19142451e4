//! # batch 子命令实现
//!
//! 收集目录中的 `.BAND` / `.DOSS` 文件，逐个绘制到输出目录。
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的 BatchArgs
//! - 使用 `batch/` 模块收集文件并并行执行
//! - 复用 `commands/plot/` 的数据准备

use super::plot::{bs, dos};
use crate::batch::{BatchRunner, FileCollector, JobOutcome};
use crate::cli::batch::BatchArgs;
use crate::cli::plot::ImageFormat;
use crate::error::{BsDosError, Result};
use crate::models::{BandSelection, EnergyTransform};
use crate::parsers::{labels::DEFAULT_BAND_TITLE, DataKind};
use crate::plot::{self, style, Canvas};
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};

/// 失败列表最多显示条数
const MAX_FAILURES_SHOWN: usize = 10;

/// 每个文件共享的配置
struct BatchConfig {
    output_dir: PathBuf,
    transform: EnergyTransform,
    width: Option<u32>,
    height: Option<u32>,
    svg: bool,
    overwrite: bool,
}

impl BatchConfig {
    fn canvas(&self) -> Canvas {
        let (w, h) = style::SINGLE_PANEL_SIZE;
        Canvas::new(
            (self.width.unwrap_or(w), self.height.unwrap_or(h)),
            self.svg,
        )
    }

    /// `<output_dir>/<stem>_bs.png` 之类的输出路径
    fn output_for(&self, input: &Path, kind: DataKind) -> PathBuf {
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("plot");
        let suffix = match kind {
            DataKind::Band => "_bs",
            DataKind::Dos => "_dos",
        };
        plot::output_path(
            &self.output_dir.join(format!("{}{}", stem, suffix)),
            &self.canvas(),
        )
    }
}

/// 执行 batch 子命令
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header("Batch Plotting");

    let files = FileCollector::new(&args.input, &args.pattern)?
        .recursive(args.recursive)
        .collect()?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No matching files found with pattern '{}'",
            args.pattern
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} data files", files.len()));

    fs::create_dir_all(&args.output).map_err(|e| BsDosError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let config = BatchConfig {
        output_dir: args.output.clone(),
        transform: args.energy.transform(),
        width: args.width,
        height: args.height,
        svg: args.format == ImageFormat::Svg,
        overwrite: args.overwrite,
    };

    let unit = config.transform.unit;
    output::print_info(&format!(
        "Energies in {}{}, output format: {}",
        unit,
        if config.transform.fermi_reference { " (absolute)" } else { "" },
        args.format
    ));

    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!("Using {} parallel jobs", runner.jobs()));

    let summary = runner.run(&files, |file| process_file(file, &config))?;

    output::print_separator();
    output::print_success(&format!(
        "Batch complete: {} files, {} written, {} skipped, {} failed",
        summary.total(),
        summary.written.len(),
        summary.skipped.len(),
        summary.failed()
    ));
    if !summary.skipped.is_empty() && !args.overwrite {
        output::print_info("Existing images were kept; pass --overwrite to replace them");
    }

    if !summary.failures.is_empty() {
        output::print_warning("Failed files:");
        for (path, err) in summary.failures.iter().take(MAX_FAILURES_SHOWN) {
            output::print_error(&format!("  {}: {}", path.display(), err));
        }
        if summary.failed() > MAX_FAILURES_SHOWN {
            output::print_warning(&format!(
                "  ... and {} more",
                summary.failed() - MAX_FAILURES_SHOWN
            ));
        }
    }

    Ok(())
}

/// 处理单个文件
fn process_file(input: &PathBuf, config: &BatchConfig) -> JobOutcome {
    let kind = match DataKind::from_path(input) {
        Ok(kind) => kind,
        Err(e) => return JobOutcome::Failed(input.clone(), e.to_string()),
    };

    let image = config.output_for(input, kind);
    if image.exists() && !config.overwrite {
        return JobOutcome::Skipped(image);
    }

    match render(input, kind, &image, config) {
        Ok(()) => JobOutcome::Written(image),
        Err(e) => JobOutcome::Failed(input.clone(), e.to_string()),
    }
}

fn render(input: &Path, kind: DataKind, image: &Path, config: &BatchConfig) -> Result<()> {
    let canvas = config.canvas();
    match kind {
        DataKind::Band => {
            let prepared = bs::prepare(input, &BandSelection::All, &config.transform)?;
            plot::save(&prepared.figure(DEFAULT_BAND_TITLE), image, &canvas)
        }
        DataKind::Dos => {
            let prepared = dos::prepare(input, &config.transform)?;
            let title = prepared.title_or_default(None);
            plot::save(&prepared.figure(title), image, &canvas)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(svg: bool, overwrite: bool) -> BatchConfig {
        BatchConfig {
            output_dir: PathBuf::from("plots"),
            transform: EnergyTransform::default(),
            width: None,
            height: Some(600),
            svg,
            overwrite,
        }
    }

    #[test]
    fn test_output_for_kind() {
        let cfg = config(false, false);
        assert_eq!(
            cfg.output_for(Path::new("runs/MgO.BAND"), DataKind::Band),
            PathBuf::from("plots/MgO_bs.png")
        );
        assert_eq!(
            config(true, false).output_for(Path::new("MgO.DOSS"), DataKind::Dos),
            PathBuf::from("plots/MgO_dos.svg")
        );
    }

    #[test]
    fn test_canvas_overrides() {
        let canvas = config(false, false).canvas();
        assert_eq!((canvas.width, canvas.height), (800, 600));
    }

    #[test]
    fn test_unknown_kind_fails() {
        let outcome = process_file(&PathBuf::from("notes.txt"), &config(false, false));
        assert!(matches!(outcome, JobOutcome::Failed(..)));
    }

    #[test]
    fn test_existing_output_skipped() {
        let dir = std::env::temp_dir().join(format!("bsdos_batch_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let existing = dir.join("MgO_bs.png");
        fs::write(&existing, b"").unwrap();

        let cfg = BatchConfig {
            output_dir: dir.clone(),
            ..config(false, false)
        };
        let outcome = process_file(&PathBuf::from("MgO.BAND"), &cfg);
        fs::remove_dir_all(&dir).ok();

        assert_eq!(outcome, JobOutcome::Skipped(existing));
    }
}
