//! # 批量执行器
//!
//! 在 rayon 线程池中并行执行每个文件的绘图任务。
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条

use crate::error::{BsDosError, Result};
use crate::utils::progress;

use rayon::prelude::*;
use std::path::PathBuf;

/// 单个文件的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// 已生成的输出文件
    Written(PathBuf),
    /// 输出已存在
    Skipped(PathBuf),
    /// (输入文件, 错误信息)
    Failed(PathBuf, String),
}

/// 批量统计
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, String)>,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = JobOutcome>) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            match outcome {
                JobOutcome::Written(path) => summary.written.push(path),
                JobOutcome::Skipped(path) => summary.skipped.push(path),
                JobOutcome::Failed(path, err) => summary.failures.push((path, err)),
            }
        }
        summary
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn total(&self) -> usize {
        self.written.len() + self.skipped.len() + self.failed()
    }
}

/// 批量执行器
pub struct BatchRunner {
    jobs: usize,
}

impl BatchRunner {
    /// `jobs == 0` 时使用全部 CPU
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理文件列表
    pub fn run<F>(&self, files: &[PathBuf], job: F) -> Result<BatchSummary>
    where
        F: Fn(&PathBuf) -> JobOutcome + Sync + Send,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| BsDosError::Other(format!("Failed to build thread pool: {}", e)))?;

        let pb = progress::create_progress_bar(files.len() as u64, "Plotting");

        let outcomes: Vec<JobOutcome> = pool.install(|| {
            files
                .par_iter()
                .map(|file| {
                    let outcome = job(file);
                    pb.inc(1);
                    outcome
                })
                .collect()
        });

        pb.finish_and_clear();
        Ok(BatchSummary::from_outcomes(outcomes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runner_collects_outcomes() {
        let files: Vec<PathBuf> = (0..6).map(|i| PathBuf::from(format!("f{}.BAND", i))).collect();
        let summary = BatchRunner::new(2)
            .run(&files, |f| {
                let name = f.display().to_string();
                if name.starts_with("f0") {
                    JobOutcome::Skipped(f.clone())
                } else if name.starts_with("f1") {
                    JobOutcome::Failed(f.clone(), "bad".to_string())
                } else {
                    JobOutcome::Written(f.with_extension("png"))
                }
            })
            .unwrap();

        assert_eq!(summary.written.len(), 4);
        assert_eq!(summary.skipped, vec![PathBuf::from("f0.BAND")]);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.total(), 6);
    }

    #[test]
    fn test_zero_jobs_uses_all_cpus() {
        assert!(BatchRunner::new(0).jobs() >= 1);
    }
}
