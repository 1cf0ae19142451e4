//! # 文件收集器
//!
//! 根据输入目录和 glob 模式收集待绘制的数据文件。
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{BsDosError, Result};

use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// 文件收集器
pub struct FileCollector {
    root: PathBuf,
    patterns: Vec<Pattern>,
    recursive: bool,
}

impl FileCollector {
    /// 逗号分隔的多模式，例如 `"*.BAND,*.DOSS"`
    pub fn new(root: impl Into<PathBuf>, patterns: &str) -> Result<Self> {
        let patterns = patterns
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                Pattern::new(s).map_err(|e| {
                    BsDosError::InvalidArgument(format!("Invalid pattern '{}': {}", s, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if patterns.is_empty() {
            return Err(BsDosError::InvalidArgument(
                "At least one file pattern is required".to_string(),
            ));
        }

        Ok(Self {
            root: root.into(),
            patterns,
            recursive: false,
        })
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 文件名是否匹配任一模式
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| {
                self.patterns
                    .iter()
                    .any(|p| p.matches_with(name, MATCH_OPTIONS))
            })
    }

    /// 收集所有匹配文件，按路径排序
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(BsDosError::DirectoryNotFound {
                path: self.root.display().to_string(),
            });
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(&self.root)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| self.matches(p))
            .collect();

        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_case_insensitive() {
        let collector = FileCollector::new(".", "*.BAND, *.DOSS").unwrap();
        assert!(collector.matches(Path::new("dir/MgO.BAND")));
        assert!(collector.matches(Path::new("mgo.band")));
        assert!(collector.matches(Path::new("MgO.doss")));
        assert!(!collector.matches(Path::new("MgO.out")));
        assert!(!collector.matches(Path::new("MgO.BAND.png")));
    }

    #[test]
    fn test_empty_pattern_rejected() {
        assert!(FileCollector::new(".", " , ").is_err());
        assert!(FileCollector::new(".", "[").is_err());
    }

    #[test]
    fn test_collect_from_directory() {
        let dir = std::env::temp_dir().join(format!("bsdos_collect_{}", std::process::id()));
        std::fs::create_dir_all(dir.join("sub")).unwrap();
        std::fs::write(dir.join("a.BAND"), "0 1\n").unwrap();
        std::fs::write(dir.join("b.DOSS"), "0 1\n").unwrap();
        std::fs::write(dir.join("notes.txt"), "x").unwrap();
        std::fs::write(dir.join("sub").join("c.BAND"), "0 1\n").unwrap();

        let flat = FileCollector::new(&dir, "*.BAND,*.DOSS").unwrap().collect().unwrap();
        let deep = FileCollector::new(&dir, "*.BAND")
            .unwrap()
            .recursive(true)
            .collect()
            .unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(flat.len(), 2);
        assert_eq!(deep.len(), 2);
    }

    #[test]
    fn test_missing_directory() {
        let collector = FileCollector::new("/nonexistent/bsdos", "*.BAND").unwrap();
        assert!(collector.collect().is_err());
    }
}
