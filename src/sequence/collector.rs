//! # 源帧收集器
//!
//! 在源目录中（不递归）收集匹配模式的帧文件，并按路径字典序排序。
//!
//! ## 功能
//! - glob 模式匹配（区分大小写，`*` 不匹配开头的 `.`）
//! - 只收集普通文件（含指向普通文件的符号链接）
//! - 按完整路径字符串的字典序排序，不做自然数排序
//!
//! ## 依赖关系
//! - 被 `commands/copy.rs`, `commands/plan.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use super::config::compile_pattern;
use crate::error::{Result, SequenceError};

use glob::MatchOptions;
use std::path::PathBuf;
use walkdir::WalkDir;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// 一个源帧文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFrame {
    /// 完整路径
    pub path: PathBuf,
    /// 文件名（仅用于显示，非 UTF-8 字节被替换）
    pub name: String,
}

/// 源帧收集器
pub struct FrameCollector {
    /// 源目录
    source: PathBuf,
    /// 匹配模式
    pattern: String,
}

impl FrameCollector {
    /// 创建新的收集器
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            pattern: "*".to_string(),
        }
    }

    /// 设置匹配模式
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = pattern.to_string();
        self
    }

    /// 收集所有匹配的帧文件（已排序）
    pub fn collect(&self) -> Result<Vec<SourceFrame>> {
        if !self.source.is_dir() {
            return Err(SequenceError::DirectoryNotFound {
                path: self.source.display().to_string(),
            });
        }

        let pattern = compile_pattern(&self.pattern)?;

        let walker = WalkDir::new(&self.source).min_depth(1).max_depth(1);

        let mut frames = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| SequenceError::DirectoryRead {
                path: self.source.display().to_string(),
                source: e,
            })?;

            if !Self::is_regular_file(&entry) {
                continue;
            }

            // 非 UTF-8 文件名按替换字符参与匹配，path 保留原始字节
            let name = entry.file_name().to_string_lossy();

            if pattern.matches_with(&name, MATCH_OPTIONS) {
                frames.push(SourceFrame {
                    path: entry.path().to_path_buf(),
                    name: name.into_owned(),
                });
            }
        }

        frames.sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str()));
        Ok(frames)
    }

    /// 普通文件，或指向普通文件的符号链接
    fn is_regular_file(entry: &walkdir::DirEntry) -> bool {
        if entry.file_type().is_file() {
            return true;
        }
        entry.path_is_symlink() && entry.path().is_file()
    }
}
