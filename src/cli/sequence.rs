//! # copy / plan 子命令 CLI 定义
//!
//! 两个子命令共享同一组参数，默认值即内置常量。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/copy.rs`, `commands/plan.rs`

use crate::sequence::config::{
    SequenceConfig, DEFAULT_DEST_DIR, DEFAULT_FRAME_EXTENSION, DEFAULT_FRAME_PREFIX,
    DEFAULT_PATTERN, DEFAULT_PROGRESS_INTERVAL, DEFAULT_SOURCE_DIR,
};

use clap::Args;
use std::path::PathBuf;

/// copy / plan 子命令参数
#[derive(Args, Debug)]
pub struct SequenceArgs {
    /// Directory containing the captured images
    #[arg(short, long, default_value = DEFAULT_SOURCE_DIR)]
    pub source: PathBuf,

    /// Destination directory for the renamed frames
    #[arg(short, long, default_value = DEFAULT_DEST_DIR)]
    pub dest: PathBuf,

    /// Glob pattern for source files (not recursive)
    #[arg(short, long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Prefix of destination frame names
    #[arg(long, default_value = DEFAULT_FRAME_PREFIX)]
    pub prefix: String,

    /// Extension of destination frame names
    #[arg(long, default_value = DEFAULT_FRAME_EXTENSION)]
    pub extension: String,

    /// Print a progress line every N frames
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    pub interval: usize,
}

impl SequenceArgs {
    /// 转换为序列配置
    pub fn to_config(&self) -> SequenceConfig {
        SequenceConfig {
            pattern: self.pattern.clone(),
            frame_prefix: self.prefix.clone(),
            frame_extension: self.extension.clone(),
            progress_interval: self.interval,
            ..SequenceConfig::new(&self.source, &self.dest)
        }
    }
}
