//! # 序列配置
//!
//! 源目录、目标目录、匹配模式与帧命名规则。
//!
//! ## 依赖关系
//! - 被 `cli/sequence.rs` 构造
//! - 被 `sequence/collector.rs`, `sequence/copier.rs` 使用

use crate::error::{Result, SequenceError};

use std::path::PathBuf;

/// 默认源目录（原始采集帧）
pub const DEFAULT_SOURCE_DIR: &str = "aca-padel-hero-black/Aca-hero-black";
/// 默认目标目录
pub const DEFAULT_DEST_DIR: &str = "assets/sequence";
/// 默认匹配模式
pub const DEFAULT_PATTERN: &str = "*.jpg";
/// 默认帧文件名前缀
pub const DEFAULT_FRAME_PREFIX: &str = "frame_";
/// 默认帧文件扩展名
pub const DEFAULT_FRAME_EXTENSION: &str = "jpg";
/// 每隔多少帧打印一次进度
pub const DEFAULT_PROGRESS_INTERVAL: usize = 50;

/// 编译 glob 匹配模式
pub fn compile_pattern(pattern: &str) -> Result<glob::Pattern> {
    glob::Pattern::new(pattern).map_err(|e| SequenceError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

/// 帧序列复制配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceConfig {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub pattern: String,
    pub frame_prefix: String,
    pub frame_extension: String,
    pub progress_interval: usize,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        SequenceConfig {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            dest_dir: PathBuf::from(DEFAULT_DEST_DIR),
            pattern: DEFAULT_PATTERN.to_string(),
            frame_prefix: DEFAULT_FRAME_PREFIX.to_string(),
            frame_extension: DEFAULT_FRAME_EXTENSION.to_string(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl SequenceConfig {
    /// 使用给定的源目录和目标目录，其余取默认值
    pub fn new(source_dir: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            dest_dir: dest_dir.into(),
            ..Self::default()
        }
    }

    /// 帧文件名，例如 `frame_7.jpg`（索引不补零）
    pub fn frame_name(&self, index: usize) -> String {
        format!("{}{}.{}", self.frame_prefix, index, self.frame_extension)
    }

    /// 帧文件在目标目录中的完整路径
    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.dest_dir.join(self.frame_name(index))
    }

    /// 该帧是否需要打印进度行
    pub fn is_progress_frame(&self, index: usize) -> bool {
        self.progress_interval != 0 && index % self.progress_interval == 0
    }

    /// 编译匹配模式
    pub fn glob_pattern(&self) -> Result<glob::Pattern> {
        compile_pattern(&self.pattern)
    }

    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if self.progress_interval == 0 {
            return Err(SequenceError::InvalidArgument(
                "progress interval must be at least 1".to_string(),
            ));
        }

        if self.pattern.trim().is_empty() {
            return Err(SequenceError::InvalidArgument(
                "pattern must not be empty".to_string(),
            ));
        }
        self.glob_pattern()?;

        // 前缀和扩展名只能构成单个文件名
        for (what, value) in [
            ("frame prefix", &self.frame_prefix),
            ("frame extension", &self.frame_extension),
        ] {
            if value.contains('/') || value.contains('\\') {
                return Err(SequenceError::InvalidArgument(format!(
                    "{} '{}' must not contain a path separator",
                    what, value
                )));
            }
        }

        if self.frame_extension.is_empty() {
            return Err(SequenceError::InvalidArgument(
                "frame extension must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_matches_fixed_constants() {
        let config = SequenceConfig::default();
        assert_eq!(config.source_dir, PathBuf::from(DEFAULT_SOURCE_DIR));
        assert_eq!(config.dest_dir, PathBuf::from("assets/sequence"));
        assert_eq!(config.pattern, "*.jpg");
        assert_eq!(config.progress_interval, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_frame_name_is_unpadded() {
        let config = SequenceConfig::new("in", "out");
        assert_eq!(config.frame_name(0), "frame_0.jpg");
        assert_eq!(config.frame_name(7), "frame_7.jpg");
        assert_eq!(config.frame_name(123), "frame_123.jpg");
        assert_eq!(config.frame_path(2), Path::new("out").join("frame_2.jpg"));
    }

    #[test]
    fn test_progress_frames() {
        let config = SequenceConfig::new("in", "out");
        let hits: Vec<usize> = (0..151).filter(|&i| config.is_progress_frame(i)).collect();
        assert_eq!(hits, vec![0, 50, 100, 150]);
    }

    #[test]
    fn test_compile_pattern_reports_pattern() {
        assert!(compile_pattern("*.jpg").unwrap().matches("a.jpg"));
        match compile_pattern("frame[") {
            Err(SequenceError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "frame["),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = SequenceConfig::new("in", "out");
        config.progress_interval = 0;
        assert!(matches!(
            config.validate(),
            Err(SequenceError::InvalidArgument(_))
        ));

        let mut config = SequenceConfig::new("in", "out");
        config.pattern = "[".to_string();
        assert!(matches!(
            config.validate(),
            Err(SequenceError::InvalidPattern { .. })
        ));

        let mut config = SequenceConfig::new("in", "out");
        config.frame_prefix = "sub/frame_".to_string();
        assert!(config.validate().is_err());

        let mut config = SequenceConfig::new("in", "out");
        config.frame_extension = String::new();
        assert!(config.validate().is_err());
    }
}
