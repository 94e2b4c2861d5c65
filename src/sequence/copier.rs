//! # 帧序列复制器
//!
//! 将排好序的源帧逐个复制为 `frame_<i>.jpg`。
//!
//! ## 功能
//! - 确保目标目录存在（幂等）
//! - 生成帧映射计划
//! - 顺序复制文件内容、权限位与访问/修改时间
//! - 遇到第一个错误立即中止，不重试、不回滚
//!
//! ## 依赖关系
//! - 被 `commands/copy.rs`, `commands/plan.rs` 调用
//! - 使用 `sequence/config.rs`, `sequence/collector.rs`

use super::collector::SourceFrame;
use super::config::SequenceConfig;
use crate::error::{Result, SequenceError};

use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};

/// 单帧映射：源文件 -> 目标帧文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePlan {
    pub index: usize,
    pub source: PathBuf,
    pub source_name: String,
    pub dest: PathBuf,
    pub dest_name: String,
}

/// 复制结果统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CopyReport {
    /// 已复制帧数
    pub frames: usize,
    /// 已复制字节数
    pub bytes: u64,
}

/// 确保目标目录存在
///
/// 返回 `true` 表示本次新建了目录。
pub fn ensure_destination(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(path).map_err(|e| SequenceError::CreateDirectory {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(true)
}

/// 复制单个文件的内容与元数据，覆盖已存在的目标文件
pub fn copy_with_metadata(source: &Path, dest: &Path) -> Result<u64> {
    // 先读取源文件时间，避免复制过程中的读取改变访问时间
    let metadata = fs::metadata(source).map_err(|e| SequenceError::CopyFailed {
        from: source.display().to_string(),
        to: dest.display().to_string(),
        source: e,
    })?;

    // fs::copy 同时复制权限位
    let bytes = fs::copy(source, dest).map_err(|e| SequenceError::CopyFailed {
        from: source.display().to_string(),
        to: dest.display().to_string(),
        source: e,
    })?;

    let times = file_times(&metadata).map_err(|e| SequenceError::Metadata {
        path: source.display().to_string(),
        source: e,
    })?;

    apply_times(dest, times).map_err(|e| SequenceError::Metadata {
        path: dest.display().to_string(),
        source: e,
    })?;

    Ok(bytes)
}

fn file_times(metadata: &fs::Metadata) -> io::Result<FileTimes> {
    let mut times = FileTimes::new().set_modified(metadata.modified()?);
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    Ok(times)
}

/// 把时间写入目标文件
///
/// 属主以只读方式打开即可设置时间。复制来的权限位不允许属主读取时，
/// 临时加上属主读权限，写完时间后恢复（chmod 不改变修改时间）。
#[cfg(unix)]
fn apply_times(path: &Path, times: FileTimes) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    match File::open(path) {
        Ok(file) => file.set_times(times),
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            let original = fs::metadata(path)?.permissions();
            fs::set_permissions(path, fs::Permissions::from_mode(original.mode() | 0o400))?;
            let result = File::open(path).and_then(|file| file.set_times(times));
            fs::set_permissions(path, original)?;
            result
        }
        Err(e) => Err(e),
    }
}

#[cfg(windows)]
fn apply_times(path: &Path, times: FileTimes) -> io::Result<()> {
    use std::os::windows::fs::OpenOptionsExt;

    const FILE_WRITE_ATTRIBUTES: u32 = 0x0100;
    File::options()
        .access_mode(FILE_WRITE_ATTRIBUTES)
        .open(path)?
        .set_times(times)
}

#[cfg(not(any(unix, windows)))]
fn apply_times(path: &Path, times: FileTimes) -> io::Result<()> {
    File::options().write(true).open(path)?.set_times(times)
}

/// 帧序列复制器
pub struct SequenceCopier {
    config: SequenceConfig,
}

impl SequenceCopier {
    /// 创建新的复制器
    pub fn new(config: SequenceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    /// 生成帧映射计划（不触碰文件系统）
    pub fn plan(&self, frames: &[SourceFrame]) -> Vec<FramePlan> {
        frames
            .iter()
            .enumerate()
            .map(|(index, frame)| FramePlan {
                index,
                source: frame.path.clone(),
                source_name: frame.name.clone(),
                dest: self.config.frame_path(index),
                dest_name: self.config.frame_name(index),
            })
            .collect()
    }

    /// 按顺序复制全部帧
    ///
    /// 每复制完一帧调用一次 `on_copied`。任何一帧失败都会立即返回错误，
    /// 之前已复制的帧保留在目标目录中。
    pub fn run<F>(&self, frames: &[SourceFrame], mut on_copied: F) -> Result<CopyReport>
    where
        F: FnMut(&FramePlan),
    {
        self.check_distinct_dirs()?;

        let mut report = CopyReport::default();
        for plan in self.plan(frames) {
            let bytes = copy_with_metadata(&plan.source, &plan.dest)?;

            report.frames += 1;
            report.bytes += bytes;
            on_copied(&plan);
        }

        Ok(report)
    }

    /// 目标目录不能与源目录相同，否则帧文件会匹配模式并覆盖尚未复制的源文件
    fn check_distinct_dirs(&self) -> Result<()> {
        let (Ok(source), Ok(dest)) = (
            fs::canonicalize(&self.config.source_dir),
            fs::canonicalize(&self.config.dest_dir),
        ) else {
            return Ok(());
        };

        if source == dest {
            return Err(SequenceError::InvalidArgument(format!(
                "destination '{}' is the same directory as source '{}'",
                self.config.dest_dir.display(),
                self.config.source_dir.display()
            )));
        }

        Ok(())
    }
}
