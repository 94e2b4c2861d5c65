//! # 统一错误处理模块
//!
//! 定义 frameseq 的所有错误类型，使用 `thiserror` 派生。
//! 底层 I/O 错误保留为 `#[source]`，由 `main.rs` 逐级打印。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// frameseq 统一错误类型
#[derive(Error, Debug)]
pub enum SequenceError {
    // ─────────────────────────────────────────────────────────────
    // 目录错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to create directory: {path}")]
    CreateDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Failed to read directory: {path}")]
    DirectoryRead {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 复制错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to copy {from} -> {to}")]
    CopyFailed {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to transfer file times to {path}")]
    Metadata {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SequenceError>;
