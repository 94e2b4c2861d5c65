//! # 帧序列模块
//!
//! 把采集的图像序列复制成 `frame_<i>.jpg` 动画素材。
//!
//! ## 功能
//! - 配置与帧命名规则
//! - 收集并排序源帧
//! - 顺序复制并重命名
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: config, collector, copier

pub mod collector;
pub mod config;
pub mod copier;

pub use collector::{FrameCollector, SourceFrame};
pub use config::SequenceConfig;
pub use copier::{ensure_destination, CopyReport, FramePlan, SequenceCopier};
