//! # copy 命令实现
//!
//! 把源目录中的匹配图像按字典序复制为 `frame_<i>.jpg`。
//!
//! ## 流程
//! 1. 确保目标目录存在
//! 2. 收集并排序源帧
//! 3. 顺序复制，每隔固定帧数打印一行进度
//!
//! ## 依赖关系
//! - 使用 `cli/sequence.rs` 定义的参数
//! - 使用 `sequence/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::sequence::SequenceArgs;
use crate::error::Result;
use crate::sequence::{
    ensure_destination, CopyReport, FrameCollector, SequenceCopier, SourceFrame,
};
use crate::utils::{output, progress};

use indicatif::HumanBytes;
use std::io::{self, Write};

/// 执行 copy 命令
pub fn execute(args: SequenceArgs) -> Result<()> {
    copy_sequence(args, &mut io::stdout().lock())
}

/// 执行复制流程，提示信息写入 `out`
fn copy_sequence(args: SequenceArgs, out: &mut impl Write) -> Result<()> {
    let config = args.to_config();
    config.validate()?;

    output::write_header(out, "Copying frame sequence");

    if ensure_destination(&config.dest_dir)? {
        output::write_info(
            out,
            &format!("Created directory: {}", config.dest_dir.display()),
        );
    }

    let frames = FrameCollector::new(&config.source_dir)
        .with_pattern(&config.pattern)
        .collect()?;

    output::write_info(out, &format!("Found {} files.", frames.len()));
    if frames.is_empty() {
        output::write_warning(
            out,
            &format!(
                "No files matched '{}' under {}",
                config.pattern,
                config.source_dir.display()
            ),
        );
    }

    let copier = SequenceCopier::new(config);
    let report = copy_frames(&copier, &frames, out)?;

    output::write_done(out, "Done.");
    output::write_success(
        out,
        &format!(
            "Copied {} frame(s), {} into '{}'",
            report.frames,
            HumanBytes(report.bytes),
            copier.config().dest_dir.display()
        ),
    );

    Ok(())
}

/// 顺序复制并显示进度
fn copy_frames(
    copier: &SequenceCopier,
    frames: &[SourceFrame],
    out: &mut impl Write,
) -> Result<CopyReport> {
    let pb = progress::create_progress_bar(frames.len() as u64, "Copying");

    let result = copier.run(frames, |plan| {
        if copier.config().is_progress_frame(plan.index) {
            pb.suspend(|| {
                output::write_frame(out, plan.index, &plan.source_name, &plan.dest_name);
                out.flush().ok();
            });
        }
        pb.inc(1);
    });

    pb.finish_and_clear();
    result
}
