//! # plan 命令实现
//!
//! 打印源帧到目标帧名的映射表，不写入任何文件。
//!
//! ## 依赖关系
//! - 使用 `cli/sequence.rs` 定义的参数
//! - 使用 `sequence/`
//! - 使用 `utils/output.rs`

use crate::cli::sequence::SequenceArgs;
use crate::error::Result;
use crate::sequence::{FrameCollector, FramePlan, SequenceCopier};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 映射表行
#[derive(Debug, Clone, Tabled)]
struct PlanRow {
    #[tabled(rename = "Frame")]
    frame: usize,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Destination")]
    destination: String,
}

impl From<&FramePlan> for PlanRow {
    fn from(plan: &FramePlan) -> Self {
        PlanRow {
            frame: plan.index,
            source: plan.source_name.clone(),
            destination: plan.dest.display().to_string(),
        }
    }
}

/// 执行 plan 命令
pub fn execute(args: SequenceArgs) -> Result<()> {
    let config = args.to_config();
    config.validate()?;

    output::print_header("Frame plan");

    let frames = FrameCollector::new(&config.source_dir)
        .with_pattern(&config.pattern)
        .collect()?;

    output::print_info(&format!("Found {} files.", frames.len()));

    if frames.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            config.pattern,
            config.source_dir.display()
        ));
        return Ok(());
    }

    let copier = SequenceCopier::new(config);
    let rows: Vec<PlanRow> = copier.plan(&frames).iter().map(PlanRow::from).collect();

    println!("{}", Table::new(&rows));

    if !copier.config().dest_dir.is_dir() {
        output::print_info(&format!(
            "Destination '{}' does not exist yet and would be created",
            copier.config().dest_dir.display()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_plan_writes_nothing() {
        let src = tempdir().unwrap();
        let root = tempdir().unwrap();
        let dest = root.path().join("sequence");
        fs::write(src.path().join("a.jpg"), b"a").unwrap();

        let args = SequenceArgs {
            source: src.path().to_path_buf(),
            dest: dest.clone(),
            pattern: "*.jpg".to_string(),
            prefix: "frame_".to_string(),
            extension: "jpg".to_string(),
            interval: 50,
        };
        execute(args).expect("plan should succeed");

        assert!(!dest.exists());
        assert_eq!(fs::read_dir(src.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_plan_row_from_frame_plan() {
        let plan = FramePlan {
            index: 4,
            source: "in/shot.jpg".into(),
            source_name: "shot.jpg".to_string(),
            dest: "out/frame_4.jpg".into(),
            dest_name: "frame_4.jpg".to_string(),
        };
        let row = PlanRow::from(&plan);
        assert_eq!(row.frame, 4);
        assert_eq!(row.source, "shot.jpg");
        assert!(row.destination.ends_with("frame_4.jpg"));
    }
}
