//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `copy`: 复制并重命名帧序列
//! - `plan`: 只打印帧映射表，不复制
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: sequence

pub mod sequence;

use clap::{Parser, Subcommand};

/// frameseq - 图像序列帧复制工具
#[derive(Parser)]
#[command(name = "frameseq")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Copy captured image sequences into frame_N animation assets", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Copy matching images into the destination as frame_<index> files
    Copy(sequence::SequenceArgs),

    /// Print the frame mapping without copying anything
    Plan(sequence::SequenceArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_copy_with_defaults() {
        let cli = Cli::try_parse_from(["frameseq", "copy"]).unwrap();
        assert!(!cli.no_color);
        match cli.command {
            Commands::Copy(args) => {
                let config = args.to_config();
                assert_eq!(config, crate::sequence::SequenceConfig::default());
            }
            Commands::Plan(_) => panic!("expected copy"),
        }
    }

    #[test]
    fn test_parse_plan_with_options() {
        let cli = Cli::try_parse_from([
            "frameseq",
            "plan",
            "--no-color",
            "-s",
            "captures",
            "-d",
            "out",
            "-p",
            "*.png",
            "--prefix",
            "hero_",
            "--extension",
            "png",
            "--interval",
            "10",
        ])
        .unwrap();
        assert!(cli.no_color);
        match cli.command {
            Commands::Plan(args) => {
                let config = args.to_config();
                assert_eq!(config.source_dir, std::path::PathBuf::from("captures"));
                assert_eq!(config.dest_dir, std::path::PathBuf::from("out"));
                assert_eq!(config.pattern, "*.png");
                assert_eq!(config.frame_name(3), "hero_3.png");
                assert_eq!(config.progress_interval, 10);
            }
            Commands::Copy(_) => panic!("expected plan"),
        }
    }
}
