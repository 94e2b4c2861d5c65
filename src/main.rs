//! # frameseq - 图像序列帧复制工具
//!
//! 将采集的图像序列按文件名字典序复制为 `frame_0.jpg`, `frame_1.jpg`, ...
//! 供动画序列素材使用。
//!
//! ## 子命令
//! - `copy` - 复制并重命名帧
//! - `plan` - 打印帧映射表（不复制）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── sequence/ (配置、收集、复制)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod sequence;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error_chain(&e);
        std::process::exit(1);
    }
}
