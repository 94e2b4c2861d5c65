//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//! `write_*` 写入任意 `Write`，`print_*` 写入标准输出。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块和 `main.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;
use std::error::Error;
use std::io::{self, Write};

// 输出只是提示信息，写入失败不影响复制结果

/// 写入成功消息
pub fn write_success(out: &mut impl Write, msg: &str) {
    writeln!(out, "{} {}", "[OK]".green().bold(), msg).ok();
}

/// 写入警告消息
pub fn write_warning(out: &mut impl Write, msg: &str) {
    writeln!(out, "{} {}", "[WARN]".yellow().bold(), msg).ok();
}

/// 写入信息消息
pub fn write_info(out: &mut impl Write, msg: &str) {
    writeln!(out, "{} {}", "[*]".blue().bold(), msg).ok();
}

/// 写入完成消息
pub fn write_done(out: &mut impl Write, msg: &str) {
    writeln!(out, "{} {}", "[DONE]".green().bold(), msg).ok();
}

/// 写入单帧复制进度
pub fn write_frame(out: &mut impl Write, index: usize, from: &str, to: &str) {
    writeln!(
        out,
        "{} Copied frame {}: {} {} {}",
        "[OK]".green().bold(),
        index,
        from.dimmed(),
        "->".cyan(),
        to
    )
    .ok();
}

/// 写入标题栏
pub fn write_header(out: &mut impl Write, title: &str) {
    let line = "─".repeat(60);
    writeln!(out, "\n{}", line.dimmed()).ok();
    writeln!(out, "  {}", title.bold()).ok();
    writeln!(out, "{}\n", line.dimmed()).ok();
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印错误及其底层原因
pub fn print_error_chain(err: &dyn Error) {
    print_error(&err.to_string());
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("      {} {}", "caused by:".dimmed(), cause);
        source = cause.source();
    }
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    write_warning(&mut io::stdout().lock(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    write_info(&mut io::stdout().lock(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    write_header(&mut io::stdout().lock(), title);
}
