//! dirtree 主程序入口
//!
//! 串联以下流程：
//!
//! 1. **日志初始化**：安装 stderr 日志订阅器
//! 2. **CLI 解析**：解析命令行参数，产出 `Config`
//! 3. **扫描与渲染**：构建目录树并输出到 stdout
//!
//! # 退出码
//!
//! - `0`：成功
//! - `1`：参数错误
//! - `2`：扫描错误
//! - `3`：输出错误
//!
//! 文件: src/main.rs
//! 更新于: 2026-10-17

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

use std::error::Error;
use std::io;
use std::process::ExitCode;

use dirtree::cli::CliParser;
use dirtree::error::{DirtreeError, DirtreeResult};
use dirtree::logging;

/// 退出码：成功
const EXIT_SUCCESS: u8 = 0;

/// 退出码：参数错误
const EXIT_CLI_ERROR: u8 = 1;

/// 退出码：扫描错误
const EXIT_SCAN_ERROR: u8 = 2;

/// 退出码：输出错误
const EXIT_OUTPUT_ERROR: u8 = 3;

/// 程序主入口
fn main() -> ExitCode {
    logging::init_logging();

    match run() {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            print_error(&e);
            ExitCode::from(error_to_exit_code(&e))
        }
    }
}

/// 执行主流程
fn run() -> DirtreeResult<()> {
    let config = CliParser::from_env().parse()?;
    dirtree::run(&config, io::stdout().lock())?;
    Ok(())
}

/// 将错误映射为退出码
fn error_to_exit_code(err: &DirtreeError) -> u8 {
    match err {
        DirtreeError::Cli(_) => EXIT_CLI_ERROR,
        DirtreeError::Scan(_) => EXIT_SCAN_ERROR,
        DirtreeError::Output(_) => EXIT_OUTPUT_ERROR,
    }
}

/// 打印错误信息及其来源链到 stderr
fn print_error(err: &DirtreeError) {
    let prefix = match err {
        DirtreeError::Cli(_) => "Usage error",
        DirtreeError::Scan(_) => "Scan error",
        DirtreeError::Output(_) => "Output error",
    };

    eprintln!("dirtree: {}: {}", prefix, err);

    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
}
