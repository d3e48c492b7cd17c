//! 命令行参数解析模块
//!
//! 调用形式：`dirtree <path> [-f]`
//!
//! - 第一个参数（必需）：扫描根路径
//! - 第二个参数（可选）：仅当精确等于 `-f` 时包含文件，其他值一律视为不包含
//! - 参数数量为 0 或超过 2 时返回 [`CliError::WrongArgumentCount`]
//!
//! 解析完成后产出 [`Config`]，错误策略保持默认值。
//!
//! 文件: src/cli.rs
//! 更新于: 2026-10-17

#![forbid(unsafe_code)]

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::config::Config;
pub use crate::error::CliError;

/// 启用文件显示的参数值
pub const FILES_FLAG: &str = "-f";

/// 用法说明
pub const USAGE: &str = "usage: dirtree <path> [-f]";

/// 命令行解析器
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use dirtree::cli::CliParser;
///
/// let config = CliParser::new(["some/dir", "-f"]).parse().unwrap();
/// assert_eq!(config.root_path, PathBuf::from("some/dir"));
/// assert!(config.scan.include_files);
/// ```
#[derive(Debug, Clone)]
pub struct CliParser {
    /// 待解析的参数列表（不含程序名）
    args: Vec<OsString>,
}

impl CliParser {
    /// 从参数列表创建解析器
    ///
    /// # 参数
    ///
    /// * `args` - 命令行参数列表（不包含程序名）
    #[must_use]
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// 从环境参数创建解析器
    ///
    /// 自动跳过程序名；非 UTF-8 路径原样保留。
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(env::args_os().skip(1))
    }

    /// 解析命令行参数
    ///
    /// # Errors
    ///
    /// 参数数量不是 1 或 2 时返回 `CliError::WrongArgumentCount`。
    ///
    /// # Examples
    ///
    /// ```
    /// use dirtree::cli::{CliError, CliParser};
    ///
    /// let err = CliParser::new(Vec::<String>::new()).parse().unwrap_err();
    /// assert_eq!(err, CliError::WrongArgumentCount { given: 0 });
    ///
    /// let config = CliParser::new(["dir", "--files"]).parse().unwrap();
    /// assert!(!config.scan.include_files);
    /// ```
    pub fn parse(self) -> Result<Config, CliError> {
        let given = self.args.len();
        let mut args = self.args.into_iter();

        let (path, include_files) = match (args.next(), args.next(), args.next()) {
            (Some(path), None, None) => (path, false),
            (Some(path), Some(flag), None) => (path, Self::is_files_flag(&flag)),
            _ => return Err(CliError::WrongArgumentCount { given }),
        };

        let mut config = Config::with_root(PathBuf::from(path));
        config.scan.include_files = include_files;
        Ok(config)
    }

    /// 是否为精确的文件开关
    fn is_files_flag(arg: &OsStr) -> bool {
        arg == OsStr::new(FILES_FLAG)
    }
}

// ============================================================================
// 单元测试
// ============================================================================
