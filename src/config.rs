//! 配置模块：定义全量 Config 及其子配置结构
//!
//! 本模块是一次运行的**单一事实来源**。命令行参数经 CLI 层解析后，
//! 统一转换为 `Config` 结构，后续扫描、渲染、输出各层仅依赖此配置。
//!
//! CLI 只填写根路径与文件开关；错误策略（部分输出、嵌套失败）
//! 由库调用方按需设置，CLI 使用默认值。
//!
//! 文件: src/config.rs
//! 更新于: 2026-10-17

#![forbid(unsafe_code)]

use std::path::PathBuf;

// ============================================================================
// 枚举类型定义
// ============================================================================

/// 渲染策略
///
/// 决定扫描失败时是否仍输出已构建的部分目录树。
///
/// # Examples
///
/// ```
/// use dirtree::config::RenderPolicy;
///
/// assert_eq!(RenderPolicy::default(), RenderPolicy::RenderThenReport);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPolicy {
    /// 先渲染部分结果，再报告错误（默认）
    #[default]
    RenderThenReport,
    /// 先检查错误，失败时不输出任何内容
    CheckThenRender,
}

/// 嵌套失败策略
///
/// 决定根目录以下的读取失败是否视为整次运行失败。
///
/// # Examples
///
/// ```
/// use dirtree::config::NestedFailurePolicy;
///
/// assert_eq!(NestedFailurePolicy::default(), NestedFailurePolicy::Tolerate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NestedFailurePolicy {
    /// 记录警告日志后继续，不影响退出结果（默认）
    #[default]
    Tolerate,
    /// 视为扫描错误
    Fail,
}

// ============================================================================
// 子配置结构
// ============================================================================

/// 扫描选项
///
/// # Examples
///
/// ```
/// use dirtree::config::ScanOptions;
///
/// let opts = ScanOptions::default();
/// assert!(!opts.include_files);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanOptions {
    /// 是否包含文件（对应 `-f`）
    pub include_files: bool,
}

/// 错误策略
///
/// # Examples
///
/// ```
/// use dirtree::config::{ErrorPolicy, NestedFailurePolicy, RenderPolicy};
///
/// let policy = ErrorPolicy::strict();
/// assert_eq!(policy.render, RenderPolicy::CheckThenRender);
/// assert_eq!(policy.nested, NestedFailurePolicy::Fail);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ErrorPolicy {
    /// 渲染策略
    pub render: RenderPolicy,
    /// 嵌套失败策略
    pub nested: NestedFailurePolicy,
}

impl ErrorPolicy {
    /// 严格策略：任何读取失败都导致运行失败，且失败时不输出
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            render: RenderPolicy::CheckThenRender,
            nested: NestedFailurePolicy::Fail,
        }
    }
}

// ============================================================================
// 主配置结构
// ============================================================================

/// 全量配置
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use dirtree::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.root_path, PathBuf::from("."));
/// assert!(!config.scan.include_files);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 根路径（起始目录）
    pub root_path: PathBuf,
    /// 扫描选项
    pub scan: ScanOptions,
    /// 错误策略
    pub policy: ErrorPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("."),
            scan: ScanOptions::default(),
            policy: ErrorPolicy::default(),
        }
    }
}

impl Config {
    /// 创建具有指定根路径的配置
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use dirtree::config::Config;
    ///
    /// let config = Config::with_root(PathBuf::from("/tmp"));
    /// assert_eq!(config.root_path, PathBuf::from("/tmp"));
    /// ```
    #[must_use]
    pub fn with_root(root_path: PathBuf) -> Self {
        Self {
            root_path,
            ..Self::default()
        }
    }

    /// 嵌套失败是否视为运行失败
    #[must_use]
    pub const fn fails_on_nested(&self) -> bool {
        matches!(self.policy.nested, NestedFailurePolicy::Fail)
    }

    /// 是否需要在渲染前检查扫描结果
    #[must_use]
    pub const fn checks_before_render(&self) -> bool {
        matches!(self.policy.render, RenderPolicy::CheckThenRender)
    }
}

// ============================================================================
// 单元测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_should_match_original_behavior() {
        let config = Config::default();
        assert_eq!(config.root_path, PathBuf::from("."));
        assert!(!config.scan.include_files);
        assert_eq!(config.policy.render, RenderPolicy::RenderThenReport);
        assert_eq!(config.policy.nested, NestedFailurePolicy::Tolerate);
    }

    #[test]
    fn config_with_root_should_keep_other_defaults() {
        let config = Config::with_root(PathBuf::from("some/dir"));
        assert_eq!(config.root_path, PathBuf::from("some/dir"));
        assert_eq!(config.scan, ScanOptions::default());
        assert_eq!(config.policy, ErrorPolicy::default());
    }

    #[test]
    fn config_fails_on_nested_should_follow_policy() {
        let mut config = Config::default();
        assert!(!config.fails_on_nested());

        config.policy.nested = NestedFailurePolicy::Fail;
        assert!(config.fails_on_nested());
    }

    #[test]
    fn config_checks_before_render_should_follow_policy() {
        let mut config = Config::default();
        assert!(!config.checks_before_render());

        config.policy.render = RenderPolicy::CheckThenRender;
        assert!(config.checks_before_render());
    }

    #[test]
    fn error_policy_strict_should_set_both_policies() {
        let mut config = Config::default();
        config.policy = ErrorPolicy::strict();
        assert!(config.fails_on_nested());
        assert!(config.checks_before_render());
    }
}
