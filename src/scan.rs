//! 扫描模块：目录树构建与内存 IR
//!
//! 本模块负责目录树的遍历与构建，提供：
//!
//! - **内存 IR**：`Node` 枚举（`Directory` / `File`）表示目录树结构
//! - **扫描统计**：`ScanStats` 记录部分结果、失败列表与耗时
//! - **确定性排序**：同级条目按名称字节序升序排列
//! - **失败收集**：根目录失败单独记录，嵌套失败按深度优先顺序收集，
//!   不中断整体遍历
//!
//! 条目类型取自目录项自身的文件类型，不跟随符号链接。
//!
//! 文件: src/scan.rs
//! 更新于: 2026-10-17

#![forbid(unsafe_code)]

use std::fmt;
use std::fs::{self, DirEntry};
use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ScanError;

// ============================================================================
// 类型定义
// ============================================================================

/// 目录节点
///
/// # Examples
///
/// ```
/// use dirtree::scan::Directory;
///
/// let dir = Directory { name: "src".to_string(), children: Vec::new() };
/// assert_eq!(dir.to_string(), "src");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    /// 目录名称（不含路径）
    pub name: String,
    /// 子节点，按名称升序
    pub children: Vec<Node>,
}

/// 文件节点
///
/// # Examples
///
/// ```
/// use dirtree::scan::File;
///
/// let file = File { name: "x.txt".to_string(), size: 5 };
/// assert_eq!(file.to_string(), "x.txt (5b)");
///
/// let empty = File { name: "b.txt".to_string(), size: 0 };
/// assert_eq!(empty.to_string(), "b.txt (empty)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// 文件名称（不含路径）
    pub name: String,
    /// 文件大小（字节）
    pub size: u64,
}

/// 目录树节点
///
/// 渲染时通过 `match` 穷尽分派，`Display` 输出单行标签。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// 目录
    Directory(Directory),
    /// 文件（叶子）
    File(File),
}

impl Node {
    /// 条目名称
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Directory(dir) => &dir.name,
            Self::File(file) => &file.name,
        }
    }

    /// 是否为目录
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    /// 子节点，文件返回空切片
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Directory(dir) => &dir.children,
            Self::File(_) => &[],
        }
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.size == 0 {
            write!(f, "{} (empty)", self.name)
        } else {
            write!(f, "{} ({}b)", self.name, self.size)
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory(dir) => dir.fmt(f),
            Self::File(file) => file.fmt(f),
        }
    }
}

/// 递归统计目录数量
///
/// # Examples
///
/// ```
/// use dirtree::scan::{count_directories, Directory, File, Node};
///
/// let nodes = vec![
///     Node::Directory(Directory {
///         name: "a".to_string(),
///         children: vec![Node::Directory(Directory { name: "b".to_string(), children: vec![] })],
///     }),
///     Node::File(File { name: "c".to_string(), size: 1 }),
/// ];
/// assert_eq!(count_directories(&nodes), 2);
/// ```
#[must_use]
pub fn count_directories(nodes: &[Node]) -> usize {
    nodes
        .iter()
        .map(|n| match n {
            Node::Directory(dir) => 1 + count_directories(&dir.children),
            Node::File(_) => 0,
        })
        .sum()
}

/// 递归统计文件数量
#[must_use]
pub fn count_files(nodes: &[Node]) -> usize {
    nodes
        .iter()
        .map(|n| match n {
            Node::Directory(dir) => count_files(&dir.children),
            Node::File(_) => 1,
        })
        .sum()
}

/// 扫描统计结果
///
/// 包含根目录的有序子节点、失败记录、耗时与条目计数。
/// 根目录读取失败时 `nodes` 为空。
#[derive(Debug)]
pub struct ScanStats {
    /// 根目录的直接子节点
    pub nodes: Vec<Node>,
    /// 根目录读取失败
    pub root_failure: Option<ScanError>,
    /// 嵌套失败，按深度优先遇到顺序
    ///
    /// 根目录已成功打开后，迭代其条目时的单条失败也记在这里，
    /// 此时已读出的兄弟条目仍然有效。
    pub nested_failures: Vec<ScanError>,
    /// 目录总数（不含根）
    pub directory_count: usize,
    /// 文件总数
    pub file_count: usize,
    /// 扫描耗时
    pub duration: Duration,
}

impl ScanStats {
    /// 是否完整读取了整棵树
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.root_failure.is_none() && self.nested_failures.is_empty()
    }
}

// ============================================================================
// 扫描上下文
// ============================================================================

/// 扫描上下文
///
/// 在递归过程中共享的只读选项与失败收集器。
struct ScanContext {
    /// 是否包含文件
    include_files: bool,
    /// 已收集的嵌套失败
    failures: Vec<ScanError>,
}

impl ScanContext {
    fn new(include_files: bool) -> Self {
        Self {
            include_files,
            failures: Vec::new(),
        }
    }

    /// 记录一次嵌套失败
    fn record(&mut self, err: ScanError) {
        warn!(path = %err.path().display(), error = %err, "skipping unreadable entry");
        self.failures.push(err);
    }
}

// ============================================================================
// 递归构建
// ============================================================================

/// 读取目录条目并按名称排序
///
/// 单个条目迭代失败记入上下文，不影响其余条目。
fn read_sorted_entries(path: &Path, ctx: &mut ScanContext) -> Result<Vec<DirEntry>, ScanError> {
    let reader =
        fs::read_dir(path).map_err(|e| ScanError::from_io_error(e, path.to_path_buf()))?;

    let mut entries = Vec::new();
    for entry in reader {
        match entry {
            Ok(e) => entries.push(e),
            Err(source) => ctx.record(ScanError::ReadDirFailed {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    entries.sort_by_cached_key(DirEntry::file_name);
    Ok(entries)
}

/// 单线程递归构建子节点列表
fn build_children(path: &Path, ctx: &mut ScanContext) -> Result<Vec<Node>, ScanError> {
    let entries = read_sorted_entries(path, ctx)?;
    let mut nodes = Vec::with_capacity(entries.len());

    for entry in entries {
        let entry_path = entry.path();

        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(source) => {
                ctx.record(ScanError::MetadataFailed {
                    path: entry_path,
                    source,
                });
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();

        if file_type.is_dir() {
            // 子目录失败时保留空目录节点
            let children = match build_children(&entry_path, ctx) {
                Ok(children) => children,
                Err(err) => {
                    ctx.record(err);
                    Vec::new()
                }
            };
            nodes.push(Node::Directory(Directory { name, children }));
        } else if ctx.include_files {
            let size = match entry.metadata() {
                Ok(meta) => meta.len(),
                Err(source) => {
                    ctx.record(ScanError::MetadataFailed {
                        path: entry_path,
                        source,
                    });
                    continue;
                }
            };
            nodes.push(Node::File(File { name, size }));
        }
    }

    Ok(nodes)
}

/// 构建目录树
///
/// 返回 `path` 的有序子节点及全部失败记录，从不提前中止。
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use dirtree::scan::build_tree;
///
/// let stats = build_tree(Path::new("."), true);
/// println!("{} 个目录, {} 个文件", stats.directory_count, stats.file_count);
/// ```
#[must_use]
pub fn build_tree(path: &Path, include_files: bool) -> ScanStats {
    let start = Instant::now();
    debug!(root = %path.display(), include_files, "scanning directory tree");

    let mut ctx = ScanContext::new(include_files);
    let (nodes, root_failure) = match build_children(path, &mut ctx) {
        Ok(nodes) => (nodes, None),
        Err(err) => (Vec::new(), Some(err)),
    };

    let stats = ScanStats {
        directory_count: count_directories(&nodes),
        file_count: count_files(&nodes),
        nodes,
        root_failure,
        nested_failures: ctx.failures,
        duration: start.elapsed(),
    };

    debug!(
        directories = stats.directory_count,
        files = stats.file_count,
        nested_failures = stats.nested_failures.len(),
        root_failed = stats.root_failure.is_some(),
        elapsed_ms = stats.duration.as_millis() as u64,
        "scan finished"
    );

    stats
}

/// 按配置执行目录扫描
#[must_use]
pub fn scan(config: &Config) -> ScanStats {
    build_tree(&config.root_path, config.scan.include_files)
}

// ============================================================================
// 单元测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File as FsFile};
    use std::io::Write;
    use tempfile::TempDir;

    // ------------------------------------------------------------------------
    // 测试辅助函数
    // ------------------------------------------------------------------------

    /// 创建基本测试目录结构
    ///
    /// ```text
    /// root/
    /// ├── b.txt        (0 字节)
    /// ├── a/
    /// │   └── x.txt    (5 字节)
    /// ├── c/
    /// │   ├── nested/
    /// │   │   └── deep.rs (4 字节)
    /// │   └── y.md     (2 字节)
    /// └── empty/
    /// ```
    fn setup_test_dir() -> TempDir {
        let dir = TempDir::new().expect("创建临时目录失败");
        let root = dir.path();

        fs::create_dir(root.join("a")).unwrap();
        fs::create_dir_all(root.join("c/nested")).unwrap();
        fs::create_dir(root.join("empty")).unwrap();

        FsFile::create(root.join("b.txt")).unwrap();
        FsFile::create(root.join("a/x.txt"))
            .unwrap()
            .write_all(b"hello")
            .unwrap();
        FsFile::create(root.join("c/y.md"))
            .unwrap()
            .write_all(b"# ")
            .unwrap();
        FsFile::create(root.join("c/nested/deep.rs"))
            .unwrap()
            .write_all(b"fn()")
            .unwrap();

        dir
    }

    fn names(nodes: &[Node]) -> Vec<&str> {
        nodes.iter().map(Node::name).collect()
    }

    fn find<'a>(nodes: &'a [Node], name: &str) -> &'a Node {
        nodes
            .iter()
            .find(|n| n.name() == name)
            .unwrap_or_else(|| panic!("节点 {name} 不存在"))
    }

    // ------------------------------------------------------------------------
    // Node 测试
    // ------------------------------------------------------------------------

    #[test]
    fn test_file_label_with_size() {
        let file = File {
            name: "x.txt".to_string(),
            size: 5,
        };
        assert_eq!(file.to_string(), "x.txt (5b)");
    }

    #[test]
    fn test_file_label_empty() {
        let file = Node::File(File {
            name: "b.txt".to_string(),
            size: 0,
        });
        assert_eq!(file.to_string(), "b.txt (empty)");
    }

    #[test]
    fn test_directory_label_is_name() {
        let dir = Node::Directory(Directory {
            name: "src".to_string(),
            children: vec![Node::File(File {
                name: "main.rs".to_string(),
                size: 10,
            })],
        });
        assert_eq!(dir.to_string(), "src");
    }

    #[test]
    fn test_file_has_no_children() {
        let file = Node::File(File {
            name: "f".to_string(),
            size: 1,
        });
        assert!(file.children().is_empty());
        assert!(!file.is_dir());
    }

    #[test]
    fn test_count_files_nested() {
        let nodes = vec![
            Node::Directory(Directory {
                name: "a".to_string(),
                children: vec![
                    Node::File(File {
                        name: "1".to_string(),
                        size: 1,
                    }),
                    Node::Directory(Directory {
                        name: "b".to_string(),
                        children: vec![Node::File(File {
                            name: "2".to_string(),
                            size: 0,
                        })],
                    }),
                ],
            }),
            Node::File(File {
                name: "3".to_string(),
                size: 3,
            }),
        ];
        assert_eq!(count_files(&nodes), 3);
        assert_eq!(count_directories(&nodes), 2);
    }

    // ------------------------------------------------------------------------
    // 扫描测试
    // ------------------------------------------------------------------------

    #[test]
    fn test_build_tree_dirs_only() {
        let dir = setup_test_dir();
        let stats = build_tree(dir.path(), false);

        assert!(stats.is_complete());
        assert_eq!(names(&stats.nodes), vec!["a", "c", "empty"]);
        assert_eq!(stats.file_count, 0);
        assert_eq!(stats.directory_count, 4); // a, c, c/nested, empty
        assert!(find(&stats.nodes, "a").children().is_empty());
    }

    #[test]
    fn test_build_tree_with_files_interleaves_by_name() {
        let dir = setup_test_dir();
        let stats = build_tree(dir.path(), true);

        assert!(stats.is_complete());
        assert_eq!(names(&stats.nodes), vec!["a", "b.txt", "c", "empty"]);
        assert_eq!(names(find(&stats.nodes, "c").children()), vec!["nested", "y.md"]);
        assert_eq!(stats.file_count, 4);
        assert_eq!(stats.directory_count, 4);
    }

    #[test]
    fn test_build_tree_records_file_sizes() {
        let dir = setup_test_dir();
        let stats = build_tree(dir.path(), true);

        let a = find(&stats.nodes, "a");
        assert_eq!(
            a.children(),
            &[Node::File(File {
                name: "x.txt".to_string(),
                size: 5,
            })]
        );
        assert_eq!(find(&stats.nodes, "b.txt").to_string(), "b.txt (empty)");
    }

    #[test]
    fn test_build_tree_sorts_by_byte_order() {
        let dir = TempDir::new().unwrap();
        for name in ["beta", "Zeta", "alpha", "_under", "10", "9"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }

        let stats = build_tree(dir.path(), false);

        assert_eq!(
            names(&stats.nodes),
            vec!["10", "9", "Zeta", "_under", "alpha", "beta"]
        );
    }

    #[test]
    fn test_build_tree_empty_directory() {
        let dir = TempDir::new().unwrap();
        let stats = build_tree(dir.path(), true);

        assert!(stats.is_complete());
        assert!(stats.nodes.is_empty());
        assert_eq!(stats.directory_count, 0);
    }

    #[test]
    fn test_build_tree_nonexistent_root() {
        let stats = build_tree(Path::new("/nonexistent/path/12345"), true);

        assert!(stats.nodes.is_empty());
        assert!(matches!(
            stats.root_failure,
            Some(ScanError::PathNotFound { .. })
        ));
        assert!(stats.nested_failures.is_empty());
        assert!(!stats.is_complete());
    }

    #[test]
    fn test_build_tree_file_as_root() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("file.txt");
        FsFile::create(&file_path).unwrap();

        let stats = build_tree(&file_path, true);

        assert!(stats.nodes.is_empty());
        let err = stats.root_failure.expect("根路径是文件时应失败");
        assert_eq!(err.path(), file_path.as_path());
    }

    #[test]
    fn test_build_tree_deeply_nested() {
        let dir = TempDir::new().unwrap();
        let mut path = dir.path().to_path_buf();
        for i in 0..20 {
            path = path.join(format!("level{i}"));
        }
        fs::create_dir_all(&path).unwrap();

        let stats = build_tree(dir.path(), false);

        assert_eq!(stats.directory_count, 20);
        let mut current = &stats.nodes;
        for i in 0..20 {
            assert_eq!(current.len(), 1);
            assert_eq!(current[0].name(), format!("level{i}"));
            match &current[0] {
                Node::Directory(d) => current = &d.children,
                Node::File(_) => panic!("应为目录"),
            }
        }
    }

    #[test]
    fn test_scan_uses_config() {
        let dir = setup_test_dir();
        let mut config = Config::with_root(dir.path().to_path_buf());

        assert_eq!(scan(&config).file_count, 0);

        config.scan.include_files = true;
        assert_eq!(scan(&config).file_count, 4);
    }

    #[test]
    fn test_build_tree_is_deterministic() {
        let dir = setup_test_dir();
        let first = build_tree(dir.path(), true);
        let second = build_tree(dir.path(), true);
        assert_eq!(first.nodes, second.nodes);
    }

    #[cfg(unix)]
    #[test]
    fn test_build_tree_does_not_follow_symlinks() {
        use std::os::unix::fs::symlink;

        let dir = setup_test_dir();
        symlink(dir.path().join("c"), dir.path().join("link")).unwrap();

        let dirs_only = build_tree(dir.path(), false);
        assert_eq!(names(&dirs_only.nodes), vec!["a", "c", "empty"]);

        let with_files = build_tree(dir.path(), true);
        let link = find(&with_files.nodes, "link");
        assert!(!link.is_dir());
        assert!(link.children().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_build_tree_collects_nested_failures() {
        use std::os::unix::fs::PermissionsExt;

        let dir = setup_test_dir();
        let locked = dir.path().join("c");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // root 用户不受权限位限制，此时无法构造失败
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            eprintln!("跳过：当前用户不受权限位限制");
            return;
        }

        let stats = build_tree(dir.path(), true);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(stats.root_failure.is_none());
        assert_eq!(names(&stats.nodes), vec!["a", "b.txt", "c", "empty"]);
        assert!(find(&stats.nodes, "c").children().is_empty());
        assert_eq!(stats.nested_failures.len(), 1);
        assert!(matches!(
            stats.nested_failures[0],
            ScanError::PermissionDenied { .. }
        ));
        assert_eq!(stats.nested_failures[0].path(), locked.as_path());
    }
}
