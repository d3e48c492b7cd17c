//! Rendering module: transforms the scan IR into text tree output.
//!
//! Each node becomes one line made of the accumulated ancestor prefix, a
//! connector and the node's label:
//!
//! - **Connectors**: `├───` for a sibling with more siblings below it,
//!   `└───` for the last sibling
//! - **Prefix fragments**: children of a non-last directory inherit `│\t`,
//!   children of a last directory inherit `\t`
//! - **Order**: strict depth-first pre-order; a directory's subtree is written
//!   in full before its next sibling
//!
//! File: src/render.rs
//! Date: 2026-10-17

#![forbid(unsafe_code)]

use std::io::{self, Write};

use crate::scan::Node;

// ============================================================================
// Tree Characters
// ============================================================================

/// Tree drawing characters.
///
/// # Examples
///
/// ```
/// use dirtree::render::TreeChars;
///
/// let chars = TreeChars::STANDARD;
/// assert_eq!(chars.branch, "├───");
/// assert_eq!(chars.last_branch, "└───");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeChars {
    /// Connector for a sibling that is followed by more siblings.
    pub branch: &'static str,
    /// Connector for the last sibling.
    pub last_branch: &'static str,
    /// Prefix fragment below a non-last directory.
    pub vertical: &'static str,
    /// Prefix fragment below a last directory.
    pub space: &'static str,
}

impl TreeChars {
    /// The box-drawing set used for all output.
    pub const STANDARD: Self = Self {
        branch: "├───",
        last_branch: "└───",
        vertical: "│\t",
        space: "\t",
    };

    /// Returns the connector for a sibling at the given position.
    #[must_use]
    pub const fn connector(&self, is_last: bool) -> &'static str {
        if is_last { self.last_branch } else { self.branch }
    }

    /// Returns the prefix fragment a directory hands down to its children.
    #[must_use]
    pub const fn fragment(&self, is_last: bool) -> &'static str {
        if is_last { self.space } else { self.vertical }
    }
}

impl Default for TreeChars {
    fn default() -> Self {
        Self::STANDARD
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Writes the tree for `nodes` to `out`, starting with an empty prefix.
///
/// # Errors
///
/// Returns the first IO error raised by `out`.
///
/// # Examples
///
/// ```
/// use dirtree::render::render;
/// use dirtree::scan::{Directory, File, Node};
///
/// let nodes = vec![
///     Node::Directory(Directory {
///         name: "a".to_string(),
///         children: vec![Node::File(File { name: "x.txt".to_string(), size: 5 })],
///     }),
///     Node::File(File { name: "b.txt".to_string(), size: 0 }),
/// ];
///
/// let mut out = Vec::new();
/// render(&mut out, &nodes).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "├───a\n│\t└───x.txt (5b)\n└───b.txt (empty)\n"
/// );
/// ```
pub fn render<W: Write + ?Sized>(out: &mut W, nodes: &[Node]) -> io::Result<()> {
    render_with_prefix(out, nodes, "")
}

/// Writes the tree for `nodes` below an already accumulated `prefix`.
///
/// Lets callers embed a subtree under their own indentation.
///
/// # Errors
///
/// Returns the first IO error raised by `out`.
pub fn render_with_prefix<W: Write + ?Sized>(
    out: &mut W,
    nodes: &[Node],
    prefix: &str,
) -> io::Result<()> {
    render_children(out, nodes, &TreeChars::STANDARD, prefix)
}

/// Renders `nodes` into a `String`.
///
/// # Examples
///
/// ```
/// use dirtree::render::render_to_string;
/// use dirtree::scan::{Directory, Node};
///
/// let nodes = vec![Node::Directory(Directory { name: "a".to_string(), children: vec![] })];
/// assert_eq!(render_to_string(&nodes), "└───a\n");
/// ```
#[must_use]
pub fn render_to_string(nodes: &[Node]) -> String {
    let mut buf = Vec::new();
    // writing into a Vec cannot fail
    let _ = render(&mut buf, nodes);
    String::from_utf8_lossy(&buf).into_owned()
}

// ============================================================================
// Internal Helper Functions
// ============================================================================

/// Renders one sibling list, recursing into directories.
fn render_children<W: Write + ?Sized>(
    out: &mut W,
    nodes: &[Node],
    chars: &TreeChars,
    prefix: &str,
) -> io::Result<()> {
    let count = nodes.len();

    for (i, node) in nodes.iter().enumerate() {
        let is_last = i + 1 == count;
        writeln!(out, "{}{}{}", prefix, chars.connector(is_last), node)?;

        match node {
            Node::Directory(dir) => {
                let child_prefix = format!("{}{}", prefix, chars.fragment(is_last));
                render_children(out, &dir.children, chars, &child_prefix)?;
            }
            Node::File(_) => {}
        }
    }

    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
