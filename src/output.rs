//! Output module: writes the rendered tree to its destination.
//!
//! The tree is rendered through a `BufWriter` and flushed explicitly so that
//! write failures (a closed pipe, a full disk) surface as `OutputError`
//! instead of being lost on drop.
//!
//! File: src/output.rs
//! Date: 2026-10-17

#![forbid(unsafe_code)]

use std::io::{BufWriter, Write};

use crate::error::OutputError;
use crate::render;
use crate::scan::Node;

/// Renders `nodes` into `out` and flushes it.
///
/// # Errors
///
/// Returns `OutputError::StdoutFailed` if writing or flushing fails.
///
/// # Examples
///
/// ```
/// use dirtree::output::write_tree;
/// use dirtree::scan::{Directory, Node};
///
/// let nodes = vec![Node::Directory(Directory { name: "a".to_string(), children: vec![] })];
/// let mut buf = Vec::new();
/// write_tree(&mut buf, &nodes).unwrap();
/// assert_eq!(buf, "└───a\n".as_bytes());
/// ```
pub fn write_tree<W: Write>(out: W, nodes: &[Node]) -> Result<(), OutputError> {
    let mut writer = BufWriter::new(out);
    render::render(&mut writer, nodes)?;
    writer.flush()?;
    Ok(())
}
