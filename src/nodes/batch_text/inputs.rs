//! Dynamic input socket management for the batch text node
//!
//! Input names derive from the socket count at call time: a grown socket is
//! named `"text"` + (count + 1), rendered as plain decimal. Growing after a
//! removal can therefore reuse a name from earlier in the list's history.

use crate::constants::TEXT_INPUT_PREFIX;
use crate::nodes::node::{InvalidInputIndex, Node};
use crate::nodes::socket::{DataType, SocketMetadata};
use log::debug;

/// Appends one generated multiline text input socket to `node`.
pub fn add_text_input(node: &mut Node) {
    let index = 1 + node.input_count();
    let name = format!("{}{}", TEXT_INPUT_PREFIX, index);
    debug!("node {}: adding input socket '{}'", node.id, name);
    node.add_input(name, DataType::Text, SocketMetadata::multiline());
}

/// Removes the last input socket of `node`, if it has any.
///
/// An empty input list is left untouched. The base socket is not protected:
/// enough removals empty the list entirely.
pub fn remove_last_input(node: &mut Node) -> Result<(), InvalidInputIndex> {
    let count = node.input_count();
    if count == 0 {
        return Ok(());
    }
    let removed = node.remove_input(count - 1)?;
    debug!("node {}: removed input socket '{}'", node.id, removed.name);
    Ok(())
}
