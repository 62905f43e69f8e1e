//! Context menu item model and selection dispatch
//!
//! Menus are plain data here: the host renders the labels, and when the user
//! picks an entry it hands the selected action back to [`MenuAction::apply`].

use crate::nodes::batch_text::inputs;
use crate::nodes::node::{InvalidInputIndex, Node};

/// Action bound to a context menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Append one generated text input socket to the node
    AddTextInput,
    /// Remove the node's last input socket
    RemoveLastInput,
    /// An entry owned by the host application, carried through unchanged
    Host(String),
}

impl MenuAction {
    /// Applies this action to `node`.
    ///
    /// Host entries are dispatched by the host itself; applying one here is a
    /// no-op.
    pub fn apply(&self, node: &mut Node) -> Result<(), InvalidInputIndex> {
        match self {
            MenuAction::AddTextInput => {
                inputs::add_text_input(node);
                Ok(())
            }
            MenuAction::RemoveLastInput => inputs::remove_last_input(node),
            MenuAction::Host(_) => Ok(()),
        }
    }
}

/// One entry in a node's context menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub action: MenuAction,
}

impl MenuItem {
    /// Creates a new menu entry
    pub fn new(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }

    /// Creates a host-owned entry whose label doubles as its dispatch id
    pub fn host(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            action: MenuAction::Host(label.clone()),
            label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::batch_text::BatchTextNode;
    use crate::nodes::NodeFactory;

    #[test]
    fn test_apply_dispatches_socket_actions() {
        let mut node = BatchTextNode::create(0);

        MenuAction::AddTextInput.apply(&mut node).unwrap();
        assert_eq!(node.input_count(), 2);
        assert_eq!(node.inputs[1].name, "text2");

        MenuAction::RemoveLastInput.apply(&mut node).unwrap();
        assert_eq!(node.input_count(), 1);
    }

    #[test]
    fn test_host_entries_apply_as_no_op() {
        let mut node = BatchTextNode::create(0);
        let before = node.clone();

        let item = MenuItem::host("properties");
        assert_eq!(item.label, "properties");
        item.action.apply(&mut node).unwrap();
        assert_eq!(node, before);
    }
}
