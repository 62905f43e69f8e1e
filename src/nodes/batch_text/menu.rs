//! Context menu extension for the batch text node

use crate::constants::menu::{ADD_INPUT, REMOVE_INPUT};
use crate::extensions::NodeContextMenu;
use crate::menu::{MenuAction, MenuItem};
use crate::nodes::Node;

/// Contributes "add input" / "remove input" ahead of the host's entries
#[derive(Debug, Clone, Copy)]
pub struct TextInputMenu;

impl NodeContextMenu for TextInputMenu {
    fn extra_menu_options(&self, _node: &Node, base_options: Vec<MenuItem>) -> Vec<MenuItem> {
        let mut options = vec![
            MenuItem::new(ADD_INPUT, MenuAction::AddTextInput),
            MenuItem::new(REMOVE_INPUT, MenuAction::RemoveLastInput),
        ];
        options.extend(base_options);
        options
    }
}
