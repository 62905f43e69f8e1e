//! Context menu extension registry
//!
//! Extensions are plain objects implementing [`NodeContextMenu`], registered
//! against a node type identifier. The table is built once at startup;
//! menu-open time lookups are a single map access.

use crate::menu::MenuItem;
use crate::nodes::batch_text::{BatchTextNode, TextInputMenu};
use crate::nodes::{Node, NodeFactory};
use log::debug;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Trait for contributing extra context menu options to a node
pub trait NodeContextMenu: Send + Sync {
    /// Returns the full option list for `node`, given the host's base options
    fn extra_menu_options(&self, node: &Node, base_options: Vec<MenuItem>) -> Vec<MenuItem>;
}

/// Registry mapping node type identifiers to context menu extensions
pub struct MenuExtensionRegistry {
    extensions: BTreeMap<String, Box<dyn NodeContextMenu>>,
}

impl MenuExtensionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            extensions: BTreeMap::new(),
        }
    }

    /// Register a context menu extension for a node type
    pub fn register(&mut self, node_type: impl Into<String>, extension: Box<dyn NodeContextMenu>) {
        let node_type = node_type.into();
        debug!("registering context menu extension for '{}'", node_type);
        self.extensions.insert(node_type, extension);
    }

    /// Check whether a node type has a registered extension
    pub fn has_extension(&self, node_type: &str) -> bool {
        self.extensions.contains_key(node_type)
    }

    /// Node types with registered extensions
    pub fn node_types(&self) -> Vec<&str> {
        self.extensions.keys().map(|s| s.as_str()).collect()
    }

    /// Build the context menu option list for `node`.
    ///
    /// Nodes without a registered extension get the host's options back
    /// unchanged.
    pub fn menu_options(&self, node: &Node, base_options: Vec<MenuItem>) -> Vec<MenuItem> {
        match self.extensions.get(&node.node_type) {
            Some(extension) => extension.extra_menu_options(node, base_options),
            None => base_options,
        }
    }
}

impl Default for MenuExtensionRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(BatchTextNode::metadata().node_type, Box::new(TextInputMenu));
        registry
    }
}

/// Extension table resolved once at startup
static MENU_EXTENSIONS: Lazy<MenuExtensionRegistry> = Lazy::new(MenuExtensionRegistry::default);

/// The startup extension registry
pub fn menu_extensions() -> &'static MenuExtensionRegistry {
    &MENU_EXTENSIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuAction;

    #[test]
    fn test_extension_entries_come_first() {
        let node = BatchTextNode::create(0);
        let base = vec![MenuItem::host("properties"), MenuItem::host("delete")];

        let options = menu_extensions().menu_options(&node, base);

        assert_eq!(options.len(), 4);
        assert_eq!(options[0].label, "add input");
        assert_eq!(options[0].action, MenuAction::AddTextInput);
        assert_eq!(options[1].label, "remove input");
        assert_eq!(options[1].action, MenuAction::RemoveLastInput);
        assert_eq!(options[2].label, "properties");
        assert_eq!(options[3].label, "delete");
    }

    #[test]
    fn test_unregistered_node_types_pass_through() {
        let node = Node::new(0, "Unknown", "Unknown");
        let base = vec![MenuItem::host("properties")];

        let options = menu_extensions().menu_options(&node, base.clone());
        assert_eq!(options, base);
    }

    #[test]
    fn test_default_registry_contents() {
        let registry = MenuExtensionRegistry::default();
        assert!(registry.has_extension("BatchText"));
        assert!(!registry.has_extension("Add"));
        assert_eq!(registry.node_types(), ["BatchText"]);
    }
}
