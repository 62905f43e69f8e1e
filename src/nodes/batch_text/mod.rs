//! Batch text node - collects several text snippets into one batch
//!
//! The node is created with a single multiline text input; its context menu
//! extension grows and shrinks further text inputs on demand.

pub mod inputs;
pub mod menu;

pub use menu::TextInputMenu;

use crate::nodes::{DataType, NodeFactory, NodeMetadata, SocketDefinition, SocketMetadata};

/// Batch text node factory
#[derive(Debug, Clone, Copy)]
pub struct BatchTextNode;

impl NodeFactory for BatchTextNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "BatchText",
            "Batch Text",
            "Text",
            "Collects multiple text snippets into a single batch",
        )
        .with_inputs(vec![SocketDefinition::new("text1", DataType::Text)
            .with_metadata(SocketMetadata::multiline())
            .with_description("Base text entry")])
        .with_outputs(vec![SocketDefinition::new("texts", DataType::Text)
            .with_description("The batched text values")])
    }
}
