//! Dyninput - dynamic input socket extensions for node-based editors
//!
//! This library provides a batch text node whose input socket list grows and
//! shrinks through context menu actions, together with the socket model,
//! metadata-driven node factory and extension registry a host editor needs to
//! install the behavior.

pub mod constants;
pub mod extensions;
pub mod menu;
pub mod nodes;

pub use extensions::{menu_extensions, MenuExtensionRegistry, NodeContextMenu};
pub use menu::{MenuAction, MenuItem};
pub use nodes::{
    DataType, InvalidInputIndex, Node, NodeFactory, NodeId, NodeMetadata, Socket,
    SocketDefinition, SocketDirection, SocketId, SocketMetadata,
};
