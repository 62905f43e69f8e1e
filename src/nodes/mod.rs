//! Node system - socket model, node structure and factories

// Core node system modules
pub mod factory;
pub mod node;
pub mod socket;

// Node implementations
pub mod batch_text;

// Re-export core types
pub use node::{InvalidInputIndex, Node, NodeId};
pub use socket::{DataType, Socket, SocketDirection, SocketId, SocketMetadata};

// Re-export factory types
pub use factory::{NodeFactory, NodeMetadata, SocketDefinition};
