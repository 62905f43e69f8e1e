//! Node factory system with metadata-driven node creation

use super::node::{Node, NodeId};
use super::socket::{DataType, SocketMetadata};

/// Socket definition for node creation
#[derive(Debug, Clone)]
pub struct SocketDefinition {
    pub name: String,
    pub data_type: DataType,
    pub metadata: SocketMetadata,
    pub description: Option<String>,
}

impl SocketDefinition {
    /// Create a socket definition with default metadata
    pub fn new(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            metadata: SocketMetadata::default(),
            description: None,
        }
    }

    /// Set the socket metadata
    pub fn with_metadata(mut self, metadata: SocketMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Add description to the socket
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Metadata for a node type - the single source of truth for node creation
#[derive(Debug, Clone)]
pub struct NodeMetadata {
    pub node_type: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub category: &'static str,
    pub inputs: Vec<SocketDefinition>,
    pub outputs: Vec<SocketDefinition>,
}

impl NodeMetadata {
    /// Create node metadata with sensible defaults
    pub fn new(
        node_type: &'static str,
        display_name: &'static str,
        category: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            node_type,
            display_name,
            description,
            version: "1.0",
            category,
            inputs: vec![],
            outputs: vec![],
        }
    }

    /// Builder pattern methods for fluent configuration
    pub fn with_inputs(mut self, inputs: Vec<SocketDefinition>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_outputs(mut self, outputs: Vec<SocketDefinition>) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn with_version(mut self, version: &'static str) -> Self {
        self.version = version;
        self
    }
}

/// Trait for node types that create instances from their metadata
pub trait NodeFactory: Send + Sync {
    /// Get node metadata
    fn metadata() -> NodeMetadata
    where
        Self: Sized;

    /// Create a node instance with the given id
    fn create(id: NodeId) -> Node
    where
        Self: Sized,
    {
        let meta = Self::metadata();
        let mut node = Node::new(id, meta.node_type, meta.display_name);

        for input in &meta.inputs {
            node.add_input(&input.name, input.data_type, input.metadata);
        }
        for output in &meta.outputs {
            node.add_output(&output.name, output.data_type);
        }

        node
    }
}
