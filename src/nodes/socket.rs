//! Socket types and functionality for node connections

use serde::{Deserialize, Serialize};

/// Unique identifier for a socket within one direction of a node
pub type SocketId = usize;

/// Direction of a socket (input or output)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocketDirection {
    Input,
    Output,
}

/// Data types that can flow through sockets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// Text string
    Text,
    /// Floating point number
    Float,
    /// Boolean value
    Boolean,
    /// Any type (for generic sockets)
    Any,
}

impl DataType {
    /// Check if this data type can connect to another
    pub fn can_connect_to(&self, other: &DataType) -> bool {
        self == other || *self == DataType::Any || *other == DataType::Any
    }

    /// Get a human-readable name for this data type
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Text => "Text",
            DataType::Float => "Float",
            DataType::Boolean => "Boolean",
            DataType::Any => "Any",
        }
    }
}

/// Presentation configuration carried by a socket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocketMetadata {
    /// Whether a text socket accepts multi-line entry
    pub multiline: bool,
}

impl SocketMetadata {
    /// Metadata for a multi-line text entry socket
    pub fn multiline() -> Self {
        Self { multiline: true }
    }
}

/// Represents a connection point on a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Socket {
    pub id: SocketId,
    pub name: String,
    pub direction: SocketDirection,
    pub data_type: DataType,
    pub metadata: SocketMetadata,
}

impl Socket {
    /// Creates a new socket with default metadata
    pub fn new(
        id: SocketId,
        name: impl Into<String>,
        direction: SocketDirection,
        data_type: DataType,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            direction,
            data_type,
            metadata: SocketMetadata::default(),
        }
    }

    /// Sets the socket metadata
    pub fn with_metadata(mut self, metadata: SocketMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Checks if this socket is an input
    pub fn is_input(&self) -> bool {
        matches!(self.direction, SocketDirection::Input)
    }

    /// Checks if this socket is an output
    pub fn is_output(&self) -> bool {
        matches!(self.direction, SocketDirection::Output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_compatibility() {
        assert!(DataType::Text.can_connect_to(&DataType::Text));
        assert!(DataType::Text.can_connect_to(&DataType::Any));
        assert!(DataType::Any.can_connect_to(&DataType::Float));

        assert!(!DataType::Text.can_connect_to(&DataType::Float));
        assert!(!DataType::Boolean.can_connect_to(&DataType::Text));
    }

    #[test]
    fn test_socket_metadata() {
        let socket = Socket::new(0, "text1", SocketDirection::Input, DataType::Text)
            .with_metadata(SocketMetadata::multiline());
        assert!(socket.is_input());
        assert!(!socket.is_output());
        assert!(socket.metadata.multiline);

        let plain = Socket::new(0, "texts", SocketDirection::Output, DataType::Text);
        assert!(!plain.metadata.multiline);
    }
}
