//! Node types and core node functionality

use super::socket::{DataType, Socket, SocketDirection, SocketMetadata};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique identifier for a node
pub type NodeId = usize;

/// An input socket index that does not exist on the node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid input index {index} (node has {count} input sockets)")]
pub struct InvalidInputIndex {
    pub index: usize,
    pub count: usize,
}

/// Core node structure representing one operation in the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Type identifier used for registry lookups (e.g. "BatchText")
    pub node_type: String,
    pub title: String,
    pub inputs: Vec<Socket>,
    pub outputs: Vec<Socket>,
}

impl Node {
    /// Creates a new node with empty socket lists
    pub fn new(id: NodeId, node_type: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            node_type: node_type.into(),
            title: title.into(),
            inputs: vec![],
            outputs: vec![],
        }
    }

    /// Adds an input socket at the end of the input list
    pub fn add_input(
        &mut self,
        name: impl Into<String>,
        data_type: DataType,
        metadata: SocketMetadata,
    ) -> &mut Self {
        let socket_id = self.inputs.len();
        self.inputs.push(
            Socket::new(socket_id, name, SocketDirection::Input, data_type)
                .with_metadata(metadata),
        );
        self
    }

    /// Adds an output socket to the node
    pub fn add_output(&mut self, name: impl Into<String>, data_type: DataType) -> &mut Self {
        let socket_id = self.outputs.len();
        self.outputs
            .push(Socket::new(socket_id, name, SocketDirection::Output, data_type));
        self
    }

    /// Number of input sockets currently on the node
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Removes the input socket at `index` and returns it.
    ///
    /// Later sockets shift down one position and are renumbered, keeping
    /// `socket.id == index` true across the list.
    pub fn remove_input(&mut self, index: usize) -> Result<Socket, InvalidInputIndex> {
        if index >= self.inputs.len() {
            return Err(InvalidInputIndex {
                index,
                count: self.inputs.len(),
            });
        }
        let removed = self.inputs.remove(index);
        for (i, socket) in self.inputs.iter_mut().enumerate() {
            socket.id = i;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sockets_in_order() {
        let mut node = Node::new(0, "BatchText", "Batch Text");
        node.add_input("text1", DataType::Text, SocketMetadata::multiline())
            .add_input("text2", DataType::Text, SocketMetadata::multiline())
            .add_output("texts", DataType::Text);

        assert_eq!(node.input_count(), 2);
        assert_eq!(node.inputs[0].name, "text1");
        assert_eq!(node.inputs[1].name, "text2");
        assert_eq!(node.inputs[0].id, 0);
        assert_eq!(node.inputs[1].id, 1);
        assert_eq!(node.outputs.len(), 1);
    }

    #[test]
    fn test_remove_input_renumbers_tail() {
        let mut node = Node::new(0, "BatchText", "Batch Text");
        node.add_input("text1", DataType::Text, SocketMetadata::multiline())
            .add_input("text2", DataType::Text, SocketMetadata::multiline())
            .add_input("text3", DataType::Text, SocketMetadata::multiline());

        let removed = node.remove_input(1).unwrap();
        assert_eq!(removed.name, "text2");
        assert_eq!(node.input_count(), 2);
        assert_eq!(node.inputs[0].name, "text1");
        assert_eq!(node.inputs[1].name, "text3");
        assert_eq!(node.inputs[1].id, 1);
    }

    #[test]
    fn test_remove_input_out_of_range() {
        let mut node = Node::new(0, "BatchText", "Batch Text");
        node.add_input("text1", DataType::Text, SocketMetadata::multiline());

        let err = node.remove_input(1).unwrap_err();
        assert_eq!(err, InvalidInputIndex { index: 1, count: 1 });
        assert_eq!(node.input_count(), 1);
    }
}
