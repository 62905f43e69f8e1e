//! Crate-wide constants and default values

/// Name prefix for generated text input sockets
pub const TEXT_INPUT_PREFIX: &str = "text";

/// Context menu labels
pub mod menu {
    /// Label for the entry that appends a text input socket
    pub const ADD_INPUT: &str = "add input";

    /// Label for the entry that removes the last input socket
    pub const REMOVE_INPUT: &str = "remove input";
}
