use thiserror::Error;

/// Errors that can occur during graph operations.
#[derive(Error, Debug)]
pub enum HopGraphError {
    #[error("vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("malformed edge '{input}' (expected 'U,V')")]
    MalformedEdge { input: String },
}

/// Convenience alias for results using `HopGraphError`.
pub type Result<T> = std::result::Result<T, HopGraphError>;
