use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{HopGraphError, Result};

/// Index of a vertex within a graph. Valid values are `0..vertex_count`.
pub type VertexId = usize;

/// How edges from an edge list are inserted into the adjacency lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    /// Each edge is inserted only into the source vertex's adjacency list.
    Directed,
    /// Each edge is inserted into both endpoints' adjacency lists.
    Undirected,
}

impl EdgeDirection {
    /// Returns the string representation of this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeDirection::Directed => "directed",
            EdgeDirection::Undirected => "undirected",
        }
    }
}

/// An unweighted graph stored as per-vertex adjacency lists.
///
/// Built once from an edge list and immutable afterwards. Neighbors appear
/// in edge insertion order; duplicate edges are kept, not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    adjacency: Vec<Vec<VertexId>>,
}

impl Graph {
    /// Builds a graph from an edge list.
    ///
    /// Every edge endpoint must fall inside `[0, vertex_count)`; the first
    /// violation aborts construction with `VertexOutOfRange`.
    pub fn from_edges(
        vertex_count: usize,
        edges: &[(VertexId, VertexId)],
        direction: EdgeDirection,
    ) -> Result<Graph> {
        let mut adjacency: Vec<Vec<VertexId>> = vec![Vec::new(); vertex_count];

        for &(u, v) in edges {
            check_vertex(u, vertex_count)?;
            check_vertex(v, vertex_count)?;
            adjacency[u].push(v);
            if direction == EdgeDirection::Undirected {
                adjacency[v].push(u);
            }
        }

        debug!(
            vertex_count,
            edge_count = edges.len(),
            direction = direction.as_str(),
            "built adjacency list"
        );

        Ok(Graph {
            vertex_count,
            adjacency,
        })
    }

    /// Number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Neighbors of `vertex` in insertion order.
    ///
    /// Out-of-range vertices have no neighbors.
    pub fn neighbors(&self, vertex: VertexId) -> &[VertexId] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Validates that `vertex` is a legal index for a graph of `vertex_count` vertices.
pub(crate) fn check_vertex(vertex: VertexId, vertex_count: usize) -> Result<()> {
    if vertex >= vertex_count {
        return Err(HopGraphError::VertexOutOfRange {
            vertex,
            vertex_count,
        });
    }
    Ok(())
}

/// Result of a component analysis, serializable for CLI output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentReport {
    pub vertex_count: usize,
    pub component_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Vec<VertexId>>>,
}

/// Result of a shortest-path query, serializable for CLI output.
///
/// `length` is `null` in JSON when `end` is unreachable from `start`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathReport {
    pub start: VertexId,
    pub end: VertexId,
    pub length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<VertexId>>,
}
