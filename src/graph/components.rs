use tracing::debug;

use crate::errors::Result;
use crate::types::{EdgeDirection, Graph, VertexId};

/// Counts the connected components of an undirected graph.
///
/// Builds the adjacency list from `edges` (each edge inserted in both
/// directions), then scans vertices `0..vertex_count` in increasing order
/// and launches a DFS from every vertex not yet reached by an earlier
/// launch. The number of launches is the number of components.
///
/// A graph with no vertices has zero components; a vertex with no edges
/// forms a singleton component.
pub fn count_connected_components(
    vertex_count: usize,
    edges: &[(VertexId, VertexId)],
) -> Result<usize> {
    let graph = Graph::from_edges(vertex_count, edges, EdgeDirection::Undirected)?;
    Ok(component_count(&graph))
}

/// Counts the connected components of a prebuilt graph.
pub fn component_count(graph: &Graph) -> usize {
    component_members(graph).len()
}

/// Collects the connected components of a prebuilt graph.
///
/// Each component lists its vertices in DFS visitation order; components
/// are ordered by their lowest-indexed vertex, which is always the vertex
/// the DFS was launched from.
pub fn component_members(graph: &Graph) -> Vec<Vec<VertexId>> {
    let mut visited = vec![false; graph.vertex_count()];
    let mut components: Vec<Vec<VertexId>> = Vec::new();

    for root in 0..graph.vertex_count() {
        if !visited[root] {
            let mut members: Vec<VertexId> = Vec::new();
            collect_component(graph, root, &mut visited, &mut members);
            components.push(members);
        }
    }

    debug!(
        vertex_count = graph.vertex_count(),
        component_count = components.len(),
        "component scan complete"
    );

    components
}

/// Recursive DFS marking every vertex reachable from `vertex` as visited
/// and appending it to `members`.
///
/// Vertices are marked on first encounter, so each one is visited at most
/// once and the traversal terminates.
fn collect_component(
    graph: &Graph,
    vertex: VertexId,
    visited: &mut [bool],
    members: &mut Vec<VertexId>,
) {
    visited[vertex] = true;
    members.push(vertex);

    for &neighbor in graph.neighbors(vertex) {
        if !visited[neighbor] {
            collect_component(graph, neighbor, visited, members);
        }
    }
}
