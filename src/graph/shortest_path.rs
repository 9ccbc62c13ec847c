use std::collections::VecDeque;

use tracing::debug;

use crate::errors::Result;
use crate::types::{check_vertex, EdgeDirection, Graph, VertexId};

/// Computes the minimum number of edges on a path from `start` to `end` in
/// an unweighted directed graph.
///
/// Builds the adjacency list from `edges` (source to target only) and runs
/// a breadth-first search from `start`. Returns `None` when `end` is not
/// reachable from `start`; `start == end` yields `Some(0)` without
/// consulting any edges.
pub fn shortest_path_length(
    vertex_count: usize,
    edges: &[(VertexId, VertexId)],
    start: VertexId,
    end: VertexId,
) -> Result<Option<usize>> {
    let graph = Graph::from_edges(vertex_count, edges, EdgeDirection::Directed)?;
    hop_distance(&graph, start, end)
}

/// BFS hop distance between two vertices of a prebuilt graph.
///
/// Returns as soon as `end` is dequeued. FIFO order guarantees vertices are
/// dequeued in non-decreasing distance order, so the first distance recorded
/// for `end` is minimal.
pub fn hop_distance(graph: &Graph, start: VertexId, end: VertexId) -> Result<Option<usize>> {
    check_vertex(start, graph.vertex_count())?;
    check_vertex(end, graph.vertex_count())?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut queue: VecDeque<(VertexId, usize)> = VecDeque::new();

    visited[start] = true;
    queue.push_back((start, 0));

    while let Some((current, distance)) = queue.pop_front() {
        if current == end {
            debug!(start, end, distance, "target dequeued");
            return Ok(Some(distance));
        }

        for &neighbor in graph.neighbors(current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back((neighbor, distance + 1));
            }
        }
    }

    debug!(start, end, "queue drained without reaching target");
    Ok(None)
}

/// Computes the hop distance from `start` to every vertex of the graph.
///
/// Unlike [`hop_distance`] there is no early exit; the whole reachable set
/// is explored. Unreached vertices stay `None`, and the entry for `start`
/// is always `Some(0)`.
pub fn bfs_distances(graph: &Graph, start: VertexId) -> Result<Vec<Option<usize>>> {
    check_vertex(start, graph.vertex_count())?;

    let mut distance: Vec<Option<usize>> = vec![None; graph.vertex_count()];
    let mut queue: VecDeque<(VertexId, usize)> = VecDeque::new();

    distance[start] = Some(0);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        for &neighbor in graph.neighbors(current) {
            if distance[neighbor].is_none() {
                distance[neighbor] = Some(depth + 1);
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    Ok(distance)
}

/// Finds one minimum-hop path from `start` to `end`, endpoints inclusive.
///
/// BFS records the parent of each vertex on first encounter; the path is
/// rebuilt by walking parents back from `end` and reversing. Returns `None`
/// when `end` is unreachable. The path for `start == end` is `[start]`, and
/// a returned path always has `hop_distance + 1` entries.
pub fn shortest_path(
    graph: &Graph,
    start: VertexId,
    end: VertexId,
) -> Result<Option<Vec<VertexId>>> {
    check_vertex(start, graph.vertex_count())?;
    check_vertex(end, graph.vertex_count())?;

    if start == end {
        return Ok(Some(vec![start]));
    }

    // BFS tracking the parent used to reach each vertex.
    let mut visited = vec![false; graph.vertex_count()];
    let mut parent: Vec<Option<VertexId>> = vec![None; graph.vertex_count()];
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    let mut found = false;

    while let Some(current) = queue.pop_front() {
        for &neighbor in graph.neighbors(current) {
            if visited[neighbor] {
                continue;
            }
            visited[neighbor] = true;
            parent[neighbor] = Some(current);

            if neighbor == end {
                found = true;
                break;
            }
            queue.push_back(neighbor);
        }

        if found {
            break;
        }
    }

    if !found {
        return Ok(None);
    }

    // Walk parents back from the end; `start` has no parent and stops the walk.
    let mut path: Vec<VertexId> = vec![end];
    let mut current = end;
    while let Some(p) = parent[current] {
        path.push(p);
        current = p;
    }
    path.reverse();

    Ok(Some(path))
}
