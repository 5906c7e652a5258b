use std::collections::VecDeque;

use crate::graph::Graph;

/// Breadth-first search from `start` that only crosses edges with
/// `penalty < threshold`. Returns true once `goal` is dequeued.
///
/// Nodes are marked visited when dequeued, so a node may sit in the queue more
/// than once, but its edges are expanded only once.
pub fn reachable(graph: &Graph, start: usize, goal: usize, threshold: u32) -> bool {
    let mut visited = vec![false; graph.node_count() + 1];
    let mut queue: VecDeque<usize> = [start].into();
    let mut expanded = 0u32;

    while let Some(u) = queue.pop_front() {
        if u == goal {
            tracing::trace!(threshold, expanded, "goal reached");
            return true;
        }
        if visited[u] {
            continue;
        }
        visited[u] = true;
        expanded += 1;

        for edge in graph.edges_of(u) {
            if !visited[edge.to] && edge.penalty < threshold {
                queue.push_back(edge.to);
            }
        }
    }
    tracing::trace!(threshold, expanded, "queue exhausted");
    false
}
