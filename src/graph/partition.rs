use crate::graph::debruijn::{DeBruijnGraph, NodeId};

/// Splits the nodes that still touch an edge into weakly connected
/// components.
///
/// Components are returned in order of their smallest node id, and nodes
/// inside a component in discovery order, so the result only depends on the
/// graph contents and the order reads were inserted.
///
/// # Arguments
/// * `graph` - The graph in its current, partially consumed state
///
/// # Returns
/// * One vector of node ids per component; nodes without any remaining
///   edge are left out
pub fn connected_components(graph: &DeBruijnGraph) -> Vec<Vec<NodeId>> {
    let n = graph.num_nodes();
    let mut neighbours: Vec<Vec<NodeId>> = vec![Vec::new(); n];
    for from in graph.node_ids() {
        for &to in graph.successors(from) {
            neighbours[from].push(to);
            neighbours[to].push(from);
        }
    }

    let mut components = Vec::new();
    let mut visited = vec![false; n];

    // DFS from every unvisited node that still has an edge
    for node in graph.node_ids() {
        if visited[node] || neighbours[node].is_empty() {
            continue;
        }
        let mut component = vec![];
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if visited[current] {
                continue;
            }
            visited[current] = true;
            component.push(current);
            stack.extend(neighbours[current].iter().copied().filter(|&m| !visited[m]));
        }
        components.push(component);
    }

    components
}
