pub mod dijkstra;
pub mod a_star;
mod shortest_path;

pub use shortest_path::reconstruct_path;

use crate::collections::FxIndexMap;

use std::cmp::Ordering;
use num_traits::Float;
use serde::Serialize;


/// Type alias for the predecessor map produced by a search
/// Maps a node to the node immediately before it on the best known path
pub type PredecessorMap<N> = FxIndexMap<N, N>;


/// Outcome of a single shortest path query
/// path: start..=goal, empty if the goal is unreachable
/// cost: total cost of the path, `C::infinity()` if unreachable
/// explored: number of nodes popped from the frontier and finalized
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchResult<N, C> {
    pub path: Vec<N>,
    pub cost: C,
    pub explored: usize,
}

impl<N, C> SearchResult<N, C> {

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}


/// Entry on the search frontier
/// - priority orders the heap (cost for Dijkstra, cost + heuristic for A*)
/// - cost is the g-score at push time, used to detect stale entries
/// - index identifies the node in the graph
#[derive(Debug)]
pub(crate) struct FrontierEntry<C> {
    pub priority: C,
    pub cost: C,
    pub index: usize,
}

// BinaryHeap pops the largest entry, so priority and index are reversed.
// On equal priority the entry deeper into the search (larger cost) wins,
// then the smaller index.
impl<C: Float> Ord for FrontierEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.partial_cmp(&self.priority).unwrap_or(Ordering::Equal)
            .then_with(|| self.cost.partial_cmp(&other.cost).unwrap_or(Ordering::Equal))
            .then_with(|| other.index.cmp(&self.index))
    }
}
impl<C: Float> PartialOrd for FrontierEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: Float> PartialEq for FrontierEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<C: Float> Eq for FrontierEntry<C> {}


#[cfg(test)]
pub(crate) mod test_graphs {
    use crate::graph::Graph;

    use rand::{Rng, SeedableRng, rngs::StdRng};

    /// A - B - C - D chain with a long A - D shortcut
    pub fn chain_with_shortcut() -> Graph<&'static str, f64> {
        let mut graph = Graph::new();
        graph.add_road("A", "B", 4.0);
        graph.add_road("B", "C", 3.0);
        graph.add_road("C", "D", 2.0);
        graph.add_road("A", "D", 10.0);
        graph
    }

    /// Random undirected graph with integer weights (exact in f64)
    pub fn random_graph(seed: u64, nodes: usize, edge_probability: f64) -> Graph<usize, f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut graph = Graph::new();
        for node in 0..nodes {
            graph.add_node(node);
        }
        for a in 0..nodes {
            for b in (a + 1)..nodes {
                if rng.random_bool(edge_probability) {
                    graph.add_road(a, b, f64::from(rng.random_range(1u32..=20)));
                }
            }
        }
        graph
    }

    /// Cheapest simple path cost by exhaustive enumeration, infinity if unreachable
    pub fn brute_force_cost(graph: &Graph<usize, f64>, start: usize, goal: usize) -> f64 {
        fn walk(graph: &Graph<usize, f64>, node: usize, goal: usize, cost: f64, visited: &mut Vec<usize>, best: &mut f64) {
            if node == goal {
                *best = best.min(cost);
                return;
            }
            for (&next, &weight) in graph.neighbors(&node).unwrap() {
                if !visited.contains(&next) {
                    visited.push(next);
                    walk(graph, next, goal, cost + weight, visited, best);
                    visited.pop();
                }
            }
        }

        let mut best = f64::INFINITY;
        walk(graph, start, goal, 0.0, &mut vec![start], &mut best);
        best
    }

    /// Sum of edge weights along a path, panics if a hop is not an edge
    pub fn path_cost<N>(graph: &Graph<N, f64>, path: &[N]) -> f64
    where
        N: Eq + std::hash::Hash + Clone + std::fmt::Debug,
    {
        path.windows(2)
            .map(|hop| graph.weight(&hop[0], &hop[1]).expect("consecutive path nodes must be connected"))
            .sum()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn test_frontier_pops_smallest_priority_first() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry { priority: 5.0, cost: 5.0, index: 0 });
        heap.push(FrontierEntry { priority: 1.0, cost: 1.0, index: 1 });
        heap.push(FrontierEntry { priority: 3.0, cost: 3.0, index: 2 });

        let order: Vec<usize> = std::iter::from_fn(|| heap.pop()).map(|e| e.index).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_frontier_tie_breaks_on_cost_then_index() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry { priority: 4.0, cost: 1.0, index: 2 });
        heap.push(FrontierEntry { priority: 4.0, cost: 3.0, index: 0 });
        heap.push(FrontierEntry { priority: 4.0, cost: 1.0, index: 1 });

        let order: Vec<usize> = std::iter::from_fn(|| heap.pop()).map(|e| e.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }
}
