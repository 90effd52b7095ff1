use crate::errors::PlannerResult;
use crate::graph::Graph;
use super::{reconstruct_path, FrontierEntry, PredecessorMap, SearchResult};

use std::{
    collections::BinaryHeap,
    hash::Hash,
    fmt::Debug,
};
use num_traits::Float;
use log::debug;



/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// Holds the heuristic: `(node, goal) -> estimated remaining cost`
/// The heuristic must be:
/// 1. admissible - never overestimates the true remaining cost
/// 2. consistent - h(u) <= w(u, v) + h(v) for every edge
///
/// The search stops as soon as the goal is finalized, which is only optimal
/// for consistent heuristics. An admissible but inconsistent heuristic can
/// return a suboptimal path.
pub struct AStar<H> {
    heuristic: H,
}

impl<H> AStar<H> {

    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }

    /// From start node, expand the frontier node with the smallest
    /// f = g + h(node, goal) until the goal is finalized
    pub fn plan<N, C>(&self, graph: &Graph<N, C>, start: &N, goal: &N) -> PlannerResult<SearchResult<N, C>>
    where
        N: Eq + Hash + Clone + Debug,
        C: Float + Debug,
        H: Fn(&N, &N) -> C,
    {
        let start_index = graph.require(start)?;
        let goal_index = graph.require(goal)?;

        // g-score: confirmed cost from start, indexed like the graph
        let mut g_score: Vec<C> = vec![C::infinity(); graph.len()];
        g_score[start_index] = C::zero();

        let mut came_from: PredecessorMap<N> = PredecessorMap::default();

        // Open list, sorted by f-score (g + heuristic)
        let mut open_list: BinaryHeap<FrontierEntry<C>> = BinaryHeap::new();
        open_list.push(FrontierEntry {
            priority: (self.heuristic)(start, goal),
            cost: C::zero(),
            index: start_index,
        });

        let mut explored = 0;

        while let Some(FrontierEntry { cost, index, .. }) = open_list.pop() {

            // If cost of the popped entry is higher than the best cost, skip it
            // This implies we've already found a better path to this node
            if cost > g_score[index] {
                continue;
            }

            explored += 1;

            if index == goal_index {
                break;
            }

            let Some((node, neighbors)) = graph.get_index(index) else {
                continue;
            };

            for (neighbor, &weight) in neighbors {
                let neighbor_index = graph.require(neighbor)?;
                let tentative_g = cost + weight;

                if tentative_g < g_score[neighbor_index] {
                    g_score[neighbor_index] = tentative_g;
                    came_from.insert(neighbor.clone(), node.clone());
                    open_list.push(FrontierEntry {
                        priority: tentative_g + (self.heuristic)(neighbor, goal),
                        cost: tentative_g,
                        index: neighbor_index,
                    });
                }
            }
        }

        let path = reconstruct_path(&came_from, start, goal);
        let cost = g_score[goal_index];
        debug!("a* {start:?} -> {goal:?}: cost {cost:?}, explored {explored} nodes");

        Ok(SearchResult { path, cost, explored })
    }
}


/// Run A* with the given heuristic, see [`AStar`]
pub fn a_star<N, C, H>(graph: &Graph<N, C>, start: &N, goal: &N, heuristic: H) -> PlannerResult<SearchResult<N, C>>
where
    N: Eq + Hash + Clone + Debug,
    C: Float + Debug,
    H: Fn(&N, &N) -> C,
{
    AStar::new(heuristic).plan(graph, start, goal)
}



#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PlannerError;
    use crate::geometry::{euclidean, manhattan_distance};
    use crate::graph_algos::dijkstra::dijkstra;
    use crate::graph_algos::test_graphs::{brute_force_cost, chain_with_shortcut, random_graph};

    fn zero<N>(_node: &N, _goal: &N) -> f64 {
        0.0
    }

    /// Grid of `size` x `size` nodes, unit weights to the 4 neighbors
    fn grid(size: i32) -> Graph<(i32, i32), f64> {
        let mut graph = Graph::new();
        for x in 0..size {
            for y in 0..size {
                graph.add_node((x, y));
                if x > 0 {
                    graph.add_road((x - 1, y), (x, y), 1.0);
                }
                if y > 0 {
                    graph.add_road((x, y - 1), (x, y), 1.0);
                }
            }
        }
        graph
    }

    fn straight_line(node: &(i32, i32), goal: &(i32, i32)) -> f64 {
        euclidean(node.0 as f64, node.1 as f64, goal.0 as f64, goal.1 as f64)
    }

    #[test]
    fn test_a_star_zero_heuristic_chain() {
        let graph = chain_with_shortcut();
        let result = a_star(&graph, &"A", &"D", zero).unwrap();

        assert_eq!(result.path, vec!["A", "B", "C", "D"]);
        assert_eq!(result.cost, 9.0);
    }

    #[test]
    fn test_a_star_zero_heuristic_is_dijkstra() {
        let graph = chain_with_shortcut();
        for start in ["A", "B", "C", "D"] {
            for goal in ["A", "B", "C", "D"] {
                let expected = dijkstra(&graph, &start, &goal).unwrap();
                let result = a_star(&graph, &start, &goal, zero).unwrap();
                assert_eq!(result, expected);
            }
        }

        for seed in 0..10 {
            let graph = random_graph(seed, 8, 0.35);
            for goal in 0..8 {
                let expected = dijkstra(&graph, &0, &goal).unwrap();
                let result = a_star(&graph, &0, &goal, zero).unwrap();
                assert_eq!(result, expected, "seed {seed}, goal {goal}");
            }
        }
    }

    #[test]
    fn test_a_star_start_is_goal() {
        let graph = chain_with_shortcut();
        let result = a_star(&graph, &"C", &"C", zero).unwrap();

        assert_eq!(result.path, vec!["C"]);
        assert_eq!(result.cost, 0.0);
        assert_eq!(result.explored, 1);
    }

    #[test]
    fn test_a_star_handles_unreachable_goal() {
        let mut graph = chain_with_shortcut();
        graph.add_node("E");

        let result = a_star(&graph, &"A", &"E", zero).unwrap();

        assert!(result.path.is_empty());
        assert!(result.cost.is_infinite());
    }

    #[test]
    fn test_a_star_unknown_node() {
        let graph = chain_with_shortcut();
        let result = a_star(&graph, &"A", &"X", zero);
        assert!(matches!(result, Err(PlannerError::UnknownNode(_))));
    }

    fn city_blocks(node: &(i32, i32), goal: &(i32, i32)) -> f64 {
        manhattan_distance(node.0, node.1, goal.0, goal.1) as f64
    }

    #[test]
    fn test_a_star_with_heuristic_explores_less() {
        let graph = grid(6);
        let start = (0, 0);
        let goal = (5, 5);

        let baseline = dijkstra(&graph, &start, &goal).unwrap();
        let result = a_star(&graph, &start, &goal, city_blocks).unwrap();

        assert_eq!(result.cost, 10.0);
        assert_eq!(result.cost, baseline.cost);
        assert_eq!(result.path.len(), 11);

        // Dijkstra settles the whole grid, the exact heuristic walks straight to the goal
        assert_eq!(baseline.explored, 36);
        assert_eq!(result.explored, 11);
    }

    #[test]
    fn test_a_star_explored_never_exceeds_dijkstra_on_grid() {
        let graph = grid(5);
        for goal in graph.nodes().copied().collect::<Vec<_>>() {
            let baseline = dijkstra(&graph, &(0, 0), &goal).unwrap();
            let result = a_star(&graph, &(0, 0), &goal, straight_line).unwrap();

            assert_eq!(result.cost, baseline.cost, "goal {goal:?}");
            assert!(result.explored <= baseline.explored, "goal {goal:?}");
        }
    }

    #[test]
    fn test_a_star_matches_brute_force_with_admissible_heuristic() {
        // h = min edge weight when not at goal, consistent for weights >= 1
        let heuristic = |node: &usize, goal: &usize| if node == goal { 0.0 } else { 1.0 };

        for seed in 0..25 {
            let graph = random_graph(seed, 7, 0.4);
            for goal in 1..7 {
                let result = a_star(&graph, &0, &goal, heuristic).unwrap();
                assert_eq!(result.cost, brute_force_cost(&graph, 0, goal), "seed {seed}, goal {goal}");
            }
        }
    }
}
