use crate::errors::PlannerResult;
use crate::graph::Graph;
use super::{reconstruct_path, FrontierEntry, PredecessorMap, SearchResult};

use std::{collections::BinaryHeap, hash::Hash, fmt::Debug};
use num_traits::Float;
use log::debug;



/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start node, expand the cheapest frontier node until the goal is finalized
///
/// Edge weights must be non-negative. Start and goal are expected to be nodes
/// of the graph; a missing node surfaces as `PlannerError::UnknownNode`.
/// An unreachable goal is not an error: the result has an empty path and infinite cost.
pub fn dijkstra<N, C>(graph: &Graph<N, C>, start: &N, goal: &N) -> PlannerResult<SearchResult<N, C>>
where
    N: Eq + Hash + Clone + Debug,
    C: Float + Debug,
{
    let start_index = graph.require(start)?;
    let goal_index = graph.require(goal)?;

    // Tentative cost from start, indexed like the graph
    let mut costs: Vec<C> = vec![C::infinity(); graph.len()];
    costs[start_index] = C::zero();

    let mut came_from: PredecessorMap<N> = PredecessorMap::default();

    // Nodes to visit - the frontier always yields the least costly node first
    let mut frontier: BinaryHeap<FrontierEntry<C>> = BinaryHeap::new();
    frontier.push(FrontierEntry {
        priority: C::zero(),
        cost: C::zero(),
        index: start_index,
    });

    let mut explored = 0;

    while let Some(FrontierEntry { cost, index, .. }) = frontier.pop() {

        // A cheaper path to this node was already found, entry is stale
        if cost > costs[index] {
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
            let new_cost = cost + weight;

            // Only strictly better paths are recorded
            if new_cost < costs[neighbor_index] {
                costs[neighbor_index] = new_cost;
                came_from.insert(neighbor.clone(), node.clone());
                frontier.push(FrontierEntry {
                    priority: new_cost,
                    cost: new_cost,
                    index: neighbor_index,
                });
            }
        }
    }

    let path = reconstruct_path(&came_from, start, goal);
    let cost = costs[goal_index];
    debug!("dijkstra {start:?} -> {goal:?}: cost {cost:?}, explored {explored} nodes");

    Ok(SearchResult { path, cost, explored })
}
