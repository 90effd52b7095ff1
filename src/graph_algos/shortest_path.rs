use super::PredecessorMap;

use std::hash::Hash;


/// Construct the path from start to goal out of a predecessor map
/// Walks backwards from the goal following predecessor links, then reverses
/// Returns an empty path when the goal was never reached,
/// and `[start]` when start and goal are the same node
pub fn reconstruct_path<N>(came_from: &PredecessorMap<N>, start: &N, goal: &N) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    if goal != start && !came_from.contains_key(goal) {
        return Vec::new();
    }

    let mut path = vec![goal.clone()];
    let mut current = goal;

    // Trace back from goal to start
    while current != start {
        match came_from.get(current) {
            Some(previous) => {
                path.push(previous.clone());
                current = previous;
            }
            // chain does not lead back to start
            None => return Vec::new(),
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}
