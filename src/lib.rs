//! Shortest path planning over a road network whose edge weights combine
//! distance with a simulated traffic delay.
//!
//! Dijkstra and A* run on the same [`graph::Graph`] snapshot and report the
//! path, its cost and how many nodes they had to finalize, so the two can be
//! compared. See [`planner::plan_routes`] for the full request pipeline.

pub mod errors;
pub mod collections;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod network;
pub mod traffic;
pub mod planner;

pub use errors::{PlannerError, PlannerResult};
pub use graph::Graph;
pub use graph_algos::{a_star::{a_star, AStar}, dijkstra::dijkstra, reconstruct_path, PredecessorMap, SearchResult};
