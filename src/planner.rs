use crate::errors::PlannerResult;
use crate::graph_algos::{a_star::a_star, dijkstra::dijkstra, SearchResult};
use crate::network::RoadNetwork;
use crate::traffic::{simulate_traffic, DEFAULT_VARIATION};

use std::fmt;
use rand::Rng;
use serde::Serialize;
use log::info;


/// Parameters of a single planning request
#[derive(Clone, Debug, PartialEq)]
pub struct PlannerConfig {
    pub start: String,
    pub goal: String,
    pub simulate_traffic: bool,
    pub variation: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            start: "Delhi".to_string(),
            goal: "Varanasi".to_string(),
            simulate_traffic: false,
            variation: DEFAULT_VARIATION,
        }
    }
}


/// Dijkstra and A* answers to the same query on the same graph snapshot
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteComparison {
    pub start: String,
    pub goal: String,
    pub dijkstra: SearchResult<String, f64>,
    pub astar: SearchResult<String, f64>,
    pub cities: Vec<String>,
}

impl RouteComparison {

    /// How many fewer nodes A* finalized than Dijkstra
    pub fn node_savings(&self) -> i64 {
        self.dijkstra.explored as i64 - self.astar.explored as i64
    }
}

fn write_result(f: &mut fmt::Formatter<'_>, title: &str, result: &SearchResult<String, f64>) -> fmt::Result {
    writeln!(f, "\n[{title}]")?;
    if result.is_reachable() {
        writeln!(f, "Path: {}", result.path.join(" -> "))?;
    } else {
        writeln!(f, "Path: No route found")?;
    }
    writeln!(f, "Total Cost (Distance + Traffic): {:.2}", result.cost)?;
    writeln!(f, "Visited Nodes: {}", result.explored)
}

impl fmt::Display for RouteComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Smart Route Planner ===")?;
        writeln!(f, "From: {} -> To: {}", self.start, self.goal)?;
        write_result(f, "Dijkstra", &self.dijkstra)?;
        write_result(f, "A*", &self.astar)?;
        writeln!(f, "\n[Comparison]")?;
        write!(
            f,
            "Dijkstra visited {} nodes, A* visited {} nodes.",
            self.dijkstra.explored, self.astar.explored
        )
    }
}


/// Run both searches for one planning request
///
/// Traffic is resampled on the network's roads first (if enabled), then the
/// endpoints are validated, then one graph snapshot is built and shared by
/// Dijkstra and by A* with the great-circle heuristic.
pub fn plan_routes<R>(network: &mut RoadNetwork, config: &PlannerConfig, rng: &mut R) -> PlannerResult<RouteComparison>
where
    R: Rng + ?Sized,
{
    if config.simulate_traffic {
        simulate_traffic(&mut network.roads, config.variation, rng)?;
    }

    network.validate(&config.start, &config.goal)?;

    let graph = network.build_graph();
    let heuristic = network.haversine_heuristic();

    let dijkstra_result = dijkstra(&graph, &config.start, &config.goal)?;
    let astar_result = a_star(&graph, &config.start, &config.goal, heuristic)?;

    info!(
        "{} -> {}: dijkstra explored {}, a* explored {}",
        config.start, config.goal, dijkstra_result.explored, astar_result.explored
    );

    Ok(RouteComparison {
        start: config.start.clone(),
        goal: config.goal.clone(),
        dijkstra: dijkstra_result,
        astar: astar_result,
        cities: network.city_names(),
    })
}
