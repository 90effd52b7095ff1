use crate::collections::FxIndexMap;
use crate::errors::{PlannerError, PlannerResult};
use crate::geometry::{haversine_km, Coordinate};
use crate::graph::Graph;

use std::{fs, path::Path};
use serde::{Deserialize, Serialize};
use log::{info, warn};


/// City record of the road network document
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
}

/// Road between two cities, traversable both ways
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Road {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub traffic_delay: f64,
    /// Delay before any traffic simulation, set on first simulation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_traffic_delay: Option<f64>,
}

impl Road {

    /// Edge weight fed to the graph
    pub fn weight(&self) -> f64 {
        self.distance + self.traffic_delay
    }
}


/// Build the symmetric adjacency graph from a list of roads
/// A road listed twice keeps the weight of its last occurrence
pub fn build_adjacency(roads: &[Road]) -> Graph<String, f64> {
    let mut graph = Graph::new();
    for road in roads {
        graph.add_road(road.from.clone(), road.to.clone(), road.weight());
    }
    graph
}


/// Cities and roads as loaded from the JSON document
/// `{ "cities": [{id, lat, lon}], "roads": [{from, to, distance, traffic_delay}] }`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadNetwork {
    pub cities: Vec<City>,
    pub roads: Vec<Road>,
}

impl RoadNetwork {

    pub fn load<P: AsRef<Path>>(path: P) -> PlannerResult<Self> {
        let path = path.as_ref();
        let network = Self::from_json(&fs::read_to_string(path)?)?;
        info!(
            "loaded {} cities and {} roads from {}",
            network.cities.len(),
            network.roads.len(),
            path.display()
        );
        Ok(network)
    }

    pub fn from_json(document: &str) -> PlannerResult<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// City id -> coordinate, in document order
    pub fn city_lookup(&self) -> FxIndexMap<String, Coordinate> {
        self.cities.iter()
            .map(|city| (city.id.clone(), Coordinate::new(city.lat, city.lon)))
            .collect()
    }

    /// City ids sorted alphabetically
    pub fn city_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.cities.iter().map(|city| city.id.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    /// Check that start and goal are known cities before searching
    pub fn validate(&self, start: &str, goal: &str) -> PlannerResult<()> {
        for node in [start, goal] {
            if !self.cities.iter().any(|city| city.id == node) {
                warn!("rejecting unknown city {node}");
                return Err(PlannerError::InvalidNode {
                    node: node.to_string(),
                    valid: self.city_names(),
                });
            }
        }
        Ok(())
    }

    /// Snapshot of the current roads as a graph
    /// Cities without roads are kept as isolated nodes, so they are unreachable
    /// rather than unknown to the searches
    pub fn build_graph(&self) -> Graph<String, f64> {
        let mut graph = Graph::new();
        for city in &self.cities {
            graph.add_node(city.id.clone());
        }
        for road in &self.roads {
            graph.add_road(road.from.clone(), road.to.clone(), road.weight());
        }
        graph
    }

    /// Great-circle distance between a node and the goal
    /// Admissible as long as every road is at least as long as the straight line
    /// between its cities. Nodes without coordinates estimate 0.
    pub fn haversine_heuristic(&self) -> impl Fn(&String, &String) -> f64 {
        let lookup = self.city_lookup();
        move |node: &String, goal: &String| {
            match (lookup.get(node), lookup.get(goal)) {
                (Some(a), Some(b)) => haversine_km(a, b),
                _ => 0.0,
            }
        }
    }
}
