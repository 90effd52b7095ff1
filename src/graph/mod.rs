use crate::collections::FxIndexMap;
use crate::errors::{PlannerError, PlannerResult};

use std::{hash::Hash, fmt::Debug};
use indexmap::map::Entry::{Occupied, Vacant};


/// Outgoing edges of a single node: neighbor -> edge weight
pub type Adjacency<N, C> = FxIndexMap<N, C>;

/// Weighted adjacency graph
/// N: node identifier, C: edge weight
///
/// Every node is addressable both by identifier and by its insertion index,
/// the searches work on indices so their cost tables can be plain vectors.
/// Neighbor keys are expected to also be top level nodes; a graph built with
/// `add_edge`/`add_road` keeps that property, `from_adjacency` takes the map as is.
#[derive(Clone, Debug)]
pub struct Graph<N, C> {
    adjacency: FxIndexMap<N, Adjacency<N, C>>,
}

impl<N, C> Default for Graph<N, C> {
    fn default() -> Self {
        Self { adjacency: FxIndexMap::default() }
    }
}

impl<N, C> Graph<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Copy,
{

    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing adjacency map without checking that it is closed under its edges
    pub fn from_adjacency(adjacency: FxIndexMap<N, Adjacency<N, C>>) -> Self {
        Self { adjacency }
    }

    /// Insert a node without edges, returns its index
    pub fn add_node(&mut self, node: N) -> usize {
        match self.adjacency.entry(node) {
            Occupied(e) => e.index(),
            Vacant(e) => {
                let index = e.index();
                e.insert(Adjacency::default());
                index
            }
        }
    }

    /// Directed edge from -> to, an existing edge is overwritten
    pub fn add_edge(&mut self, from: N, to: N, weight: C) {
        let from_index = self.add_node(from);
        self.add_node(to.clone());
        if let Some((_, edges)) = self.adjacency.get_index_mut(from_index) {
            edges.insert(to, weight);
        }
    }

    /// Undirected road, stored as two directed edges with the same weight
    pub fn add_road(&mut self, a: N, b: N, weight: C) {
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight);
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    pub fn neighbors(&self, node: &N) -> Option<&Adjacency<N, C>> {
        self.adjacency.get(node)
    }

    pub fn weight(&self, from: &N, to: &N) -> Option<C> {
        self.adjacency.get(from)?.get(to).copied()
    }

    pub fn index_of(&self, node: &N) -> Option<usize> {
        self.adjacency.get_index_of(node)
    }

    /// Node identifier and its outgoing edges at a given index
    pub fn get_index(&self, index: usize) -> Option<(&N, &Adjacency<N, C>)> {
        self.adjacency.get_index(index)
    }

    /// Index of a node, a missing node is a lookup failure
    pub(crate) fn require(&self, node: &N) -> PlannerResult<usize> {
        self.index_of(node)
            .ok_or_else(|| PlannerError::UnknownNode(format!("{node:?}")))
    }
}
