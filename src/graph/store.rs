use crate::collections::{FxIndexMap, FxIndexSet};
use crate::errors::RouteError;

use std::fmt;


/// Adjacency view of the graph at a point in time
/// Every node appears as a key, isolated nodes map to an empty list
/// Each route contributes both directions since routes are undirected
/// The view is read only - build a fresh one after mutating the store
pub type Adjacency = FxIndexMap<String, Vec<(String, f64)>>;


/// Undirected weighted connection between two airports
/// Endpoints are distinct, distance is a finite non-negative number
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub source: String,
    pub destination: String,
    pub distance: f64,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {} | {} km", self.source, self.destination, self.distance)
    }
}


/// Authoritative set of airports and routes
/// Airports are unique normalized codes, routes are a multiset kept in insertion order
/// Parallel routes between the same pair are allowed and never merged
#[derive(Debug, Default, Clone)]
pub struct GraphStore {
    nodes: FxIndexSet<String>,
    routes: Vec<Route>,
}

impl GraphStore {

    pub fn new() -> Self {
        Self::default()
    }

    /// Add an airport by code
    /// Codes are normalized (trimmed + uppercased) before insertion
    /// Rejects empty and duplicate codes, the store is left unchanged
    pub fn add_node(&mut self, id: &str) -> Result<(), RouteError> {
        let id = normalize(id);
        if id.is_empty() {
            return Err(RouteError::EmptyId);
        }
        if self.nodes.contains(&id) {
            return Err(RouteError::DuplicateNode(id));
        }
        self.nodes.insert(id);
        Ok(())
    }

    /// Remove an airport and every route touching it
    /// No-op if the airport is not present
    pub fn remove_node(&mut self, id: &str) {
        let id = normalize(id);
        if self.nodes.shift_remove(&id) {
            // Cascade - a route must never reference a missing airport
            self.routes.retain(|r| r.source != id && r.destination != id);
        }
    }

    /// Add a route between two airports
    /// Unknown endpoints are implicitly added as airports - this is the one
    /// auto-repair rule, routes are allowed to introduce new nodes
    /// Rejects self-loops and distances that are negative or not finite
    pub fn add_route(&mut self, source: &str, destination: &str, distance: f64) -> Result<(), RouteError> {
        let source = normalize(source);
        let destination = normalize(destination);

        if source.is_empty() || destination.is_empty() {
            return Err(RouteError::EmptyId);
        }
        if source == destination {
            return Err(RouteError::SelfLoop(source));
        }
        if !distance.is_finite() || distance < 0.0 {
            return Err(RouteError::InvalidDistance(distance.to_string()));
        }

        // insert() is a no-op for already known airports
        self.nodes.insert(source.clone());
        self.nodes.insert(destination.clone());

        // Appended as-is, parallel routes between the same pair stay distinct
        self.routes.push(Route { source, destination, distance });
        Ok(())
    }

    /// Parse a distance entered as text
    /// The collaborator collects distances from a form field, so non-numeric
    /// input is a validation failure rather than a programming error
    pub fn parse_distance(text: &str) -> Result<f64, RouteError> {
        let distance: f64 = text
            .trim()
            .parse()
            .map_err(|_| RouteError::InvalidDistance(text.trim().to_string()))?;
        if !distance.is_finite() || distance < 0.0 {
            return Err(RouteError::InvalidDistance(text.trim().to_string()));
        }
        Ok(distance)
    }

    /// Remove the route at the given position in insertion order
    /// Returns the removed route
    pub fn remove_route(&mut self, index: usize) -> Result<Route, RouteError> {
        if index >= self.routes.len() {
            return Err(RouteError::RouteIndexOutOfRange(index));
        }
        Ok(self.routes.remove(index))
    }

    /// Airport codes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|s| s.as_str())
    }

    /// Routes in insertion order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains(&normalize(id))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Build the adjacency view used as input to the shortest path engine
    /// The engine only ever reads the view, the store stays the single owner
    /// of the graph state
    pub fn snapshot(&self) -> Adjacency {
        let mut adjacency = Adjacency::default();

        // Seed every airport so isolated ones are still valid query endpoints
        for node in &self.nodes {
            adjacency.insert(node.clone(), Vec::new());
        }

        // Insert both directions for each route
        for route in &self.routes {
            if let Some(neighbors) = adjacency.get_mut(&route.source) {
                neighbors.push((route.destination.clone(), route.distance));
            }
            if let Some(neighbors) = adjacency.get_mut(&route.destination) {
                neighbors.push((route.source.clone(), route.distance));
            }
        }

        adjacency
    }
}


/// Airport codes are compared case-insensitively and without surrounding whitespace
fn normalize(id: &str) -> String {
    id.trim().to_uppercase()
}
