use crate::errors::RouteError;
use crate::graph::Adjacency;
use super::{shortest_path, GraphNodeMap};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt, fmt::Debug};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};




/// Result of a shortest route query
/// path runs from the start airport to the end airport inclusive
/// total_distance is the sum of the traversed route distances
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    pub path: Vec<String>,
    pub total_distance: f64,
}

impl fmt::Display for RouteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} km", self.path.join(" -> "), self.total_distance)
    }
}


/// Find the cheapest route between two airports over an adjacency snapshot
/// The snapshot is read only - repeated queries on the same snapshot are
/// independent and return the same total distance
/// Both endpoints must exist as keys in the snapshot, a typo'd code is an
/// UnknownNode error rather than a missing path
/// When several routes share the minimum total distance, which one is
/// returned is unspecified - only the total is a guarantee
pub fn shortest_route(adjacency: &Adjacency, start: &str, end: &str) -> Result<RouteResult, RouteError> {

    // Validate endpoints before any search
    for id in [start, end] {
        if !adjacency.contains_key(id) {
            return Err(RouteError::UnknownNode(id.to_string()));
        }
    }

    let (path, total_distance) = dijkstra(
        start.to_string(),
        |node: &String| adjacency.get(node).cloned().unwrap_or_default(),
        |node: &String| node == end,
    )?;

    Ok(RouteResult { path, total_distance })
}


/// Identify the cheapest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start Node, traverse through graph until a node meets the goal criteria
/// Returns the path along with its total cost
/// Costs must be non-negative - the algorithm is only correct under that assumption
pub fn dijkstra<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Result<(Vec<N>, C), RouteError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + PartialOrd + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    // Build the graph - terminates when the goal is met
    let (node_map, goal_index) = build_dijkstra_graph(start, neighbors, goal)?;

    if let Some(goal_index) = goal_index {
        // cheapest known cost to the goal node
        let cost = node_map
            .get_index(goal_index)
            .map(|(_, &(_, cost))| cost)
            .ok_or(RouteError::NoPathFound)?;

        // walk the parent indexes to recover the path
        let path = shortest_path(&node_map, goal_index)?;
        Ok((path, cost))
    } else {
        Err(RouteError::NoPathFound)
    }
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns a map of nodes with their smallest costs along with the index of the goal node
fn build_dijkstra_graph<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> Result<(GraphNodeMap<N, C>, Option<usize>), RouteError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + PartialOrd + Copy + Debug,
    G: Fn(&N) -> bool // Returns true if goal is met
    {

    // Nodes to visit - binary heap sorts Biggest to Smallest
    // Dijkstra's algorithm uses a priority queue to always expand the least costly node first
    // We store the cost from the starting node
    let mut nodes_to_visit: BinaryHeap<NodeId<C>> = BinaryHeap::new();

    // visited nodes - cost is known, no longer need to visit
    // usize is the index in the nodes_map
    // The tuple contains (parent_index, cost) where parent_index is the index of the parent node in the map
    // for the start node, parent_index is set to usize::MAX to indicate it has no parent
    let mut nodes_map: GraphNodeMap<N, C> = GraphNodeMap::default();

    // Add start node to the map and queue
    let start_index = nodes_map.insert_full(start, (usize::MAX, Zero::zero())).0;
    nodes_to_visit.push(NodeId{
        index: start_index,
        cost: Zero::zero(), // This is the cost from the start node
    });

    // Loop over each node to visit, removing the smallest node
    while let Some(NodeId {cost, index}) = nodes_to_visit.pop() {

        // fetch current best cost for node
        let Some((node, &(_, c))) = nodes_map.get_index(index) else {
            continue;
        };

        // If cost of new node from BinaryHeap is higher than the best cost, skip it
        // This implies we've already found a better path to this node
        if cost > c {
            continue;
        }

        // Check if we've reached the goal
        if goal_fn(node) {
            return Ok((nodes_map, Some(index)));
        }

        // loop over neighbors
        for (neighbor, edge_cost) in neighbors(node).into_iter() {

            // new cost to reach this node = edge cost + node cost
            let new_cost = edge_cost + c;

            // Check if we've found a better path to this neighbor
            let neighbor_index;

            match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    neighbor_index = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        // We've found a better path to this neighbor
                        neighbor_index = e.index();
                        e.insert((index, new_cost));
                    } else {
                        // The existing path is better, do nothing
                        continue;
                    }
                }
            }

            // Only add to the queue if we've found a better path
            nodes_to_visit.push(NodeId {
                index: neighbor_index,
                cost: new_cost,
            });
        }
    }

    Ok((nodes_map, None))
}


/// Node identifier
/// - for ordering we only need cost and a way to identify the node
/// - Nodes can contain additional data, but we only need to identify them
#[derive(Debug)]
struct NodeId<T> {
    index: usize,
    cost: T
}

// Ordering is reversed so BinaryHeap pops the cheapest entry first
// Costs only need PartialOrd so that f64 distances work directly
// The store rejects NaN distances, so Equal is a safe fallback
impl<T: PartialOrd> Ord for NodeId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.partial_cmp(&self.cost).unwrap_or(Ordering::Equal)
    }
}
impl<T: PartialOrd> PartialOrd for NodeId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl<T: PartialEq> Eq for NodeId<T> {}
