mod collections;
pub mod errors;
pub mod graph;
pub mod graph_algos;

pub use errors::RouteError;
pub use graph::{Adjacency, GraphStore, Route};
pub use graph_algos::dijkstra::{shortest_route, RouteResult};
