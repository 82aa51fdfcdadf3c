mod store;

pub use store::{Adjacency, GraphStore, Route};
