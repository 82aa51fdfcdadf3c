use std::fmt;


#[derive(Debug, Clone, PartialEq)]
pub enum RouteError {
    NoPathFound, // Graph is disconnected between the endpoints - an expected outcome, not a fault
    UnknownNode(String), // Query referenced a node that is not in the graph
    EmptyId, // Node id is empty after normalization
    DuplicateNode(String), // Node id is already present
    SelfLoop(String), // Route endpoints are the same node
    InvalidDistance(String), // Distance is not a non-negative real number
    RouteIndexOutOfRange(usize), // No route at the requested position
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::NoPathFound => write!(f, "no path found"),
            RouteError::UnknownNode(id) => write!(f, "unknown airport: {id}"),
            RouteError::EmptyId => write!(f, "airport code must not be empty"),
            RouteError::DuplicateNode(id) => write!(f, "duplicate airport: {id}"),
            RouteError::SelfLoop(id) => write!(f, "route endpoints must differ: {id}"),
            RouteError::InvalidDistance(s) => write!(f, "distance must be a non-negative number: {s}"),
            RouteError::RouteIndexOutOfRange(i) => write!(f, "no route at position {i}"),
        }
    }
}

impl std::error::Error for RouteError {}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_human_readable() {
        // The collaborator shows these directly, so they must stand alone
        assert_eq!(RouteError::NoPathFound.to_string(), "no path found");
        assert_eq!(RouteError::UnknownNode("ZZZ".to_string()).to_string(), "unknown airport: ZZZ");
        assert_eq!(RouteError::RouteIndexOutOfRange(7).to_string(), "no route at position 7");
    }
}
