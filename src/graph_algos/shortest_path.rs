use crate::errors::RouteError;
use super::GraphNodeMap;

/// Construct the path from the start node to the goal node
/// Walks parent indexes backwards from the goal, then reverses
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
pub(crate) fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Result<Vec<N>, RouteError>
where
    N: Clone,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    // The start node carries usize::MAX as its parent index
    while current_index != usize::MAX {
        if let Some((node, &(parent_index, _))) = node_map.get_index(current_index) {
            path.push(node.clone());
            current_index = parent_index;
        } else {
            return Err(RouteError::NoPathFound);
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    if path.is_empty() {
        return Err(RouteError::NoPathFound);
    }

    Ok(path)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_reconstruction() {
        // Build a node map by hand: A is the root, D hangs off C
        let mut node_map: GraphNodeMap<String, f64> = GraphNodeMap::default();

        let a_index = node_map.insert_full("A".to_string(), (usize::MAX, 0.0)).0;
        let b_index = node_map.insert_full("B".to_string(), (a_index, 1.0)).0;
        let c_index = node_map.insert_full("C".to_string(), (a_index, 3.0)).0;
        let d_index = node_map.insert_full("D".to_string(), (c_index, 4.0)).0;

        let path_to_d = shortest_path(&node_map, d_index).unwrap();
        assert_eq!(path_to_d, vec!["A", "C", "D"]);

        let path_to_b = shortest_path(&node_map, b_index).unwrap();
        assert_eq!(path_to_b, vec!["A", "B"]);
    }

    #[test]
    fn test_bad_index_is_no_path() {
        let node_map: GraphNodeMap<String, f64> = GraphNodeMap::default();
        assert_eq!(shortest_path(&node_map, 3), Err(RouteError::NoPathFound));
    }
}
