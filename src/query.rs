//! The integer-in, integer-out entry points. Invalid input never produces an error here; it is
//! reported as [`UNREACHABLE`].

use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    builder::SearchBuilder,
    graph::{node_index, AdjacencyList},
};

/// Returned when there is no path, or when the source or destination is not a node of the graph.
pub const UNREACHABLE: i64 = -1;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Failed to parse query: {0}")]
    Json(#[from] serde_json::Error),
}

/// Length in edges of the shortest path between `source` and `destination` in the undirected graph
/// on `node_count` nodes with the given edges, or [`UNREACHABLE`].
///
/// `source == destination` is always a path of length 0, even if the node doesn't exist. Edges
/// that mention a node outside `0..node_count` are ignored.
#[must_use]
pub fn find_shortest_path(
    node_count: i64,
    edges: &[(i64, i64)],
    source: i64,
    destination: i64,
) -> i64 {
    solve(node_count, source, destination, |node_count| {
        AdjacencyList::from_edges(node_count, edges.iter().copied())
    })
}

fn solve<F>(node_count: i64, source: i64, destination: i64, build_graph: F) -> i64
where
    F: FnOnce(usize) -> AdjacencyList,
{
    if source == destination {
        return 0;
    }

    let node_count = usize::try_from(node_count).unwrap_or(0);
    let (Some(source), Some(destination)) = (
        node_index(source, node_count),
        node_index(destination, node_count),
    ) else {
        tracing::debug!("{source} or {destination} is not a node of a {node_count} node graph");
        return UNREACHABLE;
    };

    let graph = build_graph(node_count);

    SearchBuilder::new()
        .expander(&graph)
        .source(source)
        .destination(destination)
        .run()
        .map_or(UNREACHABLE, |outcome| outcome.to_sentinel())
}

/// A self-contained shortest-path question, as read from JSON:
///
/// ```json
/// { "node_count": 4, "edges": [[0, 1], [1, 2], [2, 3]], "source": 0, "destination": 3 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub node_count: i64,
    #[serde(default)]
    pub edges: Vec<Vec<i64>>,
    pub source: i64,
    pub destination: i64,
}

impl Query {
    pub fn from_json(json: &str) -> Result<Self, QueryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Same as [`find_shortest_path`], except edges that don't have exactly two endpoints are also
    /// ignored.
    #[must_use]
    pub fn solve(&self) -> i64 {
        solve(
            self.node_count,
            self.source,
            self.destination,
            |node_count| AdjacencyList::from_edge_lists(node_count, &self.edges),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle() {
        let edges = [(0, 1), (1, 2), (2, 0)];
        assert_eq!(find_shortest_path(3, &edges, 0, 2), 1);
    }

    #[test]
    fn same_node_is_zero_even_if_invalid() {
        assert_eq!(find_shortest_path(5, &[], 2, 2), 0);
        assert_eq!(find_shortest_path(0, &[], 9, 9), 0);
        assert_eq!(find_shortest_path(3, &[], -4, -4), 0);
    }

    #[test]
    fn negative_node_count_is_empty_graph() {
        assert_eq!(find_shortest_path(-3, &[(0, 1)], 0, 1), UNREACHABLE);
    }

    #[test]
    fn query_from_json() {
        let query = Query::from_json(
            r#"{"node_count": 4, "edges": [[0, 1], [1], [1, 2, 5], [1, 2], [2, 3]], "source": 0, "destination": 3}"#,
        )
        .unwrap();

        assert_eq!(query.edges.len(), 5);
        assert_eq!(query.solve(), 3);
    }

    #[test]
    fn query_without_edges() {
        let query = Query::from_json(r#"{"node_count": 2, "source": 0, "destination": 1}"#).unwrap();

        assert!(query.edges.is_empty());
        assert_eq!(query.solve(), UNREACHABLE);
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            Query::from_json(r#"{"node_count": "four"}"#),
            Err(QueryError::Json(_))
        ));
    }
}
