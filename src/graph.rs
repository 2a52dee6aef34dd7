//! Defines `AdjacencyList`, an undirected graph built from an edge list.

use cityhasher::{CityHasher, HashMap, HashSet};
use itertools::Itertools;

use crate::expander::Expander;

/// Converts a raw node id to an index, or `None` if it is outside `0..node_count`.
pub(crate) fn node_index(id: i64, node_count: usize) -> Option<usize> {
    usize::try_from(id).ok().filter(|&idx| idx < node_count)
}

/// An undirected, unweighted graph on the nodes `0..node_count`.
///
/// Every stored edge `{u, v}` appears in the neighbor lists of both endpoints. Edges with an
/// endpoint outside the graph, self-loops, and repeated edges are not stored. Only nodes with at
/// least one edge take up memory, so `node_count` may be far larger than the edge list.
#[derive(Debug)]
pub struct AdjacencyList {
    node_count: usize,
    neighbors: HashMap<usize, Vec<usize>, CityHasher>,
    edges: HashSet<(usize, usize), CityHasher>,
}

impl AdjacencyList {
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            neighbors: HashMap::with_hasher(CityHasher::default()),
            edges: HashSet::with_hasher(CityHasher::default()),
        }
    }

    /// Builds the graph from `(u, v)` pairs, skipping any pair that does not describe a valid edge.
    #[must_use]
    pub fn from_edges<I>(node_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let mut graph = Self::new(node_count);

        let mut skipped = 0;
        for (u, v) in edges {
            if !graph.add_edge(u, v) {
                skipped += 1;
            }
        }

        if skipped > 0 {
            tracing::debug!("skipped {skipped} edges");
        }

        graph
    }

    /// Builds the graph from edges given as integer sequences. Entries that don't hold exactly two
    /// ids are skipped along with the usual invalid edges.
    #[must_use]
    pub fn from_edge_lists<T: AsRef<[i64]>>(node_count: usize, edges: &[T]) -> Self {
        let pairs = edges
            .iter()
            .filter_map(|edge| edge.as_ref().iter().copied().collect_tuple::<(i64, i64)>())
            .collect::<Vec<_>>();

        let malformed = edges.len() - pairs.len();
        if malformed > 0 {
            tracing::debug!("skipped {malformed} edges with the wrong number of endpoints");
        }

        Self::from_edges(node_count, pairs)
    }

    /// Adds the edge `{u, v}`. Returns `true` if the edge was stored, or `false` if it was skipped
    /// because an endpoint is invalid, it is a self-loop, or it is already present.
    pub fn add_edge(&mut self, u: i64, v: i64) -> bool {
        let node_count = self.node_count();
        let (Some(u), Some(v)) = (node_index(u, node_count), node_index(v, node_count)) else {
            return false;
        };

        if u == v || !self.edges.insert((u.min(v), u.max(v))) {
            return false;
        }

        self.neighbors.entry(u).or_default().push(v);
        self.neighbors.entry(v).or_default().push(u);

        true
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Neighbors of `node` in insertion order. Empty if `node` is not in the graph.
    #[must_use]
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.neighbors.get(&node).map_or(&[][..], Vec::as_slice)
    }
}

impl Expander for AdjacencyList {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn expand(&self, node: usize, neighbors: &mut Vec<usize>) {
        neighbors.extend_from_slice(self.neighbors(node));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_symmetric() {
        let graph = AdjacencyList::from_edges(3, [(0, 1), (1, 2)]);

        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(graph.neighbors(1), &[0, 2]);
        assert_eq!(graph.neighbors(2), &[1]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn out_of_range_edges_are_skipped() {
        let graph = AdjacencyList::from_edges(3, [(0, 3), (-1, 1), (2, i64::MAX), (0, 2)]);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(0), &[2]);
        assert!(graph.neighbors(1).is_empty());
    }

    #[test]
    fn duplicates_and_self_loops_are_skipped() {
        let mut graph = AdjacencyList::new(2);

        assert!(graph.add_edge(0, 1));
        assert!(!graph.add_edge(1, 0));
        assert!(!graph.add_edge(0, 1));
        assert!(!graph.add_edge(1, 1));

        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(graph.neighbors(1), &[0]);
    }

    #[test]
    fn wrong_arity_is_skipped() {
        let edges: Vec<Vec<i64>> = vec![vec![0, 1], vec![1], vec![1, 2, 3], vec![], vec![2, 3]];
        let graph = AdjacencyList::from_edge_lists(4, &edges);

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors(1), &[0]);
        assert_eq!(graph.neighbors(2), &[3]);
    }

    #[test]
    fn invalid_node_has_no_neighbors() {
        let graph = AdjacencyList::from_edges(2, [(0, 1)]);
        assert!(graph.neighbors(5).is_empty());

        let mut buf = vec![];
        graph.expand(5, &mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn huge_node_count_with_few_edges() {
        let graph = AdjacencyList::from_edges(usize::MAX, [(0, 1), (i64::MAX, 1)]);

        assert_eq!(graph.node_count(), usize::MAX);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors(1), &[0, usize::try_from(i64::MAX).unwrap()]);
        assert!(graph.neighbors(2).is_empty());
    }

    #[test]
    fn node_index_bounds() {
        assert_eq!(node_index(0, 1), Some(0));
        assert_eq!(node_index(1, 1), None);
        assert_eq!(node_index(-1, 1), None);
        assert_eq!(node_index(0, 0), None);
    }
}
