//! Defines the `Expander` trait.

/// Defines the graph that the search will traverse.
pub trait Expander {
    /// Number of nodes in the graph. Valid node ids are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Given a node `node` of the graph, appends the adjacent nodes in the graph to `neighbors`.
    fn expand(&self, node: usize, neighbors: &mut Vec<usize>);
}

impl<E: Expander + ?Sized> Expander for &E {
    fn node_count(&self) -> usize {
        (**self).node_count()
    }

    fn expand(&self, node: usize, neighbors: &mut Vec<usize>) {
        (**self).expand(node, neighbors);
    }
}
