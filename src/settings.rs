use crate::expander::Expander;

#[derive(Debug)]
pub(crate) struct SearchSettings<E, C> {
    pub(crate) expander: E,
    pub(crate) callback: C,
    pub(crate) source: usize,
    pub(crate) destination: Option<usize>,
    pub(crate) max_depth: Option<usize>,
}

impl<E: Expander, C> SearchSettings<E, C> {
    pub(crate) fn node_count(&self) -> usize {
        self.expander.node_count()
    }

    pub(crate) fn is_valid_node(&self, node: usize) -> bool {
        node < self.node_count()
    }

    /// Whether nodes at `depth` should have their neighbors explored.
    pub(crate) fn may_expand(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max_depth| depth < max_depth)
    }
}
