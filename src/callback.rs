//! Defines the `SearchCallback` trait.

/// Defines callback functions that run during the search.
pub trait SearchCallback {
    /// Called when a new node is discovered. The source is reported at depth 0.
    fn new_node(&mut self, depth: usize, node: usize);

    /// Called when every node at `depth` has been discovered.
    fn end_of_depth(&mut self, depth: usize);
}

/// A callback that does nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoCallback;

impl SearchCallback for NoCallback {
    fn new_node(&mut self, _depth: usize, _node: usize) {}

    fn end_of_depth(&mut self, _depth: usize) {}
}

impl<C: SearchCallback + ?Sized> SearchCallback for &mut C {
    fn new_node(&mut self, depth: usize, node: usize) {
        (**self).new_node(depth, node);
    }

    fn end_of_depth(&mut self, depth: usize) {
        (**self).end_of_depth(depth);
    }
}
