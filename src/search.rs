use std::collections::VecDeque;

use cityhasher::{CityHasher, HashMap};
use itertools::Itertools;
use serde_derive::{Deserialize, Serialize};

use crate::{
    callback::SearchCallback, expander::Expander, query::UNREACHABLE, settings::SearchSettings,
};

/// The result of a search for a single destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// The destination was reached. `path` runs from the source to the destination inclusive, so
    /// it holds `distance + 1` nodes.
    Found { distance: usize, path: Vec<usize> },
    /// Every node reachable from the source was visited without reaching the destination.
    Unreachable,
    /// The destination is not within `depth` edges of the source, and nodes at `depth` were left
    /// unexpanded.
    DepthLimitReached { depth: usize },
}

impl SearchOutcome {
    #[must_use]
    pub fn distance(&self) -> Option<usize> {
        match self {
            Self::Found { distance, .. } => Some(*distance),
            Self::Unreachable | Self::DepthLimitReached { .. } => None,
        }
    }

    /// The distance as an integer, or `-1` if the destination was not reached.
    #[must_use]
    pub fn to_sentinel(&self) -> i64 {
        self.distance()
            .map_or(UNREACHABLE, |distance| i64::try_from(distance).unwrap_or(i64::MAX))
    }
}

/// Distances from the source to every node discovered by a search. Only discovered nodes are
/// stored.
#[derive(Debug, PartialEq, Eq)]
pub struct DistanceTable {
    source: usize,
    node_count: usize,
    distances: HashMap<usize, usize, CityHasher>,
    parents: HashMap<usize, usize, CityHasher>,
}

impl DistanceTable {
    fn new(node_count: usize, source: usize) -> Self {
        let mut distances = HashMap::with_hasher(CityHasher::default());
        distances.insert(source, 0);

        Self {
            source,
            node_count,
            distances,
            parents: HashMap::with_hasher(CityHasher::default()),
        }
    }

    fn record(&mut self, node: usize, depth: usize, parent: usize) {
        self.distances.insert(node, depth);
        self.parents.insert(node, parent);
    }

    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Shortest distance from the source to `node`, or `None` if `node` was not discovered.
    #[must_use]
    pub fn distance(&self, node: usize) -> Option<usize> {
        self.distances.get(&node).copied()
    }

    /// A shortest path from the source to `node`, both ends included.
    #[must_use]
    pub fn path_to(&self, node: usize) -> Option<Vec<usize>> {
        self.distance(node)?;

        let mut path = vec![node];
        let mut current = node;
        while let Some(&parent) = self.parents.get(&current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();

        Some(path)
    }

    /// Number of discovered nodes, including the source.
    #[must_use]
    pub fn reached(&self) -> usize {
        self.distances.len()
    }

    /// The greatest distance recorded in the table.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.distances.values().max().copied().unwrap_or(0)
    }

    /// Iterates over `(node, distance)` for every discovered node in increasing node order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.distances
            .iter()
            .map(|(&node, &distance)| (node, distance))
            .sorted_unstable()
    }
}

enum Termination {
    Reached(usize),
    Exhausted,
    DepthLimit(usize),
}

pub(crate) struct Search<E, C> {
    settings: SearchSettings<E, C>,
}

impl<E: Expander, C: SearchCallback> Search<E, C> {
    pub(crate) fn new(settings: SearchSettings<E, C>) -> Self {
        Self { settings }
    }

    /// Breadth-first search from the source. Each pass of the outer loop drains one depth of the
    /// FIFO frontier, so nodes are discovered in non-decreasing distance order.
    fn traverse(&mut self) -> (DistanceTable, Termination) {
        let settings = &mut self.settings;
        let node_count = settings.node_count();
        let source = settings.source;

        let mut table = DistanceTable::new(node_count, source);

        tracing::debug!("starting search from node {source} over {node_count} nodes");

        settings.callback.new_node(0, source);
        if settings.destination == Some(source) {
            return (table, Termination::Reached(source));
        }
        settings.callback.end_of_depth(0);

        let mut frontier = VecDeque::from([source]);
        let mut expanded = Vec::new();
        let mut depth = 0;

        while !frontier.is_empty() {
            if !settings.may_expand(depth) {
                tracing::debug!(
                    "depth limit {depth} reached with {} nodes unexpanded",
                    frontier.len(),
                );
                return (table, Termination::DepthLimit(depth));
            }

            let mut new = 0;

            for _ in 0..frontier.len() {
                let Some(node) = frontier.pop_front() else {
                    break;
                };

                expanded.clear();
                settings.expander.expand(node, &mut expanded);

                for &next in &expanded {
                    if !settings.is_valid_node(next) || table.distance(next).is_some() {
                        continue;
                    }

                    table.record(next, depth + 1, node);
                    settings.callback.new_node(depth + 1, next);
                    tracing::trace!("discovered node {next} at depth {}", depth + 1);
                    new += 1;

                    if settings.destination == Some(next) {
                        tracing::debug!("reached node {next} at depth {}", depth + 1);
                        return (table, Termination::Reached(next));
                    }

                    frontier.push_back(next);
                }
            }

            depth += 1;
            tracing::debug!("depth {depth} new {new}");

            if new > 0 {
                settings.callback.end_of_depth(depth);
            }
        }

        tracing::debug!("no new nodes, done");

        (table, Termination::Exhausted)
    }

    pub(crate) fn run(mut self) -> SearchOutcome {
        let (table, termination) = self.traverse();

        match termination {
            Termination::Reached(node) => {
                table
                    .path_to(node)
                    .map_or(SearchOutcome::Unreachable, |path| SearchOutcome::Found {
                        distance: path.len() - 1,
                        path,
                    })
            }
            Termination::Exhausted => SearchOutcome::Unreachable,
            Termination::DepthLimit(depth) => SearchOutcome::DepthLimitReached { depth },
        }
    }

    pub(crate) fn explore(mut self) -> DistanceTable {
        self.settings.destination = None;
        let (table, _) = self.traverse();
        table
    }
}
