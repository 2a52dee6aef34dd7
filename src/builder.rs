use thiserror::Error;

use crate::{
    callback::{NoCallback, SearchCallback},
    expander::Expander,
    search::{DistanceTable, Search, SearchOutcome},
    settings::SearchSettings,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchBuilderError {
    #[error("`expander` not set")]
    ExpanderNotSet,

    #[error("`source` not set")]
    SourceNotSet,

    #[error("`destination` not set")]
    DestinationNotSet,

    #[error("`max_depth` not set")]
    MaxDepthNotSet,

    #[error("Source ({node}) must be less than the node count ({node_count})")]
    SourceOutOfRange { node: usize, node_count: usize },

    #[error("Destination ({node}) must be less than the node count ({node_count})")]
    DestinationOutOfRange { node: usize, node_count: usize },
}

#[derive(Debug)]
pub struct SearchBuilder<E, C> {
    expander: Option<E>,
    source: Option<usize>,
    destination: Option<usize>,
    max_depth: Option<Option<usize>>,
    callback: C,
}

impl<E: Expander> Default for SearchBuilder<E, NoCallback> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Expander> SearchBuilder<E, NoCallback> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            expander: None,
            source: None,
            destination: None,
            max_depth: None,
            callback: NoCallback,
        }
    }
}

impl<E: Expander, C: SearchCallback> SearchBuilder<E, C> {
    #[must_use]
    pub fn expander(mut self, expander: E) -> Self {
        self.expander = Some(expander);
        self
    }

    #[must_use]
    pub fn source(mut self, source: usize) -> Self {
        self.source = Some(source);
        self
    }

    #[must_use]
    pub fn destination(mut self, destination: usize) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Stop expanding once nodes at `max_depth` have been discovered.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(Some(max_depth));
        self
    }

    #[must_use]
    pub fn unbounded_depth(mut self) -> Self {
        self.max_depth = Some(None);
        self
    }

    #[must_use]
    pub fn callback<Callback: SearchCallback>(
        self,
        callback: Callback,
    ) -> SearchBuilder<E, Callback> {
        SearchBuilder {
            expander: self.expander,
            source: self.source,
            destination: self.destination,
            max_depth: self.max_depth,
            callback,
        }
    }

    fn into_settings(
        self,
        destination: Option<usize>,
        max_depth: Option<usize>,
    ) -> Result<SearchSettings<E, C>, SearchBuilderError> {
        let expander = self.expander.ok_or(SearchBuilderError::ExpanderNotSet)?;
        let source = self.source.ok_or(SearchBuilderError::SourceNotSet)?;

        let node_count = expander.node_count();
        if source >= node_count {
            return Err(SearchBuilderError::SourceOutOfRange {
                node: source,
                node_count,
            });
        }

        if let Some(destination) = destination.filter(|&destination| destination >= node_count) {
            return Err(SearchBuilderError::DestinationOutOfRange {
                node: destination,
                node_count,
            });
        }

        Ok(SearchSettings {
            expander,
            callback: self.callback,
            source,
            destination,
            max_depth,
        })
    }

    pub fn run_no_defaults(self) -> Result<SearchOutcome, SearchBuilderError> {
        let destination = self
            .destination
            .ok_or(SearchBuilderError::DestinationNotSet)?;
        let max_depth = self.max_depth.ok_or(SearchBuilderError::MaxDepthNotSet)?;

        let settings = self.into_settings(Some(destination), max_depth)?;

        Ok(Search::new(settings).run())
    }

    pub fn run(mut self) -> Result<SearchOutcome, SearchBuilderError> {
        self.max_depth.get_or_insert(None);

        self.run_no_defaults()
    }

    /// Visits every node reachable from the source (within `max_depth`, if set) and returns the
    /// distance to each of them. Any destination that was set is ignored.
    pub fn explore(self) -> Result<DistanceTable, SearchBuilderError> {
        let max_depth = self.max_depth.flatten();
        let settings = self.into_settings(None, max_depth)?;

        Ok(Search::new(settings).explore())
    }
}
