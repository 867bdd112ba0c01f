/// A builder struct to configure a [`PathFinder`](super::PathFinder), with logical defaults.
///
/// By default, returned paths start at the goal and stop just before the start position, and the
/// search has no limit on the number of positions it expands.
///
/// ```
/// use searchstat::path::PathOptions;
///
/// let options = PathOptions::new()
///     .include_start(true)
///     .max_expansions(10_000);
/// assert!(options.includes_start());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathOptions {
    pub(crate) include_start: bool,
    pub(crate) max_expansions: Option<usize>,
}

impl PathOptions {
    /// Creates a new set of options with the default values.
    pub const fn new() -> PathOptions {
        PathOptions {
            include_start: false,
            max_expansions: None,
        }
    }

    /// Sets whether the start position is appended to the end of a found path. When `start` and
    /// `goal` are equal, the path contains a single position either way.
    pub const fn include_start(self, include_start: bool) -> PathOptions {
        PathOptions {
            include_start,
            ..self
        }
    }

    /// Limits the number of positions the search can expand before giving up.
    ///
    /// The goal is checked before the limit, so a goal popped right after `max_expansions`
    /// positions have been expanded is still found. The search gives up when any other position
    /// would be expanded past the limit.
    pub const fn max_expansions(self, max_expansions: usize) -> PathOptions {
        PathOptions {
            max_expansions: Some(max_expansions),
            ..self
        }
    }

    /// Removes any limit on the number of expanded positions.
    pub const fn unlimited(self) -> PathOptions {
        PathOptions {
            max_expansions: None,
            ..self
        }
    }

    /// Returns true if found paths end with the start position.
    pub const fn includes_start(&self) -> bool {
        self.include_start
    }

    /// Returns the expansion limit, if any.
    pub const fn expansion_limit(&self) -> Option<usize> {
        self.max_expansions
    }
}
