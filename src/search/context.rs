use std::time::{Duration, Instant};

use log::{debug, info, warn};

use super::{SearchError, SearchOutcome, Strategy};

/// Limits applied to a single search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Stop with `SearchError::ExpansionLimitReached` once this many states
    /// have been expanded without reaching the goal.
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_expansions(max_expansions: usize) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }
}

/// Counters collected while a search runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States whose successors were generated.
    pub expanded: usize,
    /// States pushed onto the frontier, the root included.
    pub generated: usize,
    /// States dropped because their configuration had already been
    /// visited.
    pub discarded: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

/// Limits and statistics for search runs. One context can be reused across
/// many searches; each run starts by resetting the statistics.
#[derive(Debug, Default)]
pub struct SearchContext {
    limits: SearchLimits,
    stats: SearchStats,
    last_duration: Option<Duration>,
}

impl SearchContext {
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            stats: SearchStats::default(),
            last_duration: None,
        }
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    pub fn set_limits(&mut self, limits: SearchLimits) {
        self.limits = limits;
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn expanded_count(&self) -> usize {
        self.stats.expanded
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.last_duration
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
        self.last_duration = None;
    }

    /// Resets the statistics, runs `f` and records how long it took.
    pub(crate) fn run<F>(&mut self, strategy: Strategy, f: F) -> Result<SearchOutcome, SearchError>
    where
        F: FnOnce(&mut Self) -> Result<SearchOutcome, SearchError>,
    {
        self.reset_stats();
        let start = Instant::now();
        let result = f(self);
        let duration = start.elapsed();
        self.last_duration = Some(duration);

        match &result {
            Ok(SearchOutcome::Solved(state)) => info!(
                "{} search solved in {} moves: {} expanded, {} generated, {:?}",
                strategy,
                state.g(),
                self.stats.expanded,
                self.stats.generated,
                duration
            ),
            Ok(SearchOutcome::NoSolution) => info!(
                "{} search exhausted {} states without a solution, {:?}",
                strategy, self.stats.expanded, duration
            ),
            Err(error) => warn!("{} search stopped: {}", strategy, error),
        }
        debug!("search stats: {:?}", self.stats);

        result
    }

    /// Counts one expansion, or fails if the expansion limit is used up.
    pub(crate) fn record_expansion(&mut self) -> Result<(), SearchError> {
        if let Some(max_expansions) = self.limits.max_expansions {
            if self.stats.expanded >= max_expansions {
                return Err(SearchError::ExpansionLimitReached {
                    expanded: self.stats.expanded,
                });
            }
        }
        self.stats.expanded += 1;
        Ok(())
    }

    pub(crate) fn record_generated(&mut self) {
        self.stats.generated += 1;
    }

    pub(crate) fn record_discarded(&mut self) {
        self.stats.discarded += 1;
    }

    pub(crate) fn observe_frontier(&mut self, size: usize) {
        if size > self.stats.max_frontier {
            self.stats.max_frontier = size;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expansion_limit() {
        let mut context = SearchContext::new(SearchLimits::with_max_expansions(2));
        assert!(context.record_expansion().is_ok());
        assert!(context.record_expansion().is_ok());
        assert_eq!(
            Err(SearchError::ExpansionLimitReached { expanded: 2 }),
            context.record_expansion()
        );
        assert_eq!(2, context.expanded_count());
    }

    #[test]
    fn test_unlimited_by_default() {
        let mut context = SearchContext::default();
        for _ in 0..10_000 {
            context.record_expansion().unwrap();
        }
        assert_eq!(10_000, context.expanded_count());
    }

    #[test]
    fn test_reset_stats() {
        let mut context = SearchContext::default();
        context.record_expansion().unwrap();
        context.record_generated();
        context.record_discarded();
        context.observe_frontier(7);
        context.observe_frontier(3);
        assert_eq!(
            SearchStats {
                expanded: 1,
                generated: 1,
                discarded: 1,
                max_frontier: 7,
            },
            context.stats()
        );
        context.reset_stats();
        assert_eq!(SearchStats::default(), context.stats());
    }
}
