//! Search configuration

/// Options for a sentence search
///
/// The library default runs in parallel with no ceiling. Callers that need
/// bounded latency should set `max_combinations`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Fan lookups and reductions of each level out over the rayon pool
    pub parallel: bool,
    /// Stop with an error once a level holds more combinations than this
    pub max_combinations: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            max_combinations: None,
        }
    }
}

impl SearchConfig {
    /// Sequential search with no ceiling
    #[must_use]
    pub const fn sequential() -> Self {
        Self {
            parallel: false,
            max_combinations: None,
        }
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub const fn with_max_combinations(mut self, limit: Option<usize>) -> Self {
        self.max_combinations = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_parallel_and_unbounded() {
        let config = SearchConfig::default();
        assert!(config.parallel);
        assert_eq!(config.max_combinations, None);
    }

    #[test]
    fn builders_override_fields() {
        let config = SearchConfig::default()
            .with_parallel(false)
            .with_max_combinations(Some(1000));
        assert_eq!(
            config,
            SearchConfig {
                parallel: false,
                max_combinations: Some(1000)
            }
        );
        assert_eq!(SearchConfig::sequential(), config.with_max_combinations(None));
    }
}
