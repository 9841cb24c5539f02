//! SearchConfig - bounds on how widely the planner explores each generation

use serde::{Deserialize, Serialize};

/// Smallest generation bound a request may ask for
pub const MIN_GENERATIONS: u32 = 1;
/// Largest generation bound a request may ask for
pub const MAX_GENERATIONS: u32 = 5;

/// Exploration limits for the breeding search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Offspring genotypes of a brood (most frequent first) that become frontier states
    pub offspring_per_brood: usize,
    /// New states admitted to the frontier per generation, best route probability first
    pub frontier_limit: usize,
    /// Per-role cap on siblings considered for crosses within one brood
    pub sibling_candidates: usize,
    /// Stop after evaluating this many crosses and report a truncated search
    pub node_budget: Option<usize>,
    /// Skip crosses whose parents already fall below the best candidate
    pub prune_by_probability: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            offspring_per_brood: 20,
            frontier_limit: 30,
            sibling_candidates: 20,
            node_budget: None,
            prune_by_probability: true,
        }
    }
}

impl SearchConfig {
    /// Narrow search for interactive use
    pub fn quick() -> Self {
        Self {
            offspring_per_brood: 8,
            frontier_limit: 12,
            sibling_candidates: 6,
            node_budget: Some(20_000),
            prune_by_probability: true,
        }
    }

    /// Keep every offspring and every state
    pub fn exhaustive() -> Self {
        Self {
            offspring_per_brood: usize::MAX,
            frontier_limit: usize::MAX,
            sibling_candidates: usize::MAX,
            node_budget: None,
            prune_by_probability: false,
        }
    }

    /// Whether `evaluated` crosses exhaust the node budget
    pub fn budget_exhausted(&self, evaluated: usize) -> bool {
        self.node_budget.map_or(false, |budget| evaluated >= budget)
    }
}
