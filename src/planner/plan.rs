//! Breeding plans and search outcomes
//!
//! A plan is rebuilt from the winning state's provenance: one step per pick
//! on its ancestry, ordered by generation, ending with the cross that yields
//! the target. A plan fingerprint chains SHA-256 over its steps so identical
//! plans hash identically across runs.

use super::state::StockState;
use crate::genetics::{BreedingRole, Genotype};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// One parent of a plan step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanParent {
    pub name: String,
    pub genotype: Genotype,
    pub role: BreedingRole,
    /// Laboratory stock, as opposed to an offspring selected earlier in the plan
    pub is_stock: bool,
}

impl PlanParent {
    fn from_state(state: &StockState, role: BreedingRole) -> Self {
        Self {
            name: state.name.clone(),
            genotype: state.genotype.clone(),
            role,
            is_stock: state.is_original(),
        }
    }
}

/// A cross and the offspring selected from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossStep {
    pub generation: u32,
    pub parent1: PlanParent,
    pub parent2: PlanParent,
    /// Name under which the selected offspring is used later on
    pub selected_name: String,
    pub offspring: Genotype,
    /// Frequency of the selected genotype within this cross
    pub frequency: f64,
    /// Route probability of the selected offspring
    pub cumulative_probability: f64,
}

impl fmt::Display for CrossStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "G{}: {} [{}] ({}) x {} [{}] ({}) -> {} [{}] freq={:.4} cumulative={:.4}",
            self.generation,
            self.parent1.name,
            self.parent1.genotype,
            self.parent1.role.symbol(),
            self.parent2.name,
            self.parent2.genotype,
            self.parent2.role.symbol(),
            self.selected_name,
            self.offspring,
            self.frequency,
            self.cumulative_probability,
        )
    }
}

/// The best route found to the target genotype
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedingPlan {
    pub target: Genotype,
    pub steps: Vec<CrossStep>,
    pub generations_used: u32,
    pub overall_probability: f64,
}

impl BreedingPlan {
    /// Rebuild the plan that produced `state`
    pub fn from_state(state: &StockState) -> Self {
        let mut chain: Vec<&StockState> = state.ancestry().into_values().collect();
        chain.sort_by_key(|s| (s.generation, s.pick()));

        let steps = chain
            .into_iter()
            .filter_map(|s| {
                let origin = s.origin.as_ref()?;
                Some(CrossStep {
                    generation: origin.brood.generation,
                    parent1: PlanParent::from_state(&origin.brood.female, BreedingRole::Female),
                    parent2: PlanParent::from_state(&origin.brood.male, BreedingRole::Male),
                    selected_name: s.name.clone(),
                    offspring: s.genotype.clone(),
                    frequency: origin.frequency(),
                    cumulative_probability: s.route_probability,
                })
            })
            .collect();

        Self {
            target: state.genotype.clone(),
            steps,
            generations_used: state.generation,
            overall_probability: state.route_probability,
        }
    }

    /// Number of crosses the plan requires
    pub fn cross_count(&self) -> usize {
        let mut broods: Vec<(u32, &str, &str)> = self
            .steps
            .iter()
            .map(|s| (s.generation, s.parent1.name.as_str(), s.parent2.name.as_str()))
            .collect();
        broods.sort();
        broods.dedup();
        broods.len()
    }

    /// Hex SHA-256 over the ordered steps
    pub fn fingerprint(&self) -> String {
        let mut hash = Self::hash_link(&[0u8; 32], self.target.to_string().as_bytes());
        for step in &self.steps {
            let line = format!(
                "{}|{}|{}|{}|{}|{}",
                step.generation,
                step.parent1.genotype,
                step.parent2.genotype,
                step.offspring,
                step.frequency.to_bits(),
                step.cumulative_probability.to_bits()
            );
            hash = Self::hash_link(&hash, line.as_bytes());
        }
        hex::encode(hash)
    }

    fn hash_link(prev: &[u8], data: &[u8]) -> Vec<u8> {
        let mut hasher = Sha256::new();
        hasher.update(prev);
        hasher.update(data);
        hasher.finalize().to_vec()
    }

    pub fn summary(&self) -> String {
        format!(
            "Plan to {} | {} generations | {} crosses | probability {:.4}",
            self.target,
            self.generations_used,
            self.cross_count(),
            self.overall_probability
        )
    }
}

/// Why a search ended without a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundReason {
    ExceededMaxGenerations,
    TargetUnreachable,
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundReason::ExceededMaxGenerations => f.write_str("exceeded max generations"),
            NotFoundReason::TargetUnreachable => f.write_str("target unreachable"),
        }
    }
}

/// Result of a planning request; none of these variants is an error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlanOutcome {
    Found(BreedingPlan),
    NotFound {
        reason: NotFoundReason,
    },
    /// The node budget ran out before any plan was found
    Truncated {
        generations_explored: u32,
        crosses_evaluated: usize,
    },
}

impl PlanOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, PlanOutcome::Found(_))
    }

    pub fn plan(&self) -> Option<&BreedingPlan> {
        match self {
            PlanOutcome::Found(plan) => Some(plan),
            _ => None,
        }
    }
}
