//! Cross engine - combines gametes of a female-role and a male-role parent
//!
//! Offspring are aggregated by unordered-pair equality, lethal genotypes are
//! dropped and the survivors renormalised. A fully lethal cross yields an
//! empty distribution rather than an error.

use super::chromosome::ChromosomePair;
use super::gametes::{get_gametes, BreedingRole};
use super::genotype::{is_lethal, Genotype};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A parent genotype together with the role it plays in one cross
#[derive(Debug, Clone, Copy)]
pub struct Parent<'a> {
    pub genotype: &'a Genotype,
    pub role: BreedingRole,
}

impl<'a> Parent<'a> {
    pub fn female(genotype: &'a Genotype) -> Self {
        Self { genotype, role: BreedingRole::Female }
    }

    pub fn male(genotype: &'a Genotype) -> Self {
        Self { genotype, role: BreedingRole::Male }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CrossError {
    #[error("Role conflict: both parents hold the {0} role")]
    RoleConflict(BreedingRole),
}

/// Surviving offspring genotypes mapped to their relative frequency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OffspringDistribution {
    frequencies: BTreeMap<Genotype, f64>,
}

impl OffspringDistribution {
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Frequency of a genotype, zero when it does not survive
    pub fn frequency_of(&self, genotype: &Genotype) -> f64 {
        self.frequencies.get(genotype).copied().unwrap_or(0.0)
    }

    /// Sum of all frequencies: 1.0 for a viable cross, 0.0 when fully lethal
    pub fn total(&self) -> f64 {
        self.frequencies.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Genotype, f64)> {
        self.frequencies.iter().map(|(g, f)| (g, *f))
    }

    /// Offspring ordered by descending frequency, ties by genotype ordering
    pub fn unique_offspring(&self) -> Vec<(Genotype, f64)> {
        get_unique_offspring(self)
    }

    /// Simulate counting `n` flies from the vial
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<(Genotype, usize)> {
        let ordered = self.unique_offspring();
        let weights: WeightedIndex<f64> = match WeightedIndex::new(ordered.iter().map(|(_, f)| *f)) {
            Ok(weights) => weights,
            // fully lethal cross, nothing to count
            Err(_) => return Vec::new(),
        };
        let mut counts = vec![0usize; ordered.len()];
        for _ in 0..n {
            counts[weights.sample(rng)] += 1;
        }
        ordered
            .into_iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|((genotype, _), count)| (genotype, count))
            .collect()
    }
}

/// Deterministic ordering of a distribution for reproducible output
pub fn get_unique_offspring(distribution: &OffspringDistribution) -> Vec<(Genotype, f64)> {
    let mut out: Vec<(Genotype, f64)> = distribution
        .frequencies
        .iter()
        .map(|(g, f)| (g.clone(), *f))
        .collect();
    out.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// Cross two parents; exactly one must hold the female role
pub fn cross(a: Parent<'_>, b: Parent<'_>) -> Result<OffspringDistribution, CrossError> {
    let (female, male) = match (a.role, b.role) {
        (BreedingRole::Female, BreedingRole::Male) => (a, b),
        (BreedingRole::Male, BreedingRole::Female) => (b, a),
        (role, _) => return Err(CrossError::RoleConflict(role)),
    };

    let female_gametes = get_gametes(female.genotype, BreedingRole::Female);
    let male_gametes = get_gametes(male.genotype, BreedingRole::Male);

    let mut frequencies: BTreeMap<Genotype, f64> = BTreeMap::new();
    for fg in &female_gametes {
        for mg in &male_gametes {
            let pairs = fg
                .iter()
                .zip(mg.iter())
                .map(|((chrom, fa), (_, ma))| (chrom, ChromosomePair::new(fa.clone(), ma.clone())));
            let child = pairs.fold(Genotype::wild_type(), |acc, (chrom, pair)| acc.with(chrom, pair));
            *frequencies.entry(child).or_insert(0.0) += fg.probability * mg.probability;
        }
    }

    frequencies.retain(|genotype, _| !is_lethal(genotype));
    let viable: f64 = frequencies.values().sum();
    if viable > 0.0 {
        for freq in frequencies.values_mut() {
            *freq /= viable;
        }
    }
    Ok(OffspringDistribution { frequencies })
}
