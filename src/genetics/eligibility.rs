//! Breeding-role eligibility
//!
//! Female role is reserved for genotypes whose chromosomes cannot produce
//! unmodeled recombinants: each pair is homozygous or carries a balancer.
//! Male role has no gate.

use super::gametes::BreedingRole;
use super::genotype::Genotype;
use super::markers::has_balancer;
use serde::{Deserialize, Serialize};

/// True iff every chromosome is homozygous or has a balancer on one homolog
pub fn allowed_as_female_parent(genotype: &Genotype) -> bool {
    genotype
        .iter()
        .all(|(_, pair)| pair.is_homozygous() || has_balancer(&pair.first) || has_balancer(&pair.second))
}

/// Which breeding roles a genotype may occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleEligibility {
    pub female: bool,
    pub male: bool,
}

impl RoleEligibility {
    pub fn for_genotype(genotype: &Genotype) -> Self {
        Self {
            female: allowed_as_female_parent(genotype),
            male: true,
        }
    }

    pub fn allows(&self, role: BreedingRole) -> bool {
        match role {
            BreedingRole::Female => self.female,
            BreedingRole::Male => self.male,
        }
    }

    pub fn label(&self) -> &'static str {
        match (self.female, self.male) {
            (true, true) => "F/M",
            (true, false) => "F",
            (false, true) => "M",
            (false, false) => "-",
        }
    }
}
