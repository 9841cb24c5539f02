//! Gametes - haploid contributions produced by a parent in a breeding role
//!
//! Chromosomes assort independently. A heterozygous chromosome sends either
//! allele with probability 0.5; a homozygous one sends its only allele.
//! Recombination within a chromosome is not represented, which is why
//! female-role parents must first pass the eligibility check.

use super::chromosome::{Allele, ChromosomeId};
use super::genotype::Genotype;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-cross breeding role, independent of a stock's biological sex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BreedingRole {
    /// Recombination-capable role
    Female,
    Male,
}

impl BreedingRole {
    pub fn symbol(&self) -> &'static str {
        match self {
            BreedingRole::Female => "F",
            BreedingRole::Male => "M",
        }
    }
}

impl fmt::Display for BreedingRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreedingRole::Female => f.write_str("female"),
            BreedingRole::Male => f.write_str("male"),
        }
    }
}

/// One allele per modeled chromosome, with its production probability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gamete {
    /// Allele per chromosome, indexed by `ChromosomeId::index`
    alleles: [Allele; 3],
    /// Chance the parent produces this gamete
    pub probability: f64,
}

impl Gamete {
    pub fn allele(&self, chrom: ChromosomeId) -> &Allele {
        &self.alleles[chrom.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChromosomeId, &Allele)> {
        ChromosomeId::ALL.into_iter().zip(self.alleles.iter())
    }
}

impl fmt::Display for Gamete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(c, a)| format!("{}:{}", c, a)).collect();
        write!(f, "{} ({:.4})", parts.join(" "), self.probability)
    }
}

/// Every distinct gamete a parent can produce in the given role
pub fn get_gametes(genotype: &Genotype, role: BreedingRole) -> Vec<Gamete> {
    match role {
        // Female-role parents are balanced or homozygous on every chromosome,
        // so chromosome-level segregation already covers what they can transmit.
        BreedingRole::Female | BreedingRole::Male => independent_assortment(genotype),
    }
}

fn independent_assortment(genotype: &Genotype) -> Vec<Gamete> {
    let mut gametes = vec![Gamete {
        alleles: [Allele::wild_type(), Allele::wild_type(), Allele::wild_type()],
        probability: 1.0,
    }];

    for (chrom, pair) in genotype.iter() {
        let slot = chrom.index();
        let mut next = Vec::with_capacity(gametes.len() * 2);
        for gamete in &gametes {
            if pair.is_homozygous() {
                let mut g = gamete.clone();
                g.alleles[slot] = pair.first.clone();
                next.push(g);
            } else {
                for allele in pair.alleles() {
                    let mut g = gamete.clone();
                    g.alleles[slot] = allele.clone();
                    g.probability *= 0.5;
                    next.push(g);
                }
            }
        }
        gametes = next;
    }
    gametes
}
