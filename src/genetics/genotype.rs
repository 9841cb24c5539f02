//! Genotype - a fixed-shape diploid genotype over autosomes 2, 3 and 4
//!
//! Every modeled chromosome is always present. Equality compares each
//! chromosome pair unordered. Genotypes serialize as their external string
//! form, e.g. `2:CyO/+ 3:+/+ 4:+/+`.

use super::chromosome::{Allele, ChromosomeId, ChromosomePair};
use super::markers::{shared_balancers, shared_lethal_markers};
use super::parser::{format_genotype, parse_genotype};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors raised when building or validating a genotype
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenotypeError {
    #[error("Unknown chromosome: {0} (expected one of 2, 3, 4)")]
    UnknownChromosome(String),

    #[error("Malformed entry: '{0}' (expected '<chromosome>:<allele1>/<allele2>')")]
    MalformedEntry(String),

    #[error("Empty allele in entry: '{0}'")]
    EmptyAllele(String),

    #[error("Chromosome {0} given more than once")]
    DuplicateChromosome(ChromosomeId),

    #[error("Lethal genotype: {0} (same lethal marker on both homologs)")]
    Lethal(String),

    #[error("Homozygous balancer: {0}")]
    HomozygousBalancer(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Genotype {
    chromosomes: [ChromosomePair; 3],
}

impl Genotype {
    /// `2:+/+ 3:+/+ 4:+/+`
    pub fn wild_type() -> Self {
        Self {
            chromosomes: [
                ChromosomePair::wild_type(),
                ChromosomePair::wild_type(),
                ChromosomePair::wild_type(),
            ],
        }
    }

    /// Build from explicit chromosome pairs; unspecified chromosomes are wild type
    pub fn from_pairs<I>(pairs: I) -> Result<Self, GenotypeError>
    where
        I: IntoIterator<Item = (ChromosomeId, ChromosomePair)>,
    {
        let mut genotype = Self::wild_type();
        let mut seen = [false; 3];
        for (chrom, pair) in pairs {
            if seen[chrom.index()] {
                return Err(GenotypeError::DuplicateChromosome(chrom));
            }
            seen[chrom.index()] = true;
            genotype.chromosomes[chrom.index()] = pair;
        }
        Ok(genotype)
    }

    /// Replace one chromosome pair
    pub fn with(mut self, chrom: ChromosomeId, pair: ChromosomePair) -> Self {
        self.chromosomes[chrom.index()] = pair;
        self
    }

    pub fn get(&self, chrom: ChromosomeId) -> &ChromosomePair {
        &self.chromosomes[chrom.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChromosomeId, &ChromosomePair)> {
        ChromosomeId::ALL.into_iter().zip(self.chromosomes.iter())
    }

    pub fn is_homozygous(&self) -> bool {
        self.chromosomes.iter().all(|p| p.is_homozygous())
    }

    /// Whether `allele` sits on chromosome `chrom`
    pub fn carries(&self, chrom: ChromosomeId, allele: &Allele) -> bool {
        self.get(chrom).contains(allele)
    }

    pub fn is_lethal(&self) -> bool {
        is_lethal(self)
    }
}

/// True iff some chromosome carries the same lethal marker on both homologs.
/// Distinct lethal markers on one chromosome complement each other.
pub fn is_lethal(genotype: &Genotype) -> bool {
    genotype
        .iter()
        .any(|(_, pair)| shared_lethal_markers(&pair.first, &pair.second).next().is_some())
}

/// True iff some chromosome carries the same balancer on both homologs
pub fn has_homozygous_balancer(genotype: &Genotype) -> bool {
    genotype
        .iter()
        .any(|(_, pair)| shared_balancers(&pair.first, &pair.second).next().is_some())
}

/// Reject genotypes that cannot exist as a living stock, parent or target
pub fn validate_stock_genotype(genotype: &Genotype) -> Result<(), GenotypeError> {
    if is_lethal(genotype) {
        return Err(GenotypeError::Lethal(genotype.to_string()));
    }
    if has_homozygous_balancer(genotype) {
        return Err(GenotypeError::HomozygousBalancer(genotype.to_string()));
    }
    Ok(())
}

impl Default for Genotype {
    fn default() -> Self {
        Self::wild_type()
    }
}

impl FromStr for Genotype {
    type Err = GenotypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_genotype(s)
    }
}

impl TryFrom<String> for Genotype {
    type Error = GenotypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        parse_genotype(&s)
    }
}

impl From<Genotype> for String {
    fn from(genotype: Genotype) -> Self {
        format_genotype(&genotype)
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_genotype(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(s: &str) -> Genotype {
        s.parse().unwrap()
    }

    #[test]
    fn test_missing_chromosomes_default_to_wild_type() {
        let genotype = Genotype::from_pairs([(ChromosomeId::Two, ChromosomePair::new("CyO", "+"))]).unwrap();
        assert_eq!(genotype.get(ChromosomeId::Three), &ChromosomePair::wild_type());
        assert_eq!(genotype.get(ChromosomeId::Four), &ChromosomePair::wild_type());
    }

    #[test]
    fn test_duplicate_chromosome_rejected() {
        let result = Genotype::from_pairs([
            (ChromosomeId::Two, ChromosomePair::new("CyO", "+")),
            (ChromosomeId::Two, ChromosomePair::new("a", "+")),
        ]);
        assert_eq!(result, Err(GenotypeError::DuplicateChromosome(ChromosomeId::Two)));
    }

    #[test]
    fn test_equality_ignores_allele_order() {
        assert_eq!(g("2:CyO/+ 3:+/TM3 4:+/+"), g("2:+/CyO 3:TM3/+ 4:+/+"));
        assert_ne!(g("2:CyO/+ 3:+/+ 4:+/+"), g("2:CyO/CyO 3:+/+ 4:+/+"));
    }

    #[test]
    fn test_is_lethal() {
        assert!(is_lethal(&g("2:CyO/CyO 3:+/+ 4:+/+")));
        assert!(is_lethal(&g("2:+/+ 3:Sp/Sp 4:+/+")));
        assert!(!is_lethal(&g("2:CyO/+ 3:+/+ 4:+/+")));
        assert!(!is_lethal(&g("2:FM7/FM7 3:+/+ 4:+/+")));
        // different lethal markers on one chromosome are viable together
        assert!(!is_lethal(&g("2:+/+ 3:TM3/TM6B 4:+/+")));
    }

    #[test]
    fn test_lethality_ignores_other_chromosomes() {
        let lethal = g("2:CyO/CyO 3:+/+ 4:+/+");
        let changed = lethal.clone().with(ChromosomeId::Four, ChromosomePair::new("ey", "ey"));
        assert!(is_lethal(&changed));

        let viable = g("2:CyO/+ 3:+/+ 4:+/+");
        let changed = viable.with(ChromosomeId::Three, ChromosomePair::new("e", "e"));
        assert!(!is_lethal(&changed));
    }

    #[test]
    fn test_is_homozygous() {
        assert!(Genotype::wild_type().is_homozygous());
        assert!(g("2:a/a 3:e/e 4:+/+").is_homozygous());
        assert!(!g("2:a/a 3:e/+ 4:+/+").is_homozygous());
    }

    #[test]
    fn test_validate_stock_genotype() {
        assert!(validate_stock_genotype(&g("2:CyO/+ 3:TM3/TM6B 4:+/+")).is_ok());
        assert!(matches!(
            validate_stock_genotype(&g("2:CyO/CyO 3:+/+ 4:+/+")),
            Err(GenotypeError::Lethal(_))
        ));
        assert!(matches!(
            validate_stock_genotype(&g("2:w_FM7/FM7 3:+/+ 4:+/+")),
            Err(GenotypeError::HomozygousBalancer(_))
        ));
    }

    #[test]
    fn test_serde_uses_external_form() {
        let genotype = g("2:CyO/+ 3:+/+ 4:+/+");
        let json = serde_json::to_string(&genotype).unwrap();
        assert_eq!(json, "\"2:CyO/+ 3:+/+ 4:+/+\"");
        let back: Genotype = serde_json::from_str(&json).unwrap();
        assert_eq!(back, genotype);
    }
}
