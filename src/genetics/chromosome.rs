//! Chromosome identifiers, alleles, and unordered allele pairs
//!
//! Only the autosomes 2, 3 and 4 are modeled. An allele is an opaque token;
//! a chromosome pair remembers the order it was written in for display, but
//! compares, hashes and sorts as an unordered pair.

use super::GenotypeError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// The wild-type allele token
pub const WILD_TYPE: &str = "+";

/// Modeled autosomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChromosomeId {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
}

impl ChromosomeId {
    /// Every modeled chromosome, in declared order
    pub const ALL: [ChromosomeId; 3] = [ChromosomeId::Two, ChromosomeId::Three, ChromosomeId::Four];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChromosomeId::Two => "2",
            ChromosomeId::Three => "3",
            ChromosomeId::Four => "4",
        }
    }

    /// Slot of this chromosome in fixed-shape genotype storage
    pub fn index(self) -> usize {
        match self {
            ChromosomeId::Two => 0,
            ChromosomeId::Three => 1,
            ChromosomeId::Four => 2,
        }
    }
}

impl FromStr for ChromosomeId {
    type Err = GenotypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2" => Ok(ChromosomeId::Two),
            "3" => Ok(ChromosomeId::Three),
            "4" => Ok(ChromosomeId::Four),
            other => Err(GenotypeError::UnknownChromosome(other.to_string())),
        }
    }
}

impl fmt::Display for ChromosomeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An allele token such as `+`, `CyO` or `w_FM7`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Allele(String);

impl Allele {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn wild_type() -> Self {
        Self(WILD_TYPE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Allele {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl fmt::Display for Allele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two alleles carried on one chromosome slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChromosomePair {
    pub first: Allele,
    pub second: Allele,
}

impl ChromosomePair {
    pub fn new(first: impl Into<Allele>, second: impl Into<Allele>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn homozygous(allele: impl Into<Allele>) -> Self {
        let allele = allele.into();
        Self {
            first: allele.clone(),
            second: allele,
        }
    }

    pub fn wild_type() -> Self {
        Self::homozygous(Allele::wild_type())
    }

    pub fn is_homozygous(&self) -> bool {
        self.first == self.second
    }

    pub fn alleles(&self) -> [&Allele; 2] {
        [&self.first, &self.second]
    }

    pub fn contains(&self, allele: &Allele) -> bool {
        self.first == *allele || self.second == *allele
    }

    /// Alleles in sorted order; the basis for equality, hashing and ordering
    pub fn canonical(&self) -> (&Allele, &Allele) {
        if self.first <= self.second {
            (&self.first, &self.second)
        } else {
            (&self.second, &self.first)
        }
    }
}

impl From<String> for Allele {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl PartialEq for ChromosomePair {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for ChromosomePair {}

impl Hash for ChromosomePair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl PartialOrd for ChromosomePair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChromosomePair {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl fmt::Display for ChromosomePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_chromosome_ids() {
        assert_eq!("3".parse::<ChromosomeId>().unwrap(), ChromosomeId::Three);
        assert!("X".parse::<ChromosomeId>().is_err());
        assert!("5".parse::<ChromosomeId>().is_err());
        for (i, chrom) in ChromosomeId::ALL.iter().enumerate() {
            assert_eq!(chrom.index(), i);
        }
    }

    #[test]
    fn test_pair_equality_is_unordered() {
        let a = ChromosomePair::new("CyO", "+");
        let b = ChromosomePair::new("+", "CyO");
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_pair_keeps_written_order() {
        let pair = ChromosomePair::new("CyO", "+");
        assert_eq!(pair.to_string(), "CyO/+");
        assert_eq!(pair.first.as_str(), "CyO");
    }

    #[test]
    fn test_homozygous() {
        assert!(ChromosomePair::wild_type().is_homozygous());
        assert!(ChromosomePair::new("a", "a").is_homozygous());
        assert!(!ChromosomePair::new("a", "+").is_homozygous());
    }
}
