//! External genotype format
//!
//! `2:<allele1>/<allele2> 3:<allele1>/<allele2> 4:<allele1>/<allele2>`,
//! chromosomes separated by whitespace. Chromosomes left out are wild type.

use super::chromosome::{ChromosomeId, ChromosomePair};
use super::genotype::{Genotype, GenotypeError};

/// Parse the external string form into a genotype
pub fn parse_genotype(input: &str) -> Result<Genotype, GenotypeError> {
    let entries: Vec<&str> = input.split_whitespace().collect();
    if entries.is_empty() {
        return Err(GenotypeError::MalformedEntry(input.to_string()));
    }

    let mut pairs = Vec::with_capacity(entries.len());
    for entry in entries {
        let (chrom, alleles) = entry
            .split_once(':')
            .ok_or_else(|| GenotypeError::MalformedEntry(entry.to_string()))?;
        let chrom: ChromosomeId = chrom.parse()?;

        let mut parts = alleles.split('/');
        let (first, second) = match (parts.next(), parts.next(), parts.next()) {
            (Some(a), Some(b), None) => (a, b),
            _ => return Err(GenotypeError::MalformedEntry(entry.to_string())),
        };
        if first.is_empty() || second.is_empty() {
            return Err(GenotypeError::EmptyAllele(entry.to_string()));
        }
        pairs.push((chrom, ChromosomePair::new(first, second)));
    }
    Genotype::from_pairs(pairs)
}

/// Render a genotype in declared chromosome order, preserving allele order
pub fn format_genotype(genotype: &Genotype) -> String {
    genotype
        .iter()
        .map(|(chrom, pair)| format!("{}:{}", chrom, pair))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_genotype() {
        let genotype = parse_genotype("2:CyO/+ 3:TM6B/+ 4:+/+").unwrap();
        assert_eq!(genotype.get(ChromosomeId::Two), &ChromosomePair::new("CyO", "+"));
        assert_eq!(genotype.get(ChromosomeId::Three).first.as_str(), "TM6B");
        assert!(genotype.get(ChromosomeId::Four).is_homozygous());
    }

    #[test]
    fn test_format_preserves_order() {
        let text = "2:CyO/+ 3:+/TM6B 4:+/+";
        assert_eq!(format_genotype(&parse_genotype(text).unwrap()), text);
    }

    #[test]
    fn test_partial_genotype_fills_wild_type() {
        let genotype = parse_genotype("3:Sb/TM3").unwrap();
        assert_eq!(format_genotype(&genotype), "2:+/+ 3:Sb/TM3 4:+/+");
    }

    #[test]
    fn test_tolerates_extra_whitespace() {
        assert!(parse_genotype("  2:a/+   3:+/+\t4:+/+ ").is_ok());
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            parse_genotype("2:CyO/+ 5:+/+"),
            Err(GenotypeError::UnknownChromosome("5".into()))
        );
        assert_eq!(
            parse_genotype("X:w/w 2:+/+"),
            Err(GenotypeError::UnknownChromosome("X".into()))
        );
        assert!(matches!(parse_genotype("2CyO/+"), Err(GenotypeError::MalformedEntry(_))));
        assert!(matches!(parse_genotype("2:CyO+"), Err(GenotypeError::MalformedEntry(_))));
        assert!(matches!(parse_genotype("2:a/b/c"), Err(GenotypeError::MalformedEntry(_))));
        assert!(matches!(parse_genotype("2:/+"), Err(GenotypeError::EmptyAllele(_))));
        assert!(matches!(parse_genotype("   "), Err(GenotypeError::MalformedEntry(_))));
        assert!(matches!(
            parse_genotype("2:a/+ 2:b/+"),
            Err(GenotypeError::DuplicateChromosome(ChromosomeId::Two))
        ));
    }
}
