//! Balancer and lethal marker catalogue
//!
//! An allele carries a marker when the marker text occurs inside the allele
//! token, so compound tokens such as `w_FM7` or `TM3,Sb` are recognised.

use super::Allele;

/// Balancer chromosomes recognised on any autosome
pub const BALANCER_MARKERS: [&str; 5] = ["FM7", "CyO", "TM6B", "TM3", "MKRS"];

/// Markers that kill the fly when the same marker sits on both homologs.
/// FM7 is the one balancer missing here; Sp and Pin are lethal but do not balance.
pub const LETHAL_MARKERS: [&str; 6] = ["Sp", "CyO", "TM6B", "TM3", "MKRS", "Pin"];

/// True iff the allele is, or contains, a known balancer
pub fn has_balancer(allele: &Allele) -> bool {
    BALANCER_MARKERS.iter().any(|m| allele.as_str().contains(m))
}

/// True iff the allele is, or contains, a known lethal marker
pub fn has_lethal_marker(allele: &Allele) -> bool {
    LETHAL_MARKERS.iter().any(|m| allele.as_str().contains(m))
}

/// Lethal markers shared by both alleles
pub fn shared_lethal_markers<'a>(a: &'a Allele, b: &'a Allele) -> impl Iterator<Item = &'static str> + 'a {
    LETHAL_MARKERS
        .iter()
        .copied()
        .filter(move |m| a.as_str().contains(m) && b.as_str().contains(m))
}

/// Balancer markers shared by both alleles
pub fn shared_balancers<'a>(a: &'a Allele, b: &'a Allele) -> impl Iterator<Item = &'static str> + 'a {
    BALANCER_MARKERS
        .iter()
        .copied()
        .filter(move |m| a.as_str().contains(m) && b.as_str().contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_balancer() {
        let cases = [
            ("CyO", true),
            ("TM6B", true),
            ("FM7", true),
            ("MKRS", true),
            ("w_FM7", true),
            ("TM3,Sb", true),
            ("w", false),
            ("+", false),
            ("Sp", false),
        ];
        for (token, expected) in cases {
            assert_eq!(has_balancer(&Allele::new(token)), expected, "allele {}", token);
        }
    }

    #[test]
    fn test_lethal_markers_overlap_balancers() {
        assert!(has_lethal_marker(&Allele::new("CyO")));
        assert!(has_lethal_marker(&Allele::new("Pin")));
        assert!(!has_lethal_marker(&Allele::new("FM7")));
        assert!(!has_lethal_marker(&Allele::new("+")));
    }

    #[test]
    fn test_shared_markers() {
        let cyo = Allele::new("CyO");
        let tm3 = Allele::new("TM3");
        assert_eq!(shared_lethal_markers(&cyo, &cyo).collect::<Vec<_>>(), vec!["CyO"]);
        assert_eq!(shared_lethal_markers(&cyo, &tm3).count(), 0);
        assert_eq!(shared_balancers(&tm3, &Allele::new("TM3,Sb")).collect::<Vec<_>>(), vec!["TM3"]);
    }
}
