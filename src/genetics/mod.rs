//! Genetics - genotype model, gametes, crosses and role eligibility
//!
//! Everything here is a pure function over immutable values.

mod chromosome;
mod cross;
mod eligibility;
mod gametes;
mod genotype;
pub mod markers;
mod parser;

pub use chromosome::{Allele, ChromosomeId, ChromosomePair, WILD_TYPE};
pub use cross::{cross, get_unique_offspring, CrossError, OffspringDistribution, Parent};
pub use eligibility::{allowed_as_female_parent, RoleEligibility};
pub use gametes::{get_gametes, BreedingRole, Gamete};
pub use genotype::{
    has_homozygous_balancer, is_lethal, validate_stock_genotype, Genotype, GenotypeError,
};
pub use markers::{has_balancer, BALANCER_MARKERS, LETHAL_MARKERS};
pub use parser::{format_genotype, parse_genotype};
