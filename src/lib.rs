//! flycross - Drosophila cross planning
//!
//! Plans multi-generation crosses of *Drosophila melanogaster* from available
//! stocks to a target genotype over autosomes 2, 3 and 4, tracking offspring
//! frequencies, lethality and balancer constraints along the way.

pub mod genetics;
pub mod planner;
pub mod storage;

pub use genetics::{cross, BreedingRole, Genotype, OffspringDistribution, Parent};
pub use planner::{BreedingPlan, BreedingPlanner, PlanOutcome, PlanRequest, SearchConfig};
pub use storage::StockCatalog;
