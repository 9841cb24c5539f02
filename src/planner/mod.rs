//! Planner - multi-generation search for a cross plan reaching a target genotype
//!
//! The engine is single-threaded and synchronous. States live only for the
//! duration of a search; the returned plan is a flat list of cross steps.

mod config;
mod plan;
mod search;
mod state;

pub use config::{SearchConfig, MAX_GENERATIONS, MIN_GENERATIONS};
pub use plan::{BreedingPlan, CrossStep, NotFoundReason, PlanOutcome, PlanParent};
pub use search::{plan_to_target, BreedingPlanner, PlanError, PlanRequest};
pub use state::{joint_probability, Brood, BroodId, Origin, PickId, Stock, StockState};
