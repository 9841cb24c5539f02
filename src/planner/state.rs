//! Search states, broods and provenance
//!
//! A `StockState` is either a named laboratory stock (no origin) or a virtual
//! state picked out of a `Brood`. Provenance points backwards only: a state
//! holds its brood, a brood holds its two parents, so no reference cycles form.
//!
//! Route probability is the product of the distinct picks in a state's
//! ancestry. A brood reached through two siblings, or through a shared
//! ancestor, therefore contributes once.

use crate::genetics::{Genotype, RoleEligibility};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::rc::Rc;

pub type BroodId = u64;

/// Choosing offspring `offspring` (index into the ordered distribution) from a brood
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PickId {
    /// Brood the offspring was taken from
    pub brood: BroodId,
    /// Position in the brood's ordered offspring list
    pub offspring: usize,
}

/// A named laboratory stock offered to the planner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    /// Laboratory name, unique within a request
    pub name: String,
    pub genotype: Genotype,
}

impl Stock {
    pub fn new(name: impl Into<String>, genotype: Genotype) -> Self {
        Self {
            name: name.into(),
            genotype,
        }
    }
}

/// The outcome of one concrete cross; immutable once built
#[derive(Debug)]
pub struct Brood {
    /// Sequence number within one search
    pub id: BroodId,
    /// Generation in which the cross is set up, starting at 1
    pub generation: u32,
    /// Parent in the female role
    pub female: Rc<StockState>,
    /// Parent in the male role
    pub male: Rc<StockState>,
    /// Surviving offspring, most frequent first
    pub offspring: Vec<(Genotype, f64)>,
}

impl Brood {
    /// Probability of having both parents available
    pub fn parent_probability(&self) -> f64 {
        joint_probability(&self.female, &self.male)
    }

    /// Both parents were picked from the same earlier brood
    pub fn is_sibling_cross(&self) -> bool {
        match (&self.female.origin, &self.male.origin) {
            (Some(f), Some(m)) => f.brood.id == m.brood.id,
            _ => false,
        }
    }
}

/// Where a virtual state came from
#[derive(Debug)]
pub struct Origin {
    /// The cross that produced the state
    pub brood: Rc<Brood>,
    /// Index of the picked genotype in `brood.offspring`
    pub offspring: usize,
}

impl Origin {
    pub fn pick(&self) -> PickId {
        PickId {
            brood: self.brood.id,
            offspring: self.offspring,
        }
    }

    /// Frequency of the picked genotype within its brood
    pub fn frequency(&self) -> f64 {
        self.brood.offspring.get(self.offspring).map_or(0.0, |(_, f)| *f)
    }
}

/// A search node
#[derive(Debug)]
pub struct StockState {
    /// Stock name, or `F{generation}-B{brood}.{offspring}` for a virtual state
    pub name: String,
    pub genotype: Genotype,
    /// Roles this genotype may take in a cross
    pub eligibility: RoleEligibility,
    /// 0 for laboratory stocks, otherwise the generation of the producing brood
    pub generation: u32,
    /// Probability of obtaining this fly from the laboratory stocks
    pub route_probability: f64,
    /// `None` for laboratory stocks
    pub origin: Option<Origin>,
}

impl StockState {
    pub fn from_stock(stock: &Stock) -> Self {
        Self {
            name: stock.name.clone(),
            genotype: stock.genotype.clone(),
            eligibility: RoleEligibility::for_genotype(&stock.genotype),
            generation: 0,
            route_probability: 1.0,
            origin: None,
        }
    }

    /// Virtual state for one offspring of a brood
    pub fn offspring_of(brood: &Rc<Brood>, offspring: usize) -> Option<Self> {
        let (genotype, _) = brood.offspring.get(offspring)?;
        let origin = Origin {
            brood: Rc::clone(brood),
            offspring,
        };
        let mut picks = BTreeMap::new();
        collect_ancestry(&brood.female, &mut picks);
        collect_ancestry(&brood.male, &mut picks);
        let route_probability = picks.values().map(|s| s.pick_frequency()).product::<f64>() * origin.frequency();

        Some(Self {
            name: format!("F{}-B{}.{}", brood.generation, brood.id, offspring),
            genotype: genotype.clone(),
            eligibility: RoleEligibility::for_genotype(genotype),
            generation: brood.generation,
            route_probability,
            origin: Some(origin),
        })
    }

    /// Laboratory stocks have an empty provenance
    pub fn is_original(&self) -> bool {
        self.origin.is_none()
    }

    pub fn pick(&self) -> Option<PickId> {
        self.origin.as_ref().map(Origin::pick)
    }

    fn pick_frequency(&self) -> f64 {
        self.origin.as_ref().map_or(1.0, Origin::frequency)
    }

    /// Number of distinct picks behind this state
    pub fn provenance_depth(&self) -> usize {
        self.ancestry().len()
    }

    /// Virtual states on this state's provenance, itself included, keyed by pick
    pub fn ancestry(&self) -> BTreeMap<PickId, &StockState> {
        let mut out = BTreeMap::new();
        collect_ancestry(self, &mut out);
        out
    }
}

fn collect_ancestry<'a>(state: &'a StockState, out: &mut BTreeMap<PickId, &'a StockState>) {
    if let Some(origin) = &state.origin {
        if out.insert(origin.pick(), state).is_none() {
            collect_ancestry(&origin.brood.female, out);
            collect_ancestry(&origin.brood.male, out);
        }
    }
}

/// Probability of realising both states, counting shared picks once
pub fn joint_probability(a: &StockState, b: &StockState) -> f64 {
    let mut picks = BTreeMap::new();
    collect_ancestry(a, &mut picks);
    collect_ancestry(b, &mut picks);
    picks.values().map(|s| s.pick_frequency()).product()
}
