//! Breeding search engine
//!
//! Breadth-first over generations. Each generation crosses every pair of
//! frontier states that has not been crossed before (a laboratory stock may be
//! crossed with itself), then crosses siblings picked from the previous
//! generation's broods. The first generation that produces the target ends the
//! search; among its candidates the highest route probability wins.

use super::config::{SearchConfig, MAX_GENERATIONS, MIN_GENERATIONS};
use super::plan::{BreedingPlan, NotFoundReason, PlanOutcome};
use super::state::{joint_probability, Brood, BroodId, PickId, Stock, StockState};
use crate::genetics::{
    cross, validate_stock_genotype, BreedingRole, ChromosomeId, CrossError, Genotype,
    GenotypeError, Parent,
};
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// Errors that stop a planning request
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("Generation bound {0} outside {min}..={max}", min = MIN_GENERATIONS, max = MAX_GENERATIONS)]
    InvalidGeneration(u32),

    #[error("No stocks available")]
    NoStocks,

    #[error("Invalid stock '{stock}': {source}")]
    InvalidStock {
        stock: String,
        #[source]
        source: GenotypeError,
    },

    #[error("Invalid target: {0}")]
    InvalidTarget(#[source] GenotypeError),

    /// Role assignment inside the engine is broken
    #[error("Internal search error: {0}")]
    Internal(#[from] CrossError),
}

/// What the presentation layer asks for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub available_stocks: Vec<Stock>,
    pub target: Genotype,
    pub max_generations: u32,
}

impl PlanRequest {
    pub fn new(available_stocks: Vec<Stock>, target: Genotype, max_generations: u32) -> Self {
        Self {
            available_stocks,
            target,
            max_generations,
        }
    }

    /// Boundary checks; the engine assumes these hold
    pub fn validate(&self) -> Result<(), PlanError> {
        if !(MIN_GENERATIONS..=MAX_GENERATIONS).contains(&self.max_generations) {
            return Err(PlanError::InvalidGeneration(self.max_generations));
        }
        if self.available_stocks.is_empty() {
            return Err(PlanError::NoStocks);
        }
        for stock in &self.available_stocks {
            validate_stock_genotype(&stock.genotype).map_err(|source| PlanError::InvalidStock {
                stock: stock.name.clone(),
                source,
            })?;
        }
        validate_stock_genotype(&self.target).map_err(PlanError::InvalidTarget)
    }

    /// Every target allele occurs on the same chromosome in some stock
    pub fn alleles_available(&self) -> bool {
        ChromosomeId::ALL.iter().all(|&chrom| {
            self.target.get(chrom).alleles().iter().all(|allele| {
                self.available_stocks
                    .iter()
                    .any(|s| s.genotype.carries(chrom, allele))
            })
        })
    }
}

/// Plans crosses toward a target genotype
#[derive(Debug, Clone, Default)]
pub struct BreedingPlanner {
    config: SearchConfig,
}

impl BreedingPlanner {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn plan(&self, request: &PlanRequest) -> Result<PlanOutcome, PlanError> {
        request.validate()?;
        info!(
            "Planning {} from {} stocks within {} generations",
            request.target,
            request.available_stocks.len(),
            request.max_generations
        );

        if !request.alleles_available() {
            info!("Target {} needs an allele no stock carries", request.target);
            return Ok(PlanOutcome::NotFound {
                reason: NotFoundReason::TargetUnreachable,
            });
        }

        Search::new(&self.config, &request.target).run(request)
    }
}

/// Plan with the default search configuration
pub fn plan_to_target(request: &PlanRequest) -> Result<PlanOutcome, PlanError> {
    BreedingPlanner::default().plan(request)
}

/// Identity of a state for remembering which pairs were already crossed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum StateKey {
    Stock(String),
    Pick(PickId),
}

impl StateKey {
    fn of(state: &StockState) -> Self {
        match state.pick() {
            Some(pick) => StateKey::Pick(pick),
            None => StateKey::Stock(state.name.clone()),
        }
    }
}

/// Frontier states created from one brood, most frequent first
type Litter = Vec<Rc<StockState>>;

/// One state per genotype, with a flag for states not yet crossed as a pair
#[derive(Debug, Default)]
struct Frontier {
    states: Vec<Rc<StockState>>,
    index: HashMap<Genotype, usize>,
    fresh: Vec<bool>,
}

impl Frontier {
    fn from_stocks(stocks: &[Stock]) -> Self {
        let mut frontier = Self::default();
        for stock in stocks {
            if frontier.index.contains_key(&stock.genotype) {
                debug!("Stock '{}' duplicates an earlier genotype, skipped", stock.name);
                continue;
            }
            frontier.push(Rc::new(StockState::from_stock(stock)));
        }
        frontier
    }

    fn len(&self) -> usize {
        self.states.len()
    }

    fn push(&mut self, state: Rc<StockState>) {
        self.index.insert(state.genotype.clone(), self.states.len());
        self.states.push(state);
        self.fresh.push(true);
    }

    /// Admit children best route first, up to `limit`. A child with a known
    /// genotype replaces the held state only with a strictly higher route
    /// probability. Returns how many states were added or replaced.
    fn admit(&mut self, mut children: Vec<Rc<StockState>>, limit: usize) -> usize {
        children.sort_by(|a, b| {
            b.route_probability
                .total_cmp(&a.route_probability)
                .then_with(|| a.genotype.cmp(&b.genotype))
        });

        self.fresh = vec![false; self.states.len()];
        let mut admitted = 0;
        for child in children {
            if admitted >= limit {
                break;
            }
            match self.index.get(&child.genotype) {
                Some(&pos) => {
                    if child.route_probability > self.states[pos].route_probability {
                        self.states[pos] = child;
                        self.fresh[pos] = true;
                        admitted += 1;
                    }
                }
                None => {
                    self.push(child);
                    admitted += 1;
                }
            }
        }
        admitted
    }
}

struct Search<'a> {
    config: &'a SearchConfig,
    target: &'a Genotype,
    next_brood: BroodId,
    evaluated: usize,
    crossed: HashSet<(StateKey, StateKey)>,
    best: Option<StockState>,
    truncated: bool,
}

impl<'a> Search<'a> {
    fn new(config: &'a SearchConfig, target: &'a Genotype) -> Self {
        Self {
            config,
            target,
            next_brood: 0,
            evaluated: 0,
            crossed: HashSet::new(),
            best: None,
            truncated: false,
        }
    }

    fn run(mut self, request: &PlanRequest) -> Result<PlanOutcome, PlanError> {
        let mut frontier = Frontier::from_stocks(&request.available_stocks);
        let mut previous: Vec<Litter> = Vec::new();

        for generation in 1..=request.max_generations {
            let mut litters: Vec<Litter> = Vec::new();

            'pairs: for i in 0..frontier.len() {
                for j in i..frontier.len() {
                    let (a, b) = (&frontier.states[i], &frontier.states[j]);
                    if !(frontier.fresh[i] || frontier.fresh[j]) || (i == j && !a.is_original()) {
                        continue;
                    }
                    for (female, male) in orientations(a, b) {
                        if let Some(litter) = self.expand(&female, &male, generation)? {
                            litters.push(litter);
                        }
                        if self.truncated {
                            break 'pairs;
                        }
                    }
                }
            }

            'siblings: for litter in &previous {
                if self.truncated {
                    break;
                }
                let cap = self.config.sibling_candidates;
                let candidates = |role: BreedingRole| -> Vec<&Rc<StockState>> {
                    litter
                        .iter()
                        .filter(|s| s.eligibility.allows(role))
                        .take(cap)
                        .collect()
                };
                let (females, males) = (candidates(BreedingRole::Female), candidates(BreedingRole::Male));
                for female in &females {
                    for male in &males {
                        if Rc::ptr_eq(female, male) {
                            continue;
                        }
                        if let Some(litter) = self.expand(female, male, generation)? {
                            litters.push(litter);
                        }
                        if self.truncated {
                            break 'siblings;
                        }
                    }
                }
            }

            debug!(
                "Generation {}: {} broods, {} frontier states, {} crosses so far",
                generation,
                litters.len(),
                frontier.len(),
                self.evaluated
            );

            if let Some(best) = self.best.take() {
                let plan = BreedingPlan::from_state(&best);
                info!("Found {}", plan.summary());
                if self.truncated {
                    warn!("Node budget ran out in generation {}; a likelier plan may exist", generation);
                }
                return Ok(PlanOutcome::Found(plan));
            }
            if self.truncated {
                warn!(
                    "Search truncated after {} crosses in generation {}",
                    self.evaluated, generation
                );
                return Ok(PlanOutcome::Truncated {
                    generations_explored: generation,
                    crosses_evaluated: self.evaluated,
                });
            }
            if generation == request.max_generations {
                break;
            }

            let children: Vec<Rc<StockState>> = litters.iter().flatten().cloned().collect();
            let admitted = frontier.admit(children, self.config.frontier_limit);

            if admitted == 0 && litters.is_empty() {
                info!("Frontier stopped growing at generation {}", generation);
                return Ok(PlanOutcome::NotFound {
                    reason: NotFoundReason::TargetUnreachable,
                });
            }
            previous = litters;
        }

        info!(
            "No plan to {} within {} generations ({} crosses)",
            self.target, request.max_generations, self.evaluated
        );
        Ok(PlanOutcome::NotFound {
            reason: NotFoundReason::ExceededMaxGenerations,
        })
    }

    /// Cross one role-assigned pair, record a target hit and return the litter
    fn expand(
        &mut self,
        female: &Rc<StockState>,
        male: &Rc<StockState>,
        generation: u32,
    ) -> Result<Option<Litter>, PlanError> {
        let key = (StateKey::of(female), StateKey::of(male));
        if self.crossed.contains(&key) {
            return Ok(None);
        }
        if self.config.budget_exhausted(self.evaluated) {
            self.truncated = true;
            return Ok(None);
        }
        self.crossed.insert(key);
        if self.config.prune_by_probability {
            if let Some(best) = &self.best {
                if joint_probability(female, male) <= best.route_probability {
                    return Ok(None);
                }
            }
        }
        self.evaluated += 1;

        let dist = cross(Parent::female(&female.genotype), Parent::male(&male.genotype)).map_err(|e| {
            error!("Crossing {} x {} broke role assignment: {}", female.name, male.name, e);
            PlanError::from(e)
        })?;
        if dist.is_empty() {
            debug!("Cross {} x {} is fully lethal", female.name, male.name);
            return Ok(None);
        }

        let brood = Rc::new(Brood {
            id: self.next_brood,
            generation,
            female: Rc::clone(female),
            male: Rc::clone(male),
            offspring: dist.unique_offspring(),
        });
        self.next_brood += 1;

        if let Some(idx) = brood.offspring.iter().position(|(g, _)| g == self.target) {
            if let Some(hit) = StockState::offspring_of(&brood, idx) {
                let better = self
                    .best
                    .as_ref()
                    .map_or(true, |b| hit.route_probability > b.route_probability);
                if better {
                    debug!(
                        "Target via {} x {} with probability {:.4}",
                        female.name, male.name, hit.route_probability
                    );
                    self.best = Some(hit);
                }
            }
        }

        let keep = brood.offspring.len().min(self.config.offspring_per_brood);
        let litter = (0..keep)
            .filter_map(|i| StockState::offspring_of(&brood, i))
            .map(Rc::new)
            .collect();
        Ok(Some(litter))
    }
}

/// Every (female, male) assignment the pair allows
fn orientations(a: &Rc<StockState>, b: &Rc<StockState>) -> Vec<(Rc<StockState>, Rc<StockState>)> {
    let mut out = Vec::with_capacity(2);
    if a.eligibility.allows(BreedingRole::Female) {
        out.push((Rc::clone(a), Rc::clone(b)));
    }
    if !Rc::ptr_eq(a, b) && b.eligibility.allows(BreedingRole::Female) {
        out.push((Rc::clone(b), Rc::clone(a)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(s: &str) -> Genotype {
        s.parse().unwrap()
    }

    fn stock(name: &str, genotype: &str) -> Stock {
        Stock::new(name, g(genotype))
    }

    fn balancer_and_marker() -> Vec<Stock> {
        vec![
            stock("bal", "2:CyO/+ 3:+/+ 4:+/+"),
            stock("a", "2:a/+ 3:+/+ 4:+/+"),
        ]
    }

    #[test]
    fn test_wild_type_plan() {
        let request = PlanRequest::new(vec![stock("wt", "2:+/+ 3:+/+ 4:+/+")], Genotype::wild_type(), 1);
        let outcome = plan_to_target(&request).unwrap();
        let plan = outcome.plan().unwrap();
        assert_eq!(plan.generations_used, 1);
        assert_eq!(plan.overall_probability, 1.0);
        assert_eq!(plan.steps.len(), 1);
        assert_eq!(plan.steps[0].parent1.name, "wt");
        assert_eq!(plan.steps[0].parent2.name, "wt");
    }

    #[test]
    fn test_single_generation_plan() {
        let request = PlanRequest::new(balancer_and_marker(), g("2:CyO/a 3:+/+ 4:+/+"), 3);
        let plan = plan_to_target(&request).unwrap().plan().cloned().unwrap();
        assert_eq!(plan.generations_used, 1);
        assert!((plan.overall_probability - 0.25).abs() < 1e-12);
        assert_eq!(plan.steps[0].parent1.name, "bal");
        assert_eq!(plan.steps[0].parent2.name, "a");
    }

    #[test]
    fn test_highest_probability_wins_within_generation() {
        // bal self-cross gives +/+ at 1/3, bal x a gives it at 1/4
        let request = PlanRequest::new(balancer_and_marker(), Genotype::wild_type(), 2);
        let plan = plan_to_target(&request).unwrap().plan().cloned().unwrap();
        assert_eq!(plan.generations_used, 1);
        assert!((plan.overall_probability - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_generation_plan() {
        let request = PlanRequest::new(balancer_and_marker(), g("2:a/a 3:+/+ 4:+/+"), 3);
        let plan = plan_to_target(&request).unwrap().plan().cloned().unwrap();
        assert_eq!(plan.generations_used, 2);
        // CyO/a (1/4) back to the a/+ stock gives a/a at 1/4
        assert!((plan.overall_probability - 0.0625).abs() < 1e-12);
        assert_eq!(plan.steps.len(), 2);
        assert_eq!(plan.steps[1].parent1.genotype, g("2:CyO/a 3:+/+ 4:+/+"));
        assert_eq!(plan.steps[1].parent2.name, "a");
        assert_eq!(plan.steps.last().unwrap().offspring, request.target);
    }

    #[test]
    fn test_sibling_cross() {
        // keep offspring out of the frontier so only sibling crosses can continue
        let config = SearchConfig {
            frontier_limit: 0,
            ..SearchConfig::default()
        };
        let request = PlanRequest::new(balancer_and_marker(), g("2:a/a 3:+/+ 4:+/+"), 2);
        let outcome = BreedingPlanner::new(config).plan(&request).unwrap();
        let plan = outcome.plan().unwrap();
        assert_eq!(plan.generations_used, 2);
        // CyO/a and +/a from one brood, each 1/4, brood counted once, a/a at 1/4
        assert!((plan.overall_probability - 1.0 / 64.0).abs() < 1e-12);
        assert_eq!(plan.steps.len(), 3);
        assert_eq!(plan.cross_count(), 2);
    }

    #[test]
    fn test_sibling_candidates_capped_per_role() {
        // litter order is +/+, +/CyO, +/a, CyO/a: CyO/a is only the third
        // female-eligible sibling and +/a the third male candidate
        let config = SearchConfig {
            frontier_limit: 0,
            sibling_candidates: 3,
            ..SearchConfig::default()
        };
        let request = PlanRequest::new(balancer_and_marker(), g("2:a/a 3:+/+ 4:+/+"), 2);
        let outcome = BreedingPlanner::new(config).plan(&request).unwrap();
        let plan = outcome.plan().expect("sibling cross within the per-role cap");
        assert!((plan.overall_probability - 1.0 / 64.0).abs() < 1e-12);
    }

    #[test]
    fn test_frontier_replaces_with_likelier_state() {
        let state = |name: &str, genotype: &str, p: f64| {
            let mut s = StockState::from_stock(&stock(name, genotype));
            s.generation = 1;
            s.route_probability = p;
            Rc::new(s)
        };
        let mut frontier = Frontier::from_stocks(&balancer_and_marker());
        assert_eq!(frontier.admit(vec![state("x", "2:CyO/a 3:+/+ 4:+/+", 0.25)], 30), 1);
        assert_eq!(frontier.len(), 3);

        // same genotype, written the other way round, at a higher probability
        assert_eq!(frontier.admit(vec![state("y", "2:a/CyO 3:+/+ 4:+/+", 0.5)], 30), 1);
        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.states[2].name, "y");
        assert_eq!(frontier.fresh, vec![false, false, true]);

        // equal or lower probability leaves the held state alone
        assert_eq!(frontier.admit(vec![state("z", "2:CyO/a 3:+/+ 4:+/+", 0.5)], 30), 0);
        assert_eq!(frontier.states[2].name, "y");

        // a laboratory stock is never displaced by a virtual copy
        assert_eq!(frontier.admit(vec![state("w", "2:CyO/+ 3:+/+ 4:+/+", 0.9)], 30), 0);
        assert!(frontier.states[0].is_original());
    }

    #[test]
    fn test_frontier_limit_keeps_likeliest() {
        let state = |genotype: &str, p: f64| {
            let mut s = StockState::from_stock(&stock(genotype, genotype));
            s.route_probability = p;
            Rc::new(s)
        };
        let mut frontier = Frontier::default();
        let children = vec![
            state("2:b/+ 3:+/+ 4:+/+", 0.1),
            state("2:c/+ 3:+/+ 4:+/+", 0.7),
            state("2:d/+ 3:+/+ 4:+/+", 0.4),
        ];
        assert_eq!(frontier.admit(children, 2), 2);
        let names: Vec<&str> = frontier.states.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["2:c/+ 3:+/+ 4:+/+", "2:d/+ 3:+/+ 4:+/+"]);
    }

    #[test]
    fn test_pruning_keeps_the_same_plan() {
        let request = PlanRequest::new(balancer_and_marker(), g("2:a/a 3:+/+ 4:+/+"), 3);
        let pruned = BreedingPlanner::new(SearchConfig::default()).plan(&request).unwrap();
        let full = BreedingPlanner::new(SearchConfig::exhaustive()).plan(&request).unwrap();
        let (pruned, full) = (pruned.plan().unwrap(), full.plan().unwrap());
        assert!((pruned.overall_probability - full.overall_probability).abs() < 1e-12);
        assert_eq!(pruned.generations_used, full.generations_used);
        assert_eq!(pruned.fingerprint(), full.fingerprint());
    }

    #[test]
    fn test_fully_lethal_cross_yields_no_litter() {
        // every female allele shares a lethal marker with every male allele
        let female = Rc::new(StockState::from_stock(&stock("f", "2:CyO,Sp/TM3,Pin 3:+/+ 4:+/+")));
        let male = Rc::new(StockState::from_stock(&stock("m", "2:CyO,TM3/Sp,Pin 3:+/+ 4:+/+")));
        assert!(validate_stock_genotype(&female.genotype).is_ok());
        assert!(validate_stock_genotype(&male.genotype).is_ok());

        let config = SearchConfig::default();
        let target = Genotype::wild_type();
        let mut search = Search::new(&config, &target);
        assert!(search.expand(&female, &male, 1).unwrap().is_none());
        assert_eq!(search.evaluated, 1);
        assert_eq!(search.next_brood, 0);
        assert!(search.best.is_none());
    }

    #[test]
    fn test_budget_spent_after_target_found() {
        // bal self-cross hits +/+ first, then the budget stops bal x a
        let config = SearchConfig {
            node_budget: Some(1),
            ..SearchConfig::default()
        };
        let request = PlanRequest::new(balancer_and_marker(), Genotype::wild_type(), 2);
        let outcome = BreedingPlanner::new(config).plan(&request).unwrap();
        let plan = outcome.plan().expect("target found before the budget ran out");
        assert!((plan.overall_probability - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_repeat_cross_does_not_spend_budget() {
        let config = SearchConfig {
            node_budget: Some(1),
            ..SearchConfig::default()
        };
        let target = g("2:a/a 3:+/+ 4:+/+");
        let bal = Rc::new(StockState::from_stock(&stock("bal", "2:CyO/+ 3:+/+ 4:+/+")));
        let a = Rc::new(StockState::from_stock(&stock("a", "2:a/+ 3:+/+ 4:+/+")));

        let mut search = Search::new(&config, &target);
        assert!(search.expand(&bal, &a, 1).unwrap().is_some());
        assert!(search.expand(&bal, &a, 1).unwrap().is_none());
        assert!(!search.truncated);
        assert!(search.expand(&a, &bal, 1).unwrap().is_none());
        assert!(search.truncated);
    }

    #[test]
    fn test_exceeded_max_generations() {
        let request = PlanRequest::new(balancer_and_marker(), g("2:a/a 3:+/+ 4:+/+"), 1);
        let outcome = plan_to_target(&request).unwrap();
        assert_eq!(
            outcome,
            PlanOutcome::NotFound {
                reason: NotFoundReason::ExceededMaxGenerations
            }
        );
    }

    #[test]
    fn test_missing_allele_is_unreachable() {
        let request = PlanRequest::new(balancer_and_marker(), g("2:b/+ 3:+/+ 4:+/+"), 5);
        assert!(!request.alleles_available());
        let outcome = plan_to_target(&request).unwrap();
        assert_eq!(
            outcome,
            PlanOutcome::NotFound {
                reason: NotFoundReason::TargetUnreachable
            }
        );
    }

    #[test]
    fn test_node_budget_truncates() {
        let config = SearchConfig {
            node_budget: Some(1),
            ..SearchConfig::default()
        };
        let request = PlanRequest::new(balancer_and_marker(), g("2:a/a 3:+/+ 4:+/+"), 3);
        let outcome = BreedingPlanner::new(config).plan(&request).unwrap();
        assert_eq!(
            outcome,
            PlanOutcome::Truncated {
                generations_explored: 1,
                crosses_evaluated: 1
            }
        );
    }

    #[test]
    fn test_request_validation() {
        let target = Genotype::wild_type();
        let bad_bound = PlanRequest::new(balancer_and_marker(), target.clone(), 0);
        assert!(matches!(bad_bound.validate(), Err(PlanError::InvalidGeneration(0))));
        let bad_bound = PlanRequest::new(balancer_and_marker(), target.clone(), 6);
        assert!(matches!(plan_to_target(&bad_bound), Err(PlanError::InvalidGeneration(6))));

        let empty = PlanRequest::new(Vec::new(), target.clone(), 2);
        assert!(matches!(empty.validate(), Err(PlanError::NoStocks)));

        let lethal = PlanRequest::new(vec![stock("dead", "2:CyO/CyO 3:+/+ 4:+/+")], target, 2);
        assert!(matches!(
            lethal.validate(),
            Err(PlanError::InvalidStock { ref stock, .. }) if stock == "dead"
        ));

        let bad_target = PlanRequest::new(balancer_and_marker(), g("2:CyO/CyO 3:+/+ 4:+/+"), 2);
        assert!(matches!(bad_target.validate(), Err(PlanError::InvalidTarget(_))));
    }

    #[test]
    fn test_plans_are_reproducible() {
        let request = PlanRequest::new(balancer_and_marker(), g("2:a/a 3:+/+ 4:+/+"), 3);
        let a = plan_to_target(&request).unwrap().plan().cloned().unwrap();
        let b = plan_to_target(&request).unwrap().plan().cloned().unwrap();
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_orientations_respect_eligibility() {
        let bal = Rc::new(StockState::from_stock(&stock("bal", "2:CyO/+ 3:+/+ 4:+/+")));
        let a = Rc::new(StockState::from_stock(&stock("a", "2:a/+ 3:+/+ 4:+/+")));
        let wt = Rc::new(StockState::from_stock(&stock("wt", "2:+/+ 3:+/+ 4:+/+")));

        let pairs = orientations(&bal, &a);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0.name, "bal");
        assert_eq!(orientations(&bal, &wt).len(), 2);
        assert_eq!(orientations(&bal, &bal).len(), 1);
        assert!(orientations(&a, &a).is_empty());
    }
}
