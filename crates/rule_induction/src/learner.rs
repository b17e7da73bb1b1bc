use crate::conf::LearnerConfig;
use crate::dataset::Dataset;
use crate::grow::grow_rule;
use crate::prune::prune_rule;
use crate::rules::{Coverage, Rule, RuleSet};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every training example is covered by an accepted rule.
    PoolExhausted,
    /// The split left the grow or the prune set empty.
    EmptyPartition,
    /// This many consecutive candidate rules were rejected.
    TooManyBadRules(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearnerState {
    Learning,
    Done(StopReason),
}

/// One split/grow/prune/judge round of the outer loop.
#[derive(Debug, Clone)]
pub struct AttemptRecord {
    pub pool_size: usize,
    pub grow_size: usize,
    pub prune_size: usize,
    /// Literal count before pruning.
    pub grown_length: usize,
    pub rule: Rule,
    /// Coverage of the pruned rule over the whole pool.
    pub positives: usize,
    pub negatives: usize,
    pub accepted: bool,
}

#[derive(Debug, Clone)]
pub struct LearnOutcome {
    pub rules: RuleSet,
    pub stop_reason: StopReason,
    pub history: Vec<AttemptRecord>,
}

/// Random grow/prune partition of `indices`.
///
/// The first `round(n * grow_ratio)` shuffled indices form the grow set.
pub fn split_indices<R: Rng + ?Sized>(
    indices: &[u32],
    grow_ratio: f64,
    rng: &mut R,
) -> (Vec<u32>, Vec<u32>) {
    let mut shuffled = indices.to_vec();
    shuffled.shuffle(rng);
    let split_point = ((shuffled.len() as f64) * grow_ratio).round() as usize;
    let prune = shuffled.split_off(split_point.min(shuffled.len()));
    (shuffled, prune)
}

/// Accept a rule iff it covers strictly more positives than negatives of the
/// pool. The empty rule is always rejected.
pub fn keep(rule: &Rule, dataset: &Dataset, pool: &[u32]) -> bool {
    if rule.is_empty() {
        return false;
    }
    let (p, n) = rule.count(dataset, pool);
    p > n
}

/// Separate-and-conquer loop over a shrinking training pool.
pub struct RuleSetLearner {
    max_bad_rules: usize,
    grow_ratio: f64,
    rng: StdRng,
    state: LearnerState,
    pool: Vec<u32>,
    bad_rules: usize,
    rules: RuleSet,
    history: Vec<AttemptRecord>,
}

impl RuleSetLearner {
    pub fn new(config: &LearnerConfig) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(config.seed))
    }

    pub fn with_rng(config: &LearnerConfig, rng: StdRng) -> Self {
        RuleSetLearner {
            max_bad_rules: config.max_bad_rules,
            grow_ratio: config.grow_ratio,
            rng,
            state: LearnerState::Learning,
            pool: Vec::new(),
            bad_rules: 0,
            rules: RuleSet::new(),
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> LearnerState {
        self.state
    }

    /// Learn a rule set on the whole dataset. Consumes the learner's state;
    /// the random generator keeps advancing across calls.
    pub fn learn(&mut self, dataset: &Dataset) -> LearnOutcome {
        self.state = LearnerState::Learning;
        self.pool = dataset.all_indices();
        self.bad_rules = 0;
        self.rules = RuleSet::new();
        self.history = Vec::new();

        let stop_reason = loop {
            match self.step(dataset) {
                LearnerState::Learning => continue,
                LearnerState::Done(reason) => break reason,
            }
        };

        info!(
            ?stop_reason,
            rules = self.rules.len(),
            attempts = self.history.len(),
            uncovered = self.pool.len(),
            "rule set learning finished"
        );

        LearnOutcome {
            rules: std::mem::take(&mut self.rules),
            stop_reason,
            history: std::mem::take(&mut self.history),
        }
    }

    /// Run one attempt and return the resulting state.
    pub fn step(&mut self, dataset: &Dataset) -> LearnerState {
        if let LearnerState::Done(_) = self.state {
            return self.state;
        }
        self.state = self.attempt(dataset);
        self.state
    }

    fn attempt(&mut self, dataset: &Dataset) -> LearnerState {
        if self.pool.is_empty() {
            return LearnerState::Done(StopReason::PoolExhausted);
        }

        let (grow, prune) = split_indices(&self.pool, self.grow_ratio, &mut self.rng);
        if grow.is_empty() || prune.is_empty() {
            debug!(
                pool = self.pool.len(),
                grow = grow.len(),
                prune = prune.len(),
                "empty grow or prune set"
            );
            return LearnerState::Done(StopReason::EmptyPartition);
        }

        let grown = grow_rule(dataset, &grow);
        let rule = prune_rule(&grown, dataset, &prune);
        let (positives, negatives) = rule.count(dataset, &self.pool);
        let accepted = keep(&rule, dataset, &self.pool);

        debug!(
            pool = self.pool.len(),
            grown = grown.len(),
            pruned = rule.len(),
            positives,
            negatives,
            accepted,
            "rule attempt"
        );

        self.history.push(AttemptRecord {
            pool_size: self.pool.len(),
            grow_size: grow.len(),
            prune_size: prune.len(),
            grown_length: grown.len(),
            rule: rule.clone(),
            positives,
            negatives,
            accepted,
        });

        if accepted {
            self.pool = rule.uncovered(dataset, &self.pool);
            self.rules.push(rule);
            self.bad_rules = 0;
            LearnerState::Learning
        } else {
            self.bad_rules += 1;
            if self.bad_rules >= self.max_bad_rules {
                LearnerState::Done(StopReason::TooManyBadRules(self.bad_rules))
            } else {
                LearnerState::Learning
            }
        }
    }
}
