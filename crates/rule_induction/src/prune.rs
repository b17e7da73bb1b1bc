use crate::dataset::Dataset;
use crate::rules::{Coverage, Rule};

/// Share of positives among the examples of `indices` the rule covers,
/// `0.0` when it covers none.
pub fn precision(rule: &Rule, dataset: &Dataset, indices: &[u32]) -> f64 {
    if rule.is_empty() {
        return 0.0;
    }
    let (p, n) = rule.count(dataset, indices);
    if p + n == 0 {
        0.0
    } else {
        p as f64 / (p + n) as f64
    }
}

/// Keep the non-empty prefix of `rule` with the highest precision on the
/// prune set, preferring the shorter prefix on ties.
pub fn prune_rule(rule: &Rule, dataset: &Dataset, prune_indices: &[u32]) -> Rule {
    if rule.is_empty() {
        return rule.clone();
    }

    let mut best_len = rule.len();
    let mut best_precision = precision(rule, dataset, prune_indices);
    for len in (1..rule.len()).rev() {
        let candidate = precision(&rule.prefix(len), dataset, prune_indices);
        if candidate >= best_precision {
            best_precision = candidate;
            best_len = len;
        }
    }
    rule.prefix(best_len)
}
