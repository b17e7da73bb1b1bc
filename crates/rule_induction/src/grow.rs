use crate::dataset::Dataset;
use crate::rules::{Coverage, Rule};
use crate::split::{SplitResult, find_best_literal};
use tracing::trace;

/// Greedily build a conjunction on the grow set.
///
/// Each round appends the literal with the highest FOIL gain and narrows the
/// working set to the examples that literal matches. Growing stops once the
/// rule covers no negative example of the working set, or when no feature
/// yields a literal with finite gain.
pub fn grow_rule(dataset: &Dataset, grow_indices: &[u32]) -> Rule {
    let mut rule = Rule::new();
    let mut working: Vec<u32> = grow_indices.to_vec();

    while !covers_no_negatives(&rule, dataset, &working) {
        let literal = match find_best_literal(dataset, &working) {
            SplitResult::Literal(literal, gain) => {
                trace!(%literal, gain, working = working.len(), "literal appended");
                literal
            }
            SplitResult::InvalidSplit(reason) => {
                trace!(%reason, length = rule.len(), "growth stopped without a usable literal");
                break;
            }
        };
        // Midpoint thresholds exclude at least one example, so this shrinks.
        working = literal.covered(dataset, &working);
        rule.push(literal);
    }
    rule
}

/// True when `rule` makes no error on a negative example of `indices`.
///
/// The empty rule is judged by the set itself: it passes only when no
/// negatives remain.
pub fn covers_no_negatives(rule: &Rule, dataset: &Dataset, indices: &[u32]) -> bool {
    if indices.is_empty() {
        return true;
    }
    let (_, negatives) = if rule.is_empty() {
        dataset.count_labels(indices)
    } else {
        rule.count(dataset, indices)
    };
    negatives == 0
}
