use crate::dataset::Dataset;
use crate::rules::{Literal, Operator};
use core::fmt;
use itertools::Itertools;
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum SplitResult {
    /// Best literal found and its FOIL gain (always finite).
    Literal(Literal, f64),
    InvalidSplit(String),
}

impl SplitResult {
    pub fn gain(&self) -> f64 {
        match self {
            SplitResult::Literal(_, gain) => *gain,
            SplitResult::InvalidSplit(_) => f64::NEG_INFINITY,
        }
    }

    pub fn literal(&self) -> Option<&Literal> {
        match self {
            SplitResult::Literal(literal, _) => Some(literal),
            SplitResult::InvalidSplit(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, SplitResult::Literal(..))
    }
}

impl fmt::Display for SplitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitResult::Literal(literal, gain) => {
                write!(f, "Literal({}, gain: {:.6})", literal, gain)
            }
            SplitResult::InvalidSplit(msg) => write!(f, "InvalidSplit(msg: {})", msg),
        }
    }
}

/// FOIL information gain of a literal covering `p`/`n` examples, relative
/// to a baseline covering `p0`/`n0`.
///
/// Returns negative infinity when the literal covers no positive example or
/// when either coverage is empty.
pub fn foil_gain(p: usize, n: usize, p0: usize, n0: usize) -> f64 {
    if p == 0 || p + n == 0 || p0 + n0 == 0 {
        return f64::NEG_INFINITY;
    }
    let info_new = (p as f64 / (p + n) as f64).log2();
    let info_old = (p0 as f64 / (p0 + n0) as f64).log2();
    p as f64 * (info_new - info_old)
}

/// Best single-feature literal over `indices`.
///
/// Thresholds are midpoints of distinct adjacent sorted values; for each one
/// `<` is scored before `>`, and a candidate only replaces the current best
/// on a strictly greater gain. Coverage counts come from one sweep over the
/// sorted values.
pub fn search_split_feature(dataset: &Dataset, indices: &[u32], feature: usize) -> SplitResult {
    if indices.is_empty() {
        return SplitResult::InvalidSplit("empty example set".to_string());
    }
    let (p_total, n_total) = dataset.count_labels(indices);
    if p_total == 0 {
        return SplitResult::InvalidSplit(format!(
            "no positive examples (feature {})",
            feature
        ));
    }

    let sorted: Vec<(f64, bool)> = indices
        .iter()
        .map(|&i| (dataset.value(i, feature), dataset.label(i)))
        .sorted_by(|a, b| a.0.total_cmp(&b.0))
        .collect();

    let mut best: Option<(Literal, f64)> = None;
    let (mut p_below, mut n_below) = (0usize, 0usize);
    for ((low, is_positive), (high, _)) in sorted.iter().copied().tuple_windows() {
        if is_positive {
            p_below += 1;
        } else {
            n_below += 1;
        }
        if low == high {
            continue;
        }
        // Halved separately: `low + high` overflows near f64::MAX.
        let threshold = low / 2.0 + high / 2.0;
        // Adjacent floats can round the midpoint onto an observed value.
        if !(low < threshold && threshold < high) {
            continue;
        }

        let candidates = [
            (Operator::LessThan, p_below, n_below),
            (Operator::GreaterThan, p_total - p_below, n_total - n_below),
        ];
        for (operator, p, n) in candidates {
            let gain = foil_gain(p, n, p_total, n_total);
            let best_gain = best.map_or(f64::NEG_INFINITY, |(_, g)| g);
            if gain > best_gain {
                best = Some((Literal::new(feature, operator, threshold), gain));
            }
        }
    }

    match best {
        Some((literal, gain)) => SplitResult::Literal(literal, gain),
        None => SplitResult::InvalidSplit(format!(
            "no threshold with finite gain (feature {})",
            feature
        )),
    }
}

/// Best literal across all features.
///
/// Features are searched in parallel; the reduction keeps feature order, so
/// on equal gains the lowest feature index wins exactly as a sequential scan
/// would.
pub fn find_best_literal(dataset: &Dataset, indices: &[u32]) -> SplitResult {
    (0..dataset.n_features())
        .into_par_iter()
        .map(|feature| search_split_feature(dataset, indices, feature))
        .reduce_with(|best, candidate| {
            if candidate.gain() > best.gain() {
                candidate
            } else {
                best
            }
        })
        .unwrap_or_else(|| SplitResult::InvalidSplit("dataset has no features".into()))
}
