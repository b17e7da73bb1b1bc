//! Scoring helpers for boolean predictions.
//!
//! All scores return `None` when the two slices differ in length or when the
//! score's denominator is zero.

use rand::Rng;
use rand::seq::SliceRandom;

fn confusion(y_true: &[bool], y_pred: &[bool]) -> Option<(usize, usize, usize, usize)> {
    if y_true.len() != y_pred.len() {
        return None;
    }
    // (tp, fp, fn, tn)
    Some(
        y_true
            .iter()
            .zip(y_pred)
            .fold((0, 0, 0, 0), |(tp, fp, fnn, tn), (&t, &p)| match (t, p) {
                (true, true) => (tp + 1, fp, fnn, tn),
                (false, true) => (tp, fp + 1, fnn, tn),
                (true, false) => (tp, fp, fnn + 1, tn),
                (false, false) => (tp, fp, fnn, tn + 1),
            }),
    )
}

pub fn accuracy(y_true: &[bool], y_pred: &[bool]) -> Option<f64> {
    let (tp, fp, fnn, tn) = confusion(y_true, y_pred)?;
    let total = tp + fp + fnn + tn;
    (total > 0).then(|| (tp + tn) as f64 / total as f64)
}

pub fn precision(y_true: &[bool], y_pred: &[bool]) -> Option<f64> {
    let (tp, fp, _, _) = confusion(y_true, y_pred)?;
    (tp + fp > 0).then(|| tp as f64 / (tp + fp) as f64)
}

pub fn recall(y_true: &[bool], y_pred: &[bool]) -> Option<f64> {
    let (tp, _, fnn, _) = confusion(y_true, y_pred)?;
    (tp + fnn > 0).then(|| tp as f64 / (tp + fnn) as f64)
}

/// Random train/test partition of `0..n`.
///
/// The test part receives `floor(n * test_fraction)` indices.
pub fn train_test_split<R: Rng + ?Sized>(
    n: usize,
    test_fraction: f64,
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);
    let test_size = ((n as f64) * test_fraction.clamp(0.0, 1.0)).floor() as usize;
    let train = indices.split_off(test_size);
    (train, indices)
}

pub fn take_rows<T: Clone>(items: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| items[i].clone()).collect()
}
