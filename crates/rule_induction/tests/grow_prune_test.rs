//! Integration tests for rule growing and pruning.

use approx::assert_relative_eq;
use rule_induction::dataset::Dataset;
use rule_induction::grow::{covers_no_negatives, grow_rule};
use rule_induction::prune::{precision, prune_rule};
use rule_induction::rules::{Coverage, Literal, Rule};

fn one_feature(values: &[f64], labels: &[bool]) -> Dataset {
    let rows: Vec<Vec<f64>> = values.iter().map(|&v| vec![v]).collect();
    Dataset::from_rows(&rows, labels).unwrap()
}

/// Positives sit in the middle of the range, so one threshold is not enough.
fn interval_dataset() -> Dataset {
    one_feature(
        &[1.0, 2.0, 3.0, 4.0, 5.0],
        &[false, true, true, true, false],
    )
}

// ---------------------------
// Growing
// ---------------------------

#[test]
fn grow_single_threshold() {
    let ds = one_feature(&[1.0, 3.0, 6.0, 8.0, 10.0], &[false, false, true, true, true]);
    let rule = grow_rule(&ds, &ds.all_indices());

    assert_eq!(rule.literals(), &[Literal::greater_than(0, 4.5)]);
}

#[test]
fn grow_narrows_until_no_negative_is_covered() {
    let ds = interval_dataset();
    let rule = grow_rule(&ds, &ds.all_indices());

    // `> 1.5` ties with `< 4.5` on the first round and is scanned first
    assert_eq!(
        rule.literals(),
        &[Literal::greater_than(0, 1.5), Literal::less_than(0, 4.5)]
    );
    assert!(covers_no_negatives(&rule, &ds, &ds.all_indices()));
    assert_eq!(rule.count(&ds, &ds.all_indices()), (3, 0));
}

#[test]
fn grow_without_negatives_returns_empty_rule() {
    let ds = one_feature(&[1.0, 2.0, 3.0], &[true, true, true]);
    assert!(grow_rule(&ds, &ds.all_indices()).is_empty());
}

#[test]
fn grow_without_positives_returns_empty_rule() {
    let ds = one_feature(&[1.0, 2.0, 3.0], &[false, false, false]);
    assert!(grow_rule(&ds, &ds.all_indices()).is_empty());
}

#[test]
fn grow_on_empty_set_returns_empty_rule() {
    let ds = one_feature(&[1.0, 2.0], &[true, false]);
    assert!(grow_rule(&ds, &[]).is_empty());
}

#[test]
fn grow_stops_when_remaining_examples_cannot_be_separated() {
    // After `> 2.5` the two remaining examples share the value 5.0
    let ds = one_feature(&[0.0, 5.0, 5.0], &[false, true, false]);
    let rule = grow_rule(&ds, &ds.all_indices());

    assert_eq!(rule.literals(), &[Literal::greater_than(0, 2.5)]);
    assert!(!covers_no_negatives(&rule, &ds, &ds.all_indices()));
}

#[test]
fn grow_uses_only_the_grow_indices() {
    let ds = interval_dataset();
    // Without example 4 (value 5.0, negative) one literal suffices
    let rule = grow_rule(&ds, &[0, 1, 2, 3]);
    assert_eq!(rule.literals(), &[Literal::greater_than(0, 1.5)]);
}

#[test]
fn covers_no_negatives_for_empty_rule_looks_at_the_set() {
    let ds = one_feature(&[1.0, 2.0], &[true, false]);
    let empty = Rule::new();

    assert!(covers_no_negatives(&empty, &ds, &[0]));
    assert!(!covers_no_negatives(&empty, &ds, &[0, 1]));
    assert!(covers_no_negatives(&empty, &ds, &[]));
}

// ---------------------------
// Precision
// ---------------------------

#[test]
fn precision_of_rules() {
    let ds = interval_dataset();
    let all = ds.all_indices();

    assert_eq!(precision(&Rule::new(), &ds, &all), 0.0);

    let covers_nothing = Rule::from_literals(vec![Literal::greater_than(0, 100.0)]);
    assert_eq!(precision(&covers_nothing, &ds, &all), 0.0);

    let loose = Rule::from_literals(vec![Literal::greater_than(0, 1.5)]);
    assert_relative_eq!(precision(&loose, &ds, &all), 0.75);
}

// ---------------------------
// Pruning
// ---------------------------

fn three_literal_rule() -> Rule {
    Rule::from_literals(vec![
        Literal::greater_than(0, 1.5),
        Literal::less_than(0, 4.5),
        Literal::less_than(0, 2.5),
    ])
}

#[test]
fn prune_empty_rule_is_unchanged() {
    let ds = interval_dataset();
    assert!(prune_rule(&Rule::new(), &ds, &ds.all_indices()).is_empty());
}

#[test]
fn prune_keeps_the_most_precise_prefix() {
    let ds = interval_dataset();
    // prefix 1: 3/4, prefix 2: 3/3, prefix 3: 1/1 -> shorter of the two perfect ones
    let pruned = prune_rule(&three_literal_rule(), &ds, &ds.all_indices());
    assert_eq!(pruned, three_literal_rule().prefix(2));
}

#[test]
fn prune_prefers_shorter_prefix_on_ties() {
    let ds = interval_dataset();
    // Only examples 1 and 2 (both positive): every prefix has precision 1
    let pruned = prune_rule(&three_literal_rule(), &ds, &[1, 2]);
    assert_eq!(pruned.len(), 1);
}

#[test]
fn prune_keeps_full_rule_when_it_is_strictly_best() {
    let ds = interval_dataset();
    let rule = three_literal_rule().prefix(2);
    // On the full set prefix 1 is 3/4, full rule is 3/3
    assert_eq!(prune_rule(&rule, &ds, &ds.all_indices()), rule);
}

#[test]
fn prune_on_empty_prune_set_returns_single_literal() {
    let ds = interval_dataset();
    let pruned = prune_rule(&three_literal_rule(), &ds, &[]);
    assert_eq!(pruned.len(), 1);
}
