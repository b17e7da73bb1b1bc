use crate::conf::default_feature_name;
use crate::dataset::Dataset;
use core::fmt;

/// Anything that can be tested against a single example.
///
/// Implementors only provide `matches`; the vectorised forms over an index
/// list of a [`Dataset`] come for free.
pub trait Coverage {
    fn matches(&self, example: &[f64]) -> bool;

    /// Mask aligned with `indices`.
    fn evaluate(&self, dataset: &Dataset, indices: &[u32]) -> Vec<bool> {
        indices
            .iter()
            .map(|&i| self.matches(dataset.row(i)))
            .collect()
    }

    /// The subset of `indices` this matches, order preserved.
    fn covered(&self, dataset: &Dataset, indices: &[u32]) -> Vec<u32> {
        indices
            .iter()
            .copied()
            .filter(|&i| self.matches(dataset.row(i)))
            .collect()
    }

    /// The subset of `indices` this does not match, order preserved.
    fn uncovered(&self, dataset: &Dataset, indices: &[u32]) -> Vec<u32> {
        indices
            .iter()
            .copied()
            .filter(|&i| !self.matches(dataset.row(i)))
            .collect()
    }

    /// Positive and negative examples matched among `indices`.
    fn count(&self, dataset: &Dataset, indices: &[u32]) -> (usize, usize) {
        let mask = self.evaluate(dataset, indices);
        dataset.count_labels_masked(indices, &mask)
    }

    fn predict_rows(&self, rows: &[Vec<f64>]) -> Vec<bool> {
        rows.iter().map(|r| self.matches(r)).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    LessThan,
    GreaterThan,
}

impl Operator {
    pub fn apply(self, value: f64, threshold: f64) -> bool {
        match self {
            Operator::LessThan => value < threshold,
            Operator::GreaterThan => value > threshold,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::LessThan => "<",
            Operator::GreaterThan => ">",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Atomic threshold test `feature <op> threshold`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Literal {
    pub feature: usize,
    pub operator: Operator,
    pub threshold: f64,
}

impl Literal {
    pub fn new(feature: usize, operator: Operator, threshold: f64) -> Self {
        Self {
            feature,
            operator,
            threshold,
        }
    }

    pub fn less_than(feature: usize, threshold: f64) -> Self {
        Self::new(feature, Operator::LessThan, threshold)
    }

    pub fn greater_than(feature: usize, threshold: f64) -> Self {
        Self::new(feature, Operator::GreaterThan, threshold)
    }

    /// Render with a column name, falling back to `Feature_<i>`.
    pub fn describe(&self, feature_names: &[String]) -> String {
        let name = feature_names
            .get(self.feature)
            .cloned()
            .unwrap_or_else(|| default_feature_name(self.feature));
        format!("{} {} {:.4}", name, self.operator, self.threshold)
    }
}

impl Coverage for Literal {
    fn matches(&self, example: &[f64]) -> bool {
        self.operator.apply(example[self.feature], self.threshold)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(&[]))
    }
}

/// Conjunction of literals. The empty rule matches nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rule {
    literals: Vec<Literal>,
}

impl Rule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_literals(literals: Vec<Literal>) -> Self {
        Self { literals }
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn push(&mut self, literal: Literal) {
        self.literals.push(literal);
    }

    /// The first `len` literals as a new rule.
    pub fn prefix(&self, len: usize) -> Rule {
        Rule::from_literals(self.literals[..len.min(self.len())].to_vec())
    }

    pub fn describe(&self, feature_names: &[String]) -> String {
        if self.is_empty() {
            return "(empty rule)".to_string();
        }
        self.literals
            .iter()
            .map(|l| l.describe(feature_names))
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}

impl Coverage for Rule {
    fn matches(&self, example: &[f64]) -> bool {
        !self.literals.is_empty() && self.literals.iter().all(|l| l.matches(example))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(&[]))
    }
}

/// Disjunction of rules; the learned model.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}

impl Coverage for RuleSet {
    fn matches(&self, example: &[f64]) -> bool {
        self.rules.iter().any(|r| r.matches(example))
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rules: Vec<String> = self.rules.iter().map(|r| format!("({})", r)).collect();
        write!(f, "RuleSet[{}]", rules.join(" OR "))
    }
}
