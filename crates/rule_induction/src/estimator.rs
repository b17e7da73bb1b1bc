use crate::conf::{
    DEFAULT_GROW_RATIO, DEFAULT_MAX_BAD_RULES, LearnerConfig, PREDICTION_COLUMN,
    default_feature_name,
};
use crate::dataframe::RuleDataFrameExt;
use crate::dataset::Dataset;
use crate::learner::{AttemptRecord, LearnOutcome, RuleSetLearner, StopReason};
use crate::rules::{Coverage, RuleSet};
use estimator_api::api::{Estimator, FitError, PredictError};
use polars::prelude::*;
use std::fmt::Write as _;

/// Binary rule-set classifier: an example is positive iff any learned rule
/// matches it.
#[derive(Debug)]
pub struct IrepClassifier {
    pub max_bad_rules: usize,
    pub grow_ratio: f64,
    pub seed: Option<u64>,
    outcome: Option<LearnOutcome>,
    feature_names: Vec<String>,
    label_name: String,
}

impl Default for IrepClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BAD_RULES, DEFAULT_GROW_RATIO, None)
    }
}

impl IrepClassifier {
    pub fn new(max_bad_rules: usize, grow_ratio: f64, seed: Option<u64>) -> Self {
        IrepClassifier {
            max_bad_rules,
            grow_ratio,
            seed,
            outcome: None,
            feature_names: Vec::new(),
            label_name: PREDICTION_COLUMN.to_string(),
        }
    }

    fn config(&self) -> LearnerConfig {
        LearnerConfig::new(self.max_bad_rules, self.grow_ratio, self.seed)
    }

    /// Fit on a raw row-major table. Features are named `Feature_<i>`.
    pub fn fit_matrix(
        &mut self,
        rows: &[Vec<f64>],
        labels: &[bool],
    ) -> Result<&mut Self, FitError> {
        let config = self.config();
        config.validate()?;
        let dataset = Dataset::from_rows(rows, labels)?;
        let names = (0..dataset.n_features()).map(default_feature_name).collect();
        self.fit_dataset(&config, &dataset, names, PREDICTION_COLUMN.to_string());
        Ok(self)
    }

    fn fit_dataset(
        &mut self,
        config: &LearnerConfig,
        dataset: &Dataset,
        feature_names: Vec<String>,
        label_name: String,
    ) {
        let mut learner = RuleSetLearner::new(config);
        self.outcome = Some(learner.learn(dataset));
        self.feature_names = feature_names;
        self.label_name = label_name;
    }

    pub fn predict_matrix(&self, rows: &[Vec<f64>]) -> Result<Vec<bool>, PredictError> {
        let rules = self.rules().ok_or(PredictError::NotFitted)?;
        if let Some(i) = rows.iter().position(|r| r.len() != self.n_features()) {
            return Err(PredictError::InvalidInput(format!(
                "row {} has {} features, model was fitted on {}",
                i,
                rows[i].len(),
                self.n_features()
            )));
        }
        Ok(rules.predict_rows(rows))
    }

    pub fn is_fitted(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn rules(&self) -> Option<&RuleSet> {
        self.outcome.as_ref().map(|o| &o.rules)
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.outcome.as_ref().map(|o| o.stop_reason)
    }

    /// Every attempt made by the last fit, accepted or not.
    pub fn history(&self) -> &[AttemptRecord] {
        self.outcome
            .as_ref()
            .map(|o| o.history.as_slice())
            .unwrap_or(&[])
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// Human-readable listing of the learned rules.
    pub fn describe(&self) -> String {
        let rules = match self.rules() {
            Some(rules) => rules,
            None => return "Model is not fitted".to_string(),
        };
        if rules.is_empty() {
            return "No rules learned.".to_string();
        }

        let mut out = String::new();
        let _ = writeln!(out, "Learned {} rule(s):", rules.len());
        for (i, rule) in rules.iter().enumerate() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Rule {}:", i + 1);
            let _ = writeln!(out, "  IF {}", rule.describe(&self.feature_names));
            let _ = writeln!(out, "  THEN {} = true", self.label_name);
        }
        out
    }
}

impl Estimator for IrepClassifier {
    fn _fit_impl(&mut self, x: &DataFrame, y: &DataFrame) -> Result<(), FitError> {
        let config = self.config();
        config.validate()?;

        let values = x
            .to_row_major_f64()
            .map_err(|e| FitError::InvalidInput(e.to_string()))?;
        let (label_name, labels) = y
            .to_boolean_labels()
            .map_err(|e| FitError::InvalidInput(e.to_string()))?;
        if labels.len() != x.height() {
            return Err(FitError::InvalidInput(format!(
                "labels length ({}) does not match number of rows ({})",
                labels.len(),
                x.height()
            )));
        }

        let dataset = Dataset::new(values, labels, x.width())?;
        self.fit_dataset(&config, &dataset, x.column_names_vec(), label_name);
        Ok(())
    }

    fn _predict_impl(&self, x: &DataFrame) -> Result<DataFrame, PredictError> {
        let rules = self.rules().ok_or(PredictError::NotFitted)?;
        if x.width() != self.n_features() {
            return Err(PredictError::InvalidInput(format!(
                "expected {} feature columns, got {}",
                self.n_features(),
                x.width()
            )));
        }

        let values = x
            .to_row_major_f64()
            .map_err(|e| PredictError::InvalidInput(e.to_string()))?;
        // A zero-width frame still has rows; nothing can match them.
        let predictions: Vec<bool> = if x.width() == 0 {
            vec![false; x.height()]
        } else {
            values.chunks(x.width()).map(|row| rules.matches(row)).collect()
        };

        let column = Series::new(PlSmallStr::from_str(&self.label_name), predictions);
        Ok(DataFrame::new(vec![column.into()])?)
    }
}
