use estimator_api::api::FitError;

pub const DEFAULT_MAX_BAD_RULES: usize = 5;
pub const DEFAULT_GROW_RATIO: f64 = 2.0 / 3.0;
pub const DEFAULT_SEED: u64 = 42;
pub const FEATURE_NAME_PREFIX: &str = "Feature";
pub const PREDICTION_COLUMN: &str = "prediction";

/// Parameters of one rule-set learning run.
#[derive(PartialEq, Debug, Clone)]
pub struct LearnerConfig {
    /// Consecutive rejected rules after which learning stops.
    pub max_bad_rules: usize,
    /// Fraction of every split allocated to the grow set.
    pub grow_ratio: f64,
    pub seed: u64,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            max_bad_rules: DEFAULT_MAX_BAD_RULES,
            grow_ratio: DEFAULT_GROW_RATIO,
            seed: DEFAULT_SEED,
        }
    }
}

impl LearnerConfig {
    pub fn new(max_bad_rules: usize, grow_ratio: f64, seed: Option<u64>) -> Self {
        Self {
            max_bad_rules,
            grow_ratio,
            seed: seed.unwrap_or(DEFAULT_SEED),
        }
    }

    pub fn validate(&self) -> Result<(), FitError> {
        if self.max_bad_rules == 0 {
            return Err(FitError::InvalidInput(
                "max_bad_rules must be at least 1".to_string(),
            ));
        }
        if !(self.grow_ratio > 0.0 && self.grow_ratio < 1.0) {
            return Err(FitError::InvalidInput(format!(
                "grow_ratio must lie in (0, 1), got {}",
                self.grow_ratio
            )));
        }
        Ok(())
    }
}

pub fn default_feature_name(index: usize) -> String {
    format!("{}_{}", FEATURE_NAME_PREFIX, index)
}
