use polars::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FitError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("Model is not fitted")]
    NotFitted,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Fit/predict contract over polars frames.
///
/// `x` holds one column per feature; `y` holds the label column(s).
/// Implementors override the `_impl` hooks, callers use `fit`/`predict`.
pub trait Estimator: Sized {
    fn fit(&mut self, x: &DataFrame, y: &DataFrame) -> Result<&mut Self, FitError> {
        self._fit_impl(x, y)?;
        Ok(self)
    }

    fn _fit_impl(&mut self, _x: &DataFrame, _y: &DataFrame) -> Result<(), FitError> {
        // Default implementation can be overridden by specific estimators
        Err(FitError::InvalidInput(
            "Default fit implementation not provided".to_string(),
        ))
    }

    fn predict(&self, x: &DataFrame) -> Result<DataFrame, PredictError> {
        self._predict_impl(x)
    }

    fn _predict_impl(&self, _x: &DataFrame) -> Result<DataFrame, PredictError> {
        Err(PredictError::NotFitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unimplemented;
    impl Estimator for Unimplemented {}

    #[test]
    fn error_display() {
        let err = FitError::InvalidInput("labels length 3 != rows 4".to_string());
        assert_eq!(err.to_string(), "Invalid input: labels length 3 != rows 4");

        assert_eq!(PredictError::NotFitted.to_string(), "Model is not fitted");

        let err = PredictError::InvalidInput("expected 2 columns".to_string());
        assert!(err.to_string().contains("expected 2 columns"));
    }

    #[test]
    fn polars_errors_convert() {
        let err: FitError = PolarsError::ComputeError("boom".into()).into();
        assert!(matches!(err, FitError::Polars(_)));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn default_hooks_refuse() {
        let df = DataFrame::empty();
        let mut est = Unimplemented;
        assert!(matches!(est.fit(&df, &df), Err(FitError::InvalidInput(_))));
        assert!(matches!(est.predict(&df), Err(PredictError::NotFitted)));
    }
}
