use estimator_api::api::FitError;

/// Rows are addressed by `u32` indices.
fn check_row_count(n_rows: usize) -> Result<(), FitError> {
    if u32::try_from(n_rows).is_err() {
        return Err(FitError::InvalidInput(format!(
            "{} rows exceed the {} rows addressable by index lists",
            n_rows,
            u32::MAX
        )));
    }
    Ok(())
}

/// Immutable arena of labelled examples.
///
/// Features are stored row-major; every subset used while learning is an
/// index list (`Vec<u32>`) into this arena, so narrowing never copies rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    values: Vec<f64>,
    labels: Vec<bool>,
    n_features: usize,
}

impl Dataset {
    /// Build from a row-major value buffer of `labels.len() * n_features` entries.
    pub fn new(values: Vec<f64>, labels: Vec<bool>, n_features: usize) -> Result<Self, FitError> {
        if values.len() != labels.len() * n_features {
            return Err(FitError::InvalidInput(format!(
                "expected {} feature values for {} rows x {} features, got {}",
                labels.len() * n_features,
                labels.len(),
                n_features,
                values.len()
            )));
        }
        check_row_count(labels.len())?;
        if n_features == 0 && !labels.is_empty() {
            return Err(FitError::InvalidInput(
                "feature matrix has no columns".to_string(),
            ));
        }
        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            return Err(FitError::InvalidInput(format!(
                "non-finite feature value {} at row {}, feature {}",
                values[pos],
                pos / n_features,
                pos % n_features
            )));
        }
        Ok(Self {
            values,
            labels,
            n_features,
        })
    }

    pub fn from_rows(rows: &[Vec<f64>], labels: &[bool]) -> Result<Self, FitError> {
        if rows.len() != labels.len() {
            return Err(FitError::InvalidInput(format!(
                "labels length ({}) does not match number of rows ({})",
                labels.len(),
                rows.len()
            )));
        }
        let n_features = rows.first().map(|r| r.len()).unwrap_or(0);
        if let Some(i) = rows.iter().position(|r| r.len() != n_features) {
            return Err(FitError::InvalidInput(format!(
                "row {} has {} features, expected {}",
                i,
                rows[i].len(),
                n_features
            )));
        }
        let values = rows.iter().flatten().copied().collect();
        Self::new(values, labels.to_vec(), n_features)
    }

    pub fn n_rows(&self) -> usize {
        self.labels.len()
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn row(&self, index: u32) -> &[f64] {
        let start = index as usize * self.n_features;
        &self.values[start..start + self.n_features]
    }

    pub fn value(&self, index: u32, feature: usize) -> f64 {
        self.values[index as usize * self.n_features + feature]
    }

    pub fn label(&self, index: u32) -> bool {
        self.labels[index as usize]
    }

    pub fn labels(&self) -> &[bool] {
        &self.labels
    }

    pub fn all_indices(&self) -> Vec<u32> {
        (0u32..self.n_rows() as u32).collect()
    }

    /// Positive and negative counts over `indices`.
    pub fn count_labels(&self, indices: &[u32]) -> (usize, usize) {
        let p = indices.iter().filter(|&&i| self.label(i)).count();
        (p, indices.len() - p)
    }

    /// Positive and negative counts over the entries of `indices` selected by `mask`.
    pub fn count_labels_masked(&self, indices: &[u32], mask: &[bool]) -> (usize, usize) {
        indices
            .iter()
            .zip(mask)
            .filter(|(_, &covered)| covered)
            .fold((0, 0), |(p, n), (&i, _)| {
                if self.label(i) { (p + 1, n) } else { (p, n + 1) }
            })
    }
}
