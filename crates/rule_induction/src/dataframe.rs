use polars::error::ErrString;
use polars::prelude::*;

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

fn is_integer(dtype: &DataType) -> bool {
    is_numeric(dtype) && !matches!(dtype, DataType::Float32 | DataType::Float64)
}

/// Extension methods turning polars frames into learner inputs.
pub trait RuleDataFrameExt {
    /// All column names as owned Strings
    fn column_names_vec(&self) -> Vec<String>;

    /// Every column as `f64`, flattened row-major.
    ///
    /// Fails on non-numeric columns and on nulls.
    fn to_row_major_f64(&self) -> PolarsResult<Vec<f64>>;

    /// The single label column as booleans, with its name.
    ///
    /// Accepts a boolean column or an integer column holding only 0 and 1.
    fn to_boolean_labels(&self) -> PolarsResult<(String, Vec<bool>)>;
}

impl RuleDataFrameExt for DataFrame {
    fn column_names_vec(&self) -> Vec<String> {
        self.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn to_row_major_f64(&self) -> PolarsResult<Vec<f64>> {
        let n_rows = self.height();
        let n_cols = self.width();
        let mut values = vec![0.0_f64; n_rows * n_cols];

        for (j, column) in self.get_columns().iter().enumerate() {
            if !is_numeric(column.dtype()) {
                return Err(PolarsError::SchemaMismatch(ErrString::from(format!(
                    "feature column '{}' has non-numeric dtype {}",
                    column.name(),
                    column.dtype()
                ))));
            }
            if column.null_count() > 0 {
                return Err(PolarsError::ComputeError(ErrString::from(format!(
                    "feature column '{}' contains {} null value(s)",
                    column.name(),
                    column.null_count()
                ))));
            }
            let casted = column.cast(&DataType::Float64)?;
            let ca = casted.as_materialized_series().f64()?;
            for (i, value) in ca.into_no_null_iter().enumerate() {
                values[i * n_cols + j] = value;
            }
        }
        Ok(values)
    }

    fn to_boolean_labels(&self) -> PolarsResult<(String, Vec<bool>)> {
        if self.width() != 1 {
            return Err(PolarsError::ShapeMismatch(ErrString::from(format!(
                "expected exactly one label column, got {}",
                self.width()
            ))));
        }
        let column = &self.get_columns()[0];
        let name = column.name().to_string();
        if column.null_count() > 0 {
            return Err(PolarsError::ComputeError(ErrString::from(format!(
                "label column '{}' contains {} null value(s)",
                name,
                column.null_count()
            ))));
        }

        let dtype = column.dtype();
        let labels = if matches!(dtype, DataType::Boolean) {
            column
                .as_materialized_series()
                .bool()?
                .into_no_null_iter()
                .collect()
        } else if is_integer(dtype) {
            let casted = column.cast(&DataType::Int64)?;
            let ca = casted.as_materialized_series().i64()?;
            let mut labels = Vec::with_capacity(ca.len());
            for value in ca.into_no_null_iter() {
                match value {
                    0 => labels.push(false),
                    1 => labels.push(true),
                    other => {
                        return Err(PolarsError::ComputeError(ErrString::from(format!(
                            "label column '{}' holds {}, expected 0 or 1",
                            name, other
                        ))));
                    }
                }
            }
            labels
        } else {
            return Err(PolarsError::SchemaMismatch(ErrString::from(format!(
                "label column '{}' has dtype {}, expected boolean or 0/1 integers",
                name, dtype
            ))));
        };
        Ok((name, labels))
    }
}
