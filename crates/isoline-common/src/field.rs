//! Scalar field preprocessing.

use crate::error::DataError;

/// Scale factor converting fractional precipitation to millimeters.
pub const PRECIPITATION_TO_MM: f64 = 100.0;

/// Multiply every value of a field by `factor`.
///
/// Non-finite values stay non-finite, so undefined samples remain undefined.
pub fn scale(field: &[f64], factor: f64) -> Vec<f64> {
    field.iter().map(|v| v * factor).collect()
}

/// Value range of a field, ignoring undefined (non-finite) samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
    /// Number of finite samples that contributed
    pub valid_count: usize,
}

impl FieldRange {
    /// Compute the range of a field.
    ///
    /// # Errors
    ///
    /// [`DataError::EmptyField`] for an empty slice and
    /// [`DataError::NoFiniteValues`] when every sample is undefined.
    pub fn of(field: &[f64]) -> Result<Self, DataError> {
        if field.is_empty() {
            return Err(DataError::EmptyField);
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut valid_count = 0;
        for &v in field.iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
            valid_count += 1;
        }

        if valid_count == 0 {
            return Err(DataError::NoFiniteValues);
        }

        Ok(Self {
            min,
            max,
            valid_count,
        })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}
