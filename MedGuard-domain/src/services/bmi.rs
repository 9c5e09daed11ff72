use thiserror::Error;
use tracing::debug;

use crate::entities::bmi::{BmiCategory, BmiRequest, BmiResult};

/// BMI calculation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BmiError {
    #[error("Height must be a positive number of centimetres")]
    InvalidHeight,

    #[error("Weight must be a positive number of kilograms")]
    InvalidWeight,
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Round a positive value to one decimal from its exact stored value.
/// Exact ties (`.25`, `.75`) round up.
fn round_to_tenth(value: f64) -> f64 {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return (value * 10.0).ceil() / 10.0;
    }
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Body mass index from height in centimetres and weight in kilograms.
///
/// The value is rounded to one decimal and the category is read from the
/// rounded value.
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> Result<BmiResult, BmiError> {
    if !is_positive(height_cm) {
        return Err(BmiError::InvalidHeight);
    }
    if !is_positive(weight_kg) {
        return Err(BmiError::InvalidWeight);
    }

    let height_m = height_cm / 100.0;
    let raw = weight_kg / (height_m * height_m);
    let bmi = round_to_tenth(raw);
    let category = BmiCategory::from_bmi(bmi);

    debug!(bmi, %category, "BMI calculated");
    Ok(BmiResult { bmi, category })
}

impl BmiRequest {
    pub fn calculate(&self) -> Result<BmiResult, BmiError> {
        calculate_bmi(self.height_cm, self.weight_kg)
    }
}
