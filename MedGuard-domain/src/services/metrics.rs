use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::entities::metrics::{
    HealthMetricsReading, HealthStatus, MetricField, MetricStatus, MetricsSubmission, Violation,
};
use crate::entities::notice::Notice;

// Advisory thresholds, compared against whole-number values.
// These are separate from the accepted input ranges on MetricField.
const HIGH_SYSTOLIC: i64 = 140;
const HIGH_DIASTOLIC: i64 = 90;
const HIGH_BLOOD_SUGAR: i64 = 140;
const HIGH_PULSE_RATE: i64 = 100;

const BLOOD_PRESSURE_ADVICE: &str =
    "Your blood pressure is high. Consider consulting a healthcare provider.";
const BLOOD_SUGAR_ADVICE: &str = "Your blood sugar is elevated.";
const PULSE_RATE_ADVICE: &str = "Your pulse rate is high.";

/// Metrics service errors
#[derive(Debug, Error)]
pub enum MetricsError {
    /// One or more readings are outside their accepted range
    #[error("{} reading(s) out of range", .0.len())]
    Validation(Vec<Violation>),
}

/// Check every entered value against its accepted range.
///
/// Violations come back in field order (systolic, diastolic, blood sugar,
/// pulse rate). Missing values are never reported.
pub fn validate(reading: &HealthMetricsReading) -> Vec<Violation> {
    MetricField::ALL
        .into_iter()
        .filter_map(|field| {
            let value = field.read(reading)?;
            let range = field.accepted_range();
            (!range.contains(value)).then(|| Violation::new(field, value, range))
        })
        .collect()
}

fn exceeds(value: Option<f64>, threshold: i64) -> bool {
    value.map_or(false, |v| v.trunc() as i64 > threshold)
}

/// Derive the advisory status of a reading that already passed `validate`
pub fn derive_status(reading: &HealthMetricsReading) -> HealthStatus {
    let mut status = HealthStatus::default();
    let mut advice = Vec::new();

    if exceeds(reading.blood_pressure.systolic, HIGH_SYSTOLIC)
        || exceeds(reading.blood_pressure.diastolic, HIGH_DIASTOLIC)
    {
        status.blood_pressure = MetricStatus::High;
        advice.push(BLOOD_PRESSURE_ADVICE);
    }

    if exceeds(reading.blood_sugar, HIGH_BLOOD_SUGAR) {
        status.blood_sugar = MetricStatus::High;
        advice.push(BLOOD_SUGAR_ADVICE);
    }

    if exceeds(reading.pulse_rate, HIGH_PULSE_RATE) {
        status.pulse_rate = MetricStatus::High;
        advice.push(PULSE_RATE_ADVICE);
    }

    status.message = advice.join(" ");
    status
}

/// Trait for health metrics operations
#[async_trait]
pub trait MetricsServiceTrait: Send + Sync {
    /// Range-check a reading without saving it
    fn validate(&self, reading: &HealthMetricsReading) -> Vec<Violation>;

    /// Validate, "save" and report the advisory status
    async fn submit(&self, reading: HealthMetricsReading) -> Result<MetricsSubmission, MetricsError>;
}

/// Metrics service with a simulated save
#[derive(Debug, Clone)]
pub struct MetricsService {
    save_latency: Duration,
}

impl MetricsService {
    pub fn new(save_latency: Duration) -> Self {
        Self { save_latency }
    }
}

#[async_trait]
impl MetricsServiceTrait for MetricsService {
    fn validate(&self, reading: &HealthMetricsReading) -> Vec<Violation> {
        validate(reading)
    }

    #[instrument(skip(self))]
    async fn submit(&self, reading: HealthMetricsReading) -> Result<MetricsSubmission, MetricsError> {
        let violations = validate(&reading);
        if !violations.is_empty() {
            warn!(count = violations.len(), "Rejected health metrics submission");
            return Err(MetricsError::Validation(violations));
        }

        tokio::time::sleep(self.save_latency).await;

        let status = derive_status(&reading);
        let notice = if status.is_all_normal() {
            Notice::info("Metrics Saved Successfully", "Your health metrics have been recorded.")
        } else {
            Notice::destructive("Metrics Saved Successfully", status.message.clone())
        };

        info!(all_normal = status.is_all_normal(), "Health metrics recorded");

        Ok(MetricsSubmission {
            readings: reading.summary_lines(),
            status,
            notice,
        })
    }
}
