use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::notice::Notice;

/// Wire form of a single measurement: a number, or the text of a form field
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMeasurement {
    Number(f64),
    Text(String),
}

/// Deserialize an optional measurement.
///
/// Missing fields, `null` and blank strings are all "not yet entered".
/// Numeric strings are parsed; any other string is rejected.
pub fn optional_measurement<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawMeasurement>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawMeasurement::Number(value)) => Ok(Some(value)),
        Some(RawMeasurement::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid measurement '{}'", text)))
        }
    }
}

/// Blood pressure in mmHg
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BloodPressureReading {
    /// Systolic pressure (accepted range 70-190)
    #[serde(default, deserialize_with = "optional_measurement")]
    pub systolic: Option<f64>,

    /// Diastolic pressure (accepted range 40-100)
    #[serde(default, deserialize_with = "optional_measurement")]
    pub diastolic: Option<f64>,
}

/// Cholesterol panel in mg/dL, recorded without range checks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct CholesterolReading {
    #[serde(default, deserialize_with = "optional_measurement")]
    pub hdl: Option<f64>,

    #[serde(default, deserialize_with = "optional_measurement")]
    pub ldl: Option<f64>,

    #[serde(default, deserialize_with = "optional_measurement")]
    pub total: Option<f64>,
}

/// One form session of health readings. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct HealthMetricsReading {
    #[serde(default)]
    pub blood_pressure: BloodPressureReading,

    /// Blood sugar in mg/dL (accepted range 70-400)
    #[serde(default, deserialize_with = "optional_measurement")]
    pub blood_sugar: Option<f64>,

    /// Pulse in beats per minute (accepted range 40-200)
    #[serde(default, deserialize_with = "optional_measurement")]
    pub pulse_rate: Option<f64>,

    #[serde(default)]
    pub cholesterol: CholesterolReading,
}

fn or_dash(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl HealthMetricsReading {
    /// Whether any field has been entered
    pub fn has_any_value(&self) -> bool {
        [
            self.blood_pressure.systolic,
            self.blood_pressure.diastolic,
            self.blood_sugar,
            self.pulse_rate,
            self.cholesterol.hdl,
            self.cholesterol.ldl,
            self.cholesterol.total,
        ]
        .iter()
        .any(Option::is_some)
    }

    /// Display lines for the entered readings.
    /// Blood pressure is only shown once both values are present.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let (Some(systolic), Some(diastolic)) =
            (self.blood_pressure.systolic, self.blood_pressure.diastolic)
        {
            lines.push(format!("Blood Pressure: {}/{} mmHg", systolic, diastolic));
        }
        if let Some(sugar) = self.blood_sugar {
            lines.push(format!("Blood Sugar: {} mg/dL", sugar));
        }
        if let Some(pulse) = self.pulse_rate {
            lines.push(format!("Pulse Rate: {} bpm", pulse));
        }

        let cholesterol = &self.cholesterol;
        if cholesterol.hdl.is_some() || cholesterol.ldl.is_some() || cholesterol.total.is_some() {
            lines.push(format!(
                "Cholesterol: HDL: {} | LDL: {} | Total: {} mg/dL",
                or_dash(cholesterol.hdl),
                or_dash(cholesterol.ldl),
                or_dash(cholesterol.total)
            ));
        }

        lines
    }
}

/// Range-checked measurement fields, in reporting order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    Systolic,
    Diastolic,
    BloodSugar,
    PulseRate,
}

impl MetricField {
    pub const ALL: [MetricField; 4] = [
        MetricField::Systolic,
        MetricField::Diastolic,
        MetricField::BloodSugar,
        MetricField::PulseRate,
    ];

    /// Inclusive range a value must fall in to be accepted at all
    pub fn accepted_range(self) -> MetricRange {
        match self {
            MetricField::Systolic => MetricRange::new(70.0, 190.0),
            MetricField::Diastolic => MetricRange::new(40.0, 100.0),
            MetricField::BloodSugar => MetricRange::new(70.0, 400.0),
            MetricField::PulseRate => MetricRange::new(40.0, 200.0),
        }
    }

    /// The entered value for this field, if any
    pub fn read(self, reading: &HealthMetricsReading) -> Option<f64> {
        match self {
            MetricField::Systolic => reading.blood_pressure.systolic,
            MetricField::Diastolic => reading.blood_pressure.diastolic,
            MetricField::BloodSugar => reading.blood_sugar,
            MetricField::PulseRate => reading.pulse_rate,
        }
    }

    /// Human-readable name used in messages
    pub fn label(self) -> &'static str {
        match self {
            MetricField::Systolic => "Systolic blood pressure",
            MetricField::Diastolic => "Diastolic blood pressure",
            MetricField::BloodSugar => "Blood sugar",
            MetricField::PulseRate => "Pulse rate",
        }
    }

    /// Unit appended to range messages
    pub fn unit(self) -> Option<&'static str> {
        match self {
            MetricField::Systolic | MetricField::Diastolic => None,
            MetricField::BloodSugar => Some("mg/dL"),
            MetricField::PulseRate => Some("bpm"),
        }
    }
}

/// Inclusive numeric range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// A present reading outside its accepted input range
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct Violation {
    /// Offending field
    pub field: MetricField,

    /// Value that was entered
    pub value: f64,

    /// Accepted range for the field
    pub range: MetricRange,

    /// User-facing message
    pub message: String,
}

impl Violation {
    pub fn new(field: MetricField, value: f64, range: MetricRange) -> Self {
        let message = match field.unit() {
            Some(unit) => format!(
                "{} should be between {} and {} {}",
                field.label(),
                range.min,
                range.max,
                unit
            ),
            None => format!("{} should be between {} and {}", field.label(), range.min, range.max),
        };

        Self {
            field,
            value,
            range,
            message,
        }
    }

    /// One notice per violation, as shown on a rejected submission
    pub fn notice(&self) -> Notice {
        Notice::destructive("Validation Error", self.message.clone())
    }
}

/// Advisory flag for one metric
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum MetricStatus {
    #[default]
    Normal,
    High,
}

/// Advisory status derived from a validated reading
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct HealthStatus {
    pub blood_pressure: MetricStatus,
    pub blood_sugar: MetricStatus,
    pub pulse_rate: MetricStatus,

    /// One advisory clause per high metric; empty when all are normal
    pub message: String,
}

impl HealthStatus {
    pub fn is_all_normal(&self) -> bool {
        self.message.is_empty()
    }
}

/// Result of a successful metrics submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct MetricsSubmission {
    /// Derived advisory status
    pub status: HealthStatus,

    /// Success notice carrying the advisory message
    pub notice: Notice,

    /// Display lines for the entered readings
    pub readings: Vec<String>,
}
