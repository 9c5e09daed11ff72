use std::str::FromStr;

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::notice::Notice;

/// Pill outline offered by the identifier form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum PillShape {
    Round,
    Oval,
    Rectangle,
    Diamond,
    Triangle,
    Hexagon,
}

impl PillShape {
    pub const ALL: [PillShape; 6] = [
        PillShape::Round,
        PillShape::Oval,
        PillShape::Rectangle,
        PillShape::Diamond,
        PillShape::Triangle,
        PillShape::Hexagon,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PillShape::Round => "Round",
            PillShape::Oval => "Oval",
            PillShape::Rectangle => "Rectangle",
            PillShape::Diamond => "Diamond",
            PillShape::Triangle => "Triangle",
            PillShape::Hexagon => "Hexagon",
        }
    }
}

impl FromStr for PillShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PillShape::ALL
            .into_iter()
            .find(|shape| shape.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown pill shape '{}'", s))
    }
}

// The form posts an empty string when no shape is picked
fn optional_shape<'de, D>(deserializer: D) -> Result<Option<PillShape>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(text) if !text.trim().is_empty() => text.parse().map(Some).map_err(D::Error::custom),
        _ => Ok(None),
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().map_or(false, |v| !v.trim().is_empty())
}

fn require_one_criterion(criteria: &PillSearchCriteria) -> Result<(), ValidationError> {
    if criteria.is_empty() {
        let mut error = ValidationError::new("missing_criteria");
        error.message = Some("Please provide at least one search criteria".into());
        return Err(error);
    }
    Ok(())
}

/// Visual characteristics to search by
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[validate(schema(function = "require_one_criterion", skip_on_field_errors = false))]
pub struct PillSearchCriteria {
    /// Colour, free text
    #[serde(default)]
    pub color: Option<String>,

    #[serde(default, deserialize_with = "optional_shape")]
    pub shape: Option<PillShape>,

    /// Imprint code, free text
    #[serde(default)]
    pub imprint: Option<String>,
}

impl PillSearchCriteria {
    /// True when no criterion has been filled in
    pub fn is_empty(&self) -> bool {
        !has_text(&self.color) && self.shape.is_none() && !has_text(&self.imprint)
    }
}

/// A catalogue pill that matches the criteria
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct PillMatch {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub dosage: String,
    pub manufacturer: String,
}

/// Answer to a pill search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct PillSearchOutcome {
    pub matches: Vec<PillMatch>,
    pub notice: Notice,
}

/// Criteria extracted from a pill photo
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct PillImageAnalysis {
    pub criteria: PillSearchCriteria,
    pub notice: Notice,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_shape_is_absent() {
        let criteria: PillSearchCriteria =
            serde_json::from_str(r#"{ "color": "", "shape": "", "imprint": "" }"#).unwrap();

        assert!(criteria.is_empty());
        assert!(criteria.validate().is_err());
    }

    #[test]
    fn test_shape_parses_case_insensitively() {
        let criteria: PillSearchCriteria = serde_json::from_str(r#"{ "shape": "oval" }"#).unwrap();

        assert_eq!(criteria.shape, Some(PillShape::Oval));
        assert!(criteria.validate().is_ok());
    }

    #[test]
    fn test_unknown_shape_is_rejected() {
        assert!(serde_json::from_str::<PillSearchCriteria>(r#"{ "shape": "Star" }"#).is_err());
    }
}
