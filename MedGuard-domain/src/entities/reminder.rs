use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// How often a reminder repeats
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

/// The reminder being composed on the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ReminderDraft {
    /// Medicine name
    #[serde(default)]
    pub medicine: String,

    /// Time of day as entered, e.g. `08:00`
    #[serde(default)]
    pub time: String,

    #[serde(default)]
    pub frequency: Frequency,
}

impl ReminderDraft {
    /// Whether both medicine and time are non-empty. Whitespace counts as filled in.
    pub fn is_complete(&self) -> bool {
        !self.medicine.is_empty() && !self.time.is_empty()
    }
}

/// A saved reminder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct Reminder {
    pub id: Uuid,
    pub medicine: String,
    pub time: String,
    pub frequency: Frequency,
}

impl Reminder {
    /// New reminder with a fresh id, taken from a draft
    pub fn from_draft(draft: &ReminderDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            medicine: draft.medicine.clone(),
            time: draft.time.clone(),
            frequency: draft.frequency,
        }
    }
}

/// The reminder list together with the current draft
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ReminderBookView {
    pub reminders: Vec<Reminder>,
    pub draft: ReminderDraft,
}
