use std::sync::RwLock;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::entities::reminder::{Reminder, ReminderBookView, ReminderDraft};

/// Actions accepted by the reminder book
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderAction {
    /// Replace the draft
    EditDraft(ReminderDraft),
    /// Turn the draft into a reminder
    Add,
    /// Remove a reminder by id
    Delete(Uuid),
}

/// Reminder list plus the draft being composed
#[derive(Debug, Clone, Default)]
pub struct ReminderBook {
    reminders: Vec<Reminder>,
    draft: ReminderDraft,
}

impl ReminderBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn draft(&self) -> &ReminderDraft {
        &self.draft
    }

    /// Apply an action. Returns true when the reminder list changed.
    pub fn apply(&mut self, action: ReminderAction) -> bool {
        match action {
            ReminderAction::EditDraft(draft) => {
                self.draft = draft;
                false
            }
            ReminderAction::Add => {
                if !self.draft.is_complete() {
                    return false;
                }
                self.reminders.push(Reminder::from_draft(&self.draft));
                self.draft = ReminderDraft::default();
                true
            }
            ReminderAction::Delete(id) => {
                let before = self.reminders.len();
                self.reminders.retain(|reminder| reminder.id != id);
                self.reminders.len() != before
            }
        }
    }

    pub fn view(&self) -> ReminderBookView {
        ReminderBookView {
            reminders: self.reminders.clone(),
            draft: self.draft.clone(),
        }
    }
}

/// Trait for reminder operations
pub trait ReminderServiceTrait: Send + Sync {
    /// Current reminders and draft
    fn view(&self) -> ReminderBookView;

    /// Store the draft and try to add it. Returns the new reminder, if one was added.
    fn add(&self, draft: ReminderDraft) -> (Option<Reminder>, ReminderBookView);

    /// Remove a reminder. Returns false when the id was unknown.
    fn delete(&self, id: Uuid) -> bool;
}

/// In-memory reminder book for the process lifetime
#[derive(Debug, Default)]
pub struct ReminderService {
    book: RwLock<ReminderBook>,
}

impl ReminderService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReminderServiceTrait for ReminderService {
    fn view(&self) -> ReminderBookView {
        match self.book.read() {
            Ok(book) => book.view(),
            Err(poisoned) => poisoned.into_inner().view(),
        }
    }

    #[instrument(skip(self))]
    fn add(&self, draft: ReminderDraft) -> (Option<Reminder>, ReminderBookView) {
        let mut book = match self.book.write() {
            Ok(book) => book,
            Err(poisoned) => poisoned.into_inner(),
        };

        book.apply(ReminderAction::EditDraft(draft));
        if book.apply(ReminderAction::Add) {
            let added = book.reminders().last().cloned();
            info!(count = book.reminders().len(), "Reminder added");
            (added, book.view())
        } else {
            debug!("Incomplete reminder draft kept");
            (None, book.view())
        }
    }

    #[instrument(skip(self))]
    fn delete(&self, id: Uuid) -> bool {
        let mut book = match self.book.write() {
            Ok(book) => book,
            Err(poisoned) => poisoned.into_inner(),
        };

        let removed = book.apply(ReminderAction::Delete(id));
        debug!(removed, "Reminder delete");
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::reminder::Frequency;

    fn draft(medicine: &str, time: &str) -> ReminderDraft {
        ReminderDraft {
            medicine: medicine.to_string(),
            time: time.to_string(),
            frequency: Frequency::Weekly,
        }
    }

    #[test]
    fn test_add_requires_medicine_and_time() {
        let mut book = ReminderBook::new();

        for incomplete in [draft("", "08:00"), draft("Aspirin", ""), draft("", "")] {
            book.apply(ReminderAction::EditDraft(incomplete.clone()));
            assert!(!book.apply(ReminderAction::Add));
            assert!(book.reminders().is_empty());
            assert_eq!(book.draft(), &incomplete);
        }
    }

    #[test]
    fn test_whitespace_counts_as_filled_in() {
        let mut book = ReminderBook::new();
        book.apply(ReminderAction::EditDraft(draft("   ", "08:00")));

        assert!(book.apply(ReminderAction::Add));
        assert_eq!(book.reminders().len(), 1);
        assert_eq!(book.reminders()[0].medicine, "   ");
    }

    #[test]
    fn test_add_appends_one_and_resets_draft() {
        let mut book = ReminderBook::new();
        book.apply(ReminderAction::EditDraft(draft("Aspirin", "08:00")));

        assert!(book.apply(ReminderAction::Add));
        assert_eq!(book.reminders().len(), 1);
        assert_eq!(book.reminders()[0].medicine, "Aspirin");
        assert_eq!(book.reminders()[0].frequency, Frequency::Weekly);
        assert_eq!(book.draft(), &ReminderDraft::default());
        assert_eq!(book.draft().frequency, Frequency::Daily);
    }

    #[test]
    fn test_ids_are_fresh() {
        let mut book = ReminderBook::new();
        for _ in 0..2 {
            book.apply(ReminderAction::EditDraft(draft("Aspirin", "08:00")));
            book.apply(ReminderAction::Add);
        }

        assert_eq!(book.reminders().len(), 2);
        assert_ne!(book.reminders()[0].id, book.reminders()[1].id);
    }

    #[test]
    fn test_delete() {
        let mut book = ReminderBook::new();
        book.apply(ReminderAction::EditDraft(draft("Aspirin", "08:00")));
        book.apply(ReminderAction::Add);
        let id = book.reminders()[0].id;

        assert!(!book.apply(ReminderAction::Delete(Uuid::new_v4())));
        assert_eq!(book.reminders().len(), 1);

        assert!(book.apply(ReminderAction::Delete(id)));
        assert!(book.reminders().is_empty());
    }

    #[test]
    fn test_service_keeps_incomplete_draft() {
        let service = ReminderService::new();

        let (added, view) = service.add(draft("Aspirin", ""));
        assert!(added.is_none());
        assert_eq!(view.draft.medicine, "Aspirin");

        let (added, view) = service.add(draft("Aspirin", "21:00"));
        let added = added.unwrap();
        assert_eq!(view.reminders, vec![added.clone()]);
        assert!(service.delete(added.id));
        assert!(service.view().reminders.is_empty());
    }
}
