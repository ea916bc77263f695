use crate::shared::entity::{Entity, ID};

/// A `Reminder` is a note about something the owner wants to remember
/// to do, optionally tied to a date and a time of day.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Free form date text, it is never parsed
    pub date: Option<String>,
    /// Free form time of day text, it is never parsed
    pub time: Option<String>,
    pub completed: bool,
    /// Timestamp in millis of when this `Reminder` was created.
    /// It is set once and never changed by updates.
    pub created_at: i64,
}

impl Reminder {
    pub fn new(created_at: i64) -> Self {
        Self {
            id: Default::default(),
            title: None,
            description: None,
            date: None,
            time: None,
            completed: false,
            created_at,
        }
    }

    /// Merges the fields present in the `ReminderPatch` into this `Reminder`.
    /// Fields that are not present are left unchanged.
    pub fn apply(&mut self, patch: ReminderPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Partial set of the modifiable `Reminder` fields.
///
/// The outer `Option` of the text fields tells whether the field should be
/// touched at all, the inner one is the new value where `None` clears it.
#[derive(Debug, Clone, Default)]
pub struct ReminderPatch {
    pub title: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub date: Option<Option<String>>,
    pub time: Option<Option<String>>,
    pub completed: Option<bool>,
}
