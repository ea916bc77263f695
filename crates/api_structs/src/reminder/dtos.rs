use chrono::{DateTime, Utc};
use reminder_app_domain::{Reminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            title: reminder.title,
            description: reminder.description,
            date: reminder.date,
            time: reminder.time,
            completed: reminder.completed,
            created_at: DateTime::from_timestamp_millis(reminder.created_at).unwrap_or_default(),
        }
    }
}
