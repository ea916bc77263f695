mod base;
mod frontend;
mod reminder;

use frontend::FrontendClient;
use reminder::ReminderClient;
use std::sync::Arc;

pub(crate) use base::BaseClient;

pub use base::{APIError, APIResponse};
pub use reminder::{CreateReminderInput, UpdateReminderInput};
pub use reminder_app_api_structs::dtos::ReminderDTO as Reminder;
pub use reminder_app_domain::ID;

/// Reminder App SDK
///
/// The SDK contains methods for interacting with the reminder server
/// API.
#[derive(Clone)]
pub struct ReminderSDK {
    pub frontend: FrontendClient,
    pub reminder: ReminderClient,
}

impl ReminderSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let frontend = FrontendClient::new(base.clone());
        let reminder = ReminderClient::new(base);

        Self { frontend, reminder }
    }
}
