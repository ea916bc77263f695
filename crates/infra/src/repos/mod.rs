mod reminder;
mod shared;

use crate::connection::StorageHandle;
use mongodb::Database;
use reminder::{InMemoryReminderRepo, MongoReminderRepo};
use std::sync::Arc;

pub use reminder::IReminderRepo;

#[derive(Clone)]
pub struct Repos {
    pub reminders: Arc<dyn IReminderRepo>,
}

impl Repos {
    /// Repositories backed by the MongoDB connection published into `storage`.
    /// They fail every operation until a connection has been published.
    pub fn create_mongodb(storage: &StorageHandle<Database>) -> Self {
        Self {
            reminders: Arc::new(MongoReminderRepo::new(storage.clone())),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            reminders: Arc::new(InMemoryReminderRepo::new()),
        }
    }
}
