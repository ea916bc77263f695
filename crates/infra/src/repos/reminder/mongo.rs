use super::IReminderRepo;
use crate::{connection::StorageHandle, repos::shared::mongo_repo};
use anyhow::anyhow;
use mongo_repo::MongoDocument;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    options::FindOptions,
    Collection, Database,
};
use reminder_app_domain::{Reminder, ID};
use serde::{Deserialize, Serialize};

const COLLECTION_NAME: &str = "reminders";

pub struct MongoReminderRepo {
    storage: StorageHandle<Database>,
}

impl MongoReminderRepo {
    pub fn new(storage: StorageHandle<Database>) -> Self {
        Self { storage }
    }

    fn collection(&self) -> anyhow::Result<Collection<Document>> {
        self.storage
            .get()
            .map(|db| db.collection(COLLECTION_NAME))
            .ok_or_else(|| anyhow!("Not connected to MongoDB yet"))
    }
}

#[async_trait::async_trait]
impl IReminderRepo for MongoReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        mongo_repo::insert::<_, ReminderMongo>(&self.collection()?, reminder).await
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<bool> {
        mongo_repo::save::<_, ReminderMongo>(&self.collection()?, reminder).await
    }

    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        let oid = reminder_id.inner_ref();
        mongo_repo::find::<_, ReminderMongo>(&self.collection()?, oid).await
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        // `_id`s generated in the same millisecond are still increasing
        let options = FindOptions::builder()
            .sort(doc! {
                "createdAt": -1,
                "_id": -1
            })
            .build();
        mongo_repo::find_many_by::<_, ReminderMongo>(&self.collection()?, None, Some(options))
            .await
    }

    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        let oid = reminder_id.inner_ref();
        mongo_repo::delete::<_, ReminderMongo>(&self.collection()?, oid).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ReminderMongo {
    _id: ObjectId,
    title: Option<String>,
    description: Option<String>,
    date: Option<String>,
    time: Option<String>,
    // Older documents can hold a null or no `completed` at all
    completed: Option<bool>,
    #[serde(rename = "createdAt")]
    created_at: DateTime,
}

impl MongoDocument<Reminder> for ReminderMongo {
    fn into_domain(self) -> Reminder {
        Reminder {
            id: ID::from(self._id),
            title: self.title,
            description: self.description,
            date: self.date,
            time: self.time,
            completed: self.completed.unwrap_or(false),
            created_at: self.created_at.timestamp_millis(),
        }
    }

    fn from_domain(reminder: &Reminder) -> Self {
        Self {
            _id: *reminder.id.inner_ref(),
            title: reminder.title.clone(),
            description: reminder.description.clone(),
            date: reminder.date.clone(),
            time: reminder.time.clone(),
            completed: Some(reminder.completed),
            created_at: DateTime::from_millis(reminder.created_at),
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": &self._id
        }
    }
}
