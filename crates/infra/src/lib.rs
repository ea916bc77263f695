mod config;
mod connection;
mod repos;
mod system;

pub use config::Config;
pub use connection::{
    ConnectionError, ConnectionState, ConnectionSupervisor, IConnector, MongoConnector,
    RetryPolicy, StorageHandle,
};
use mongodb::Database;
pub use repos::{IReminderRepo, Repos};
use std::sync::Arc;
pub use system::{IScheduler, ISys, RealScheduler};
use system::RealSys;

#[derive(Clone)]
pub struct ReminderContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    /// Shared MongoDB connection, `None` when the context is not backed by MongoDB
    pub storage: Option<StorageHandle<Database>>,
}

impl ReminderContext {
    /// MongoDB backed context. It is not connected yet, see `connection_supervisor`.
    pub fn create(config: Config) -> Self {
        let storage = StorageHandle::new();
        Self {
            repos: Repos::create_mongodb(&storage),
            config,
            sys: Arc::new(RealSys {}),
            storage: Some(storage),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            storage: None,
        }
    }

    /// Supervisor that connects the storage of this context, if there is one
    pub fn connection_supervisor(&self) -> Option<ConnectionSupervisor<MongoConnector>> {
        let storage = self.storage.as_ref()?;
        Some(ConnectionSupervisor::new(
            MongoConnector {},
            self.config.mongodb_uri.clone(),
            self.config.connection_retry.clone(),
            storage.clone(),
            Arc::new(RealScheduler {}),
        ))
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> ReminderContext {
    ReminderContext::create(Config::new())
}
