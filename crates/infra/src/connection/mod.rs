mod mongo;

use crate::system::IScheduler;
use std::{
    sync::{Arc, PoisonError, RwLock},
    time::Duration,
};
use thiserror::Error;
use tracing::{error, info};

pub use mongo::MongoConnector;

/// Slot holding the live storage connection, shared between the
/// `ConnectionSupervisor` which fills it and the repositories reading it.
/// It stays empty until the first successful connection attempt.
#[derive(Clone)]
pub struct StorageHandle<T> {
    inner: Arc<RwLock<Option<T>>>,
}

impl<T: Clone> StorageHandle<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
        }
    }

    pub fn get(&self) -> Option<T> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set(&self, connection: T) {
        let mut slot = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(connection);
    }

    pub fn is_connected(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl<T: Clone> Default for StorageHandle<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Linear retry policy: the `delay` between attempts never grows.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Wait between a failed attempt and the next one
    pub delay: Duration,
    /// How long to keep retrying before every failure gets reported as overdue
    pub patience: Duration,
}

impl RetryPolicy {
    /// Number of retries that corresponds to `patience`
    pub fn verbose_after_retries(&self) -> u32 {
        let delay = self.delay.as_millis().max(1);
        (self.patience.as_millis() / delay) as u32
    }

    pub fn is_overdue(&self, retries: u32) -> bool {
        retries >= self.verbose_after_retries()
    }

    /// Seconds spent waiting after the given number of retries
    pub fn waited_secs(&self, retries: u32) -> u64 {
        (self.delay * retries).as_secs()
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(5),
            patience: Duration::from_secs(60),
        }
    }
}

#[derive(Error, Debug, Clone)]
#[error("{name}: {message}")]
pub struct ConnectionError {
    pub name: String,
    pub message: String,
    /// Error code reported by the server, if the server was reached at all
    pub code: Option<i32>,
}

impl ConnectionError {
    pub fn is_connection_refused(&self) -> bool {
        self.message.contains("ECONNREFUSED") || self.message.contains("Connection refused")
    }
}

#[async_trait::async_trait]
pub trait IConnector: Send + Sync {
    type Connection: Clone + Send + Sync + 'static;

    async fn connect(&self, uri: &str) -> Result<Self::Connection, ConnectionError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
}

/// Keeps trying to connect to the storage until it succeeds.
///
/// The storage might still be starting up when the server starts, so failed
/// attempts are never fatal. After every failure the supervisor waits
/// `RetryPolicy::delay` and tries again, forever. Once connected the
/// connection is published through the `StorageHandle` and the supervisor
/// is done.
pub struct ConnectionSupervisor<C: IConnector> {
    connector: C,
    uri: String,
    policy: RetryPolicy,
    handle: StorageHandle<C::Connection>,
    scheduler: Arc<dyn IScheduler>,
    state: ConnectionState,
    retries: u32,
    overdue_reports: u32,
}

impl<C: IConnector> ConnectionSupervisor<C> {
    pub fn new(
        connector: C,
        uri: String,
        policy: RetryPolicy,
        handle: StorageHandle<C::Connection>,
        scheduler: Arc<dyn IScheduler>,
    ) -> Self {
        Self {
            connector,
            uri,
            policy,
            handle,
            scheduler,
            state: ConnectionState::Disconnected,
            retries: 0,
            overdue_reports: 0,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    /// Number of failures that were reported as still waiting
    pub fn overdue_reports(&self) -> u32 {
        self.overdue_reports
    }

    /// Makes a single connection attempt and returns the resulting state
    pub async fn attempt(&mut self) -> ConnectionState {
        self.state = ConnectionState::Connecting;
        match self.connector.connect(&self.uri).await {
            Ok(connection) => {
                self.handle.set(connection);
                self.state = ConnectionState::Connected;
                info!("Successfully connected to MongoDB");
            }
            Err(e) => {
                self.report_failure(&e);
                self.state = ConnectionState::Disconnected;
            }
        }
        self.state
    }

    /// Retries until connected
    pub async fn run(&mut self) -> ConnectionState {
        loop {
            if self.attempt().await == ConnectionState::Connected {
                return self.state;
            }
            self.scheduler.sleep(self.policy.delay).await;
            self.retries += 1;
        }
    }

    fn report_failure(&mut self, e: &ConnectionError) {
        error!(
            error.name = %e.name,
            error.message = %e.message,
            error.code = ?e.code,
            "Detailed MongoDB connection error"
        );
        if e.is_connection_refused() {
            error!("Hint: If running inside Docker Compose make sure MONGODB_URI uses the `mongo` service hostname (not localhost).");
        }
        if self.policy.is_overdue(self.retries) {
            self.overdue_reports += 1;
            error!(
                "Still waiting for MongoDB after {}s... will keep retrying.",
                self.policy.waited_secs(self.retries)
            );
        }
    }
}
