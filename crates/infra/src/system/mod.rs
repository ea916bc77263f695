use chrono::Utc;
use std::time::Duration;

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Defers work, so that retry loops can be driven without real timers in tests.
#[async_trait::async_trait]
pub trait IScheduler: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Scheduler backed by the tokio timer
pub struct RealScheduler {}

#[async_trait::async_trait]
impl IScheduler for RealScheduler {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
