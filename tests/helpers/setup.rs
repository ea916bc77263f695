use reminder_app_api::Application;
use reminder_app_infra::{Config, ReminderContext};
use reminder_app_sdk::ReminderSDK;

pub struct TestApp {
    pub address: String,
}

// Launch the application with inmemory storage as a background task
pub async fn spawn_app() -> (TestApp, ReminderSDK) {
    spawn_app_with_context(ReminderContext::create_inmemory()).await
}

// Launch the application backed by a MongoDB that will never be reachable
pub async fn spawn_disconnected_app() -> (TestApp, ReminderSDK) {
    let mut config = Config::new();
    config.mongodb_uri =
        "mongodb://127.0.0.1:1/reminderapp?serverSelectionTimeoutMS=100".into();
    spawn_app_with_context(ReminderContext::create(config)).await
}

async fn spawn_app_with_context(mut ctx: ReminderContext) -> (TestApp, ReminderSDK) {
    ctx.config.port = 0; // Random port
    ctx.config.static_dir = format!("{}/public", env!("CARGO_MANIFEST_DIR"));

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = ReminderSDK::new(address.clone());
    (TestApp { address }, sdk)
}
