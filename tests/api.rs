mod helpers;

use chrono::Utc;
use helpers::setup::{spawn_app, spawn_disconnected_app};
use reminder_app_sdk::{APIError, CreateReminderInput, UpdateReminderInput, ID};
use reqwest::StatusCode;
use serde_json::json;

fn assert_error(err: APIError, expected_status: StatusCode, expected_error: &str) {
    match err {
        APIError::UnexpectedStatusCode { status, error } => {
            assert_eq!(status, expected_status);
            assert_eq!(error.as_deref(), Some(expected_error));
        }
        e => panic!("Expected unexpected status code error, got: {:?}", e),
    }
}

#[actix_web::main]
#[test]
async fn test_root_serves_index_page() {
    let (_, sdk) = spawn_app().await;
    let page = sdk.frontend.index().await.expect("To serve index page");
    assert!(page.contains("<title>Reminders</title>"));
}

#[actix_web::main]
#[test]
async fn test_serves_static_assets() {
    let (app, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let res = client
        .get(&format!("{}/styles.css", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(&format!("{}/missing.css", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::main]
#[test]
async fn test_create_reminder() {
    let (_, sdk) = spawn_app().await;

    let before = Utc::now().timestamp_millis();
    let reminder = sdk
        .reminder
        .create(CreateReminderInput {
            title: Some("A".into()),
            ..Default::default()
        })
        .await
        .expect("To create reminder");
    let after = Utc::now().timestamp_millis();

    assert_eq!(reminder.title.as_deref(), Some("A"));
    assert!(reminder.description.is_none());
    assert!(reminder.date.is_none());
    assert!(reminder.time.is_none());
    assert!(!reminder.completed);
    let created_at = reminder.created_at.timestamp_millis();
    assert!(before <= created_at && created_at <= after);

    let reminders = sdk.reminder.list().await.unwrap();
    assert_eq!(reminders, vec![reminder]);
}

#[actix_web::main]
#[test]
async fn test_list_reminders_newest_first() {
    let (_, sdk) = spawn_app().await;
    assert!(sdk.reminder.list().await.unwrap().is_empty());

    for title in &["R1", "R2"] {
        sdk.reminder
            .create(CreateReminderInput {
                title: Some(title.to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    let titles = sdk
        .reminder
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.title.unwrap_or_default())
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["R2".to_string(), "R1".to_string()]);
}

#[actix_web::main]
#[test]
async fn test_update_reminder() {
    let (_, sdk) = spawn_app().await;
    let reminder = sdk
        .reminder
        .create(CreateReminderInput {
            title: Some("Dentist".into()),
            description: Some("Bring insurance card".into()),
            date: Some("2021-09-01".into()),
            time: Some("14:30".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    let updated = sdk
        .reminder
        .update(UpdateReminderInput {
            reminder_id: reminder.id.clone(),
            completed: Some(true),
            ..Default::default()
        })
        .await
        .expect("To update reminder");
    assert!(updated.completed);
    assert_eq!(updated.id, reminder.id);
    assert_eq!(updated.title, reminder.title);
    assert_eq!(updated.description, reminder.description);
    assert_eq!(updated.date, reminder.date);
    assert_eq!(updated.time, reminder.time);
    assert_eq!(updated.created_at, reminder.created_at);

    let updated = sdk
        .reminder
        .update(UpdateReminderInput {
            reminder_id: reminder.id.clone(),
            title: Some(Some("Doctor".into())),
            time: Some(None),
            ..Default::default()
        })
        .await
        .expect("To update reminder");
    assert_eq!(updated.title.as_deref(), Some("Doctor"));
    assert!(updated.time.is_none());
    assert!(updated.completed);

    let reminders = sdk.reminder.list().await.unwrap();
    assert_eq!(reminders, vec![updated]);
}

#[actix_web::main]
#[test]
async fn test_update_unknown_reminder() {
    let (_, sdk) = spawn_app().await;
    let err = sdk
        .reminder
        .update(UpdateReminderInput {
            reminder_id: ID::default(),
            completed: Some(true),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_error(err, StatusCode::NOT_FOUND, "Reminder not found");
}

#[actix_web::main]
#[test]
async fn test_delete_reminder() {
    let (_, sdk) = spawn_app().await;
    let keep = sdk
        .reminder
        .create(CreateReminderInput {
            title: Some("Keep".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    let remove = sdk
        .reminder
        .create(CreateReminderInput {
            title: Some("Remove".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    let res = sdk
        .reminder
        .delete(remove.id.clone())
        .await
        .expect("To delete reminder");
    assert_eq!(res.message, "Reminder deleted successfully");
    assert_eq!(sdk.reminder.list().await.unwrap(), vec![keep]);

    // Deleting twice
    let err = sdk.reminder.delete(remove.id).await.unwrap_err();
    assert_error(err, StatusCode::NOT_FOUND, "Reminder not found");
}

#[actix_web::main]
#[test]
async fn test_rejects_invalid_bodies() {
    let (app, _) = spawn_app().await;
    let client = reqwest::Client::new();
    let url = format!("{}/api/reminders", app.address);

    let res = client
        .post(&url)
        .json(&json!({ "title": 5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await.unwrap();
    assert!(body["error"].is_string());

    let res = client
        .post(&url)
        .json(&json!({ "title": "A" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await.unwrap();
    let id = body["id"].as_str().unwrap().to_string();
    assert_eq!(body["completed"], json!(false));
    assert!(body["createdAt"].is_string());

    let res = client
        .put(&format!("{}/{}", url, id))
        .json(&json!({ "completed": null }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await.unwrap();
    assert!(body["error"].is_string());
}

#[actix_web::main]
#[test]
async fn test_accepts_form_bodies() {
    let (app, sdk) = spawn_app().await;
    let client = reqwest::Client::new();
    let url = format!("{}/api/reminders", app.address);

    let res = client
        .post(&url)
        .form(&[("title", "Groceries"), ("date", "2021-09-01")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["title"], json!("Groceries"));
    assert_eq!(body["completed"], json!(false));
    let id = body["id"].as_str().unwrap().to_string();

    let res = client
        .put(&format!("{}/{}", url, id))
        .form(&[("completed", "true")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let reminders = sdk.reminder.list().await.unwrap();
    assert_eq!(reminders.len(), 1);
    assert!(reminders[0].completed);
    assert_eq!(reminders[0].title.as_deref(), Some("Groceries"));
    assert_eq!(reminders[0].date.as_deref(), Some("2021-09-01"));
}

#[actix_web::main]
#[test]
async fn test_malformed_reminder_ids() {
    let (app, _) = spawn_app().await;
    let client = reqwest::Client::new();
    let url = format!("{}/api/reminders/123", app.address);

    let res = client
        .put(&url)
        .json(&json!({ "completed": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client.delete(&url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["error"], json!("ID: 123 is malformed"));
}

#[actix_web::main]
#[test]
async fn test_serves_while_storage_is_unreachable() {
    let (_, sdk) = spawn_disconnected_app().await;

    let page = sdk.frontend.index().await.expect("To serve index page");
    assert!(page.contains("<title>Reminders</title>"));

    let err = sdk.reminder.list().await.unwrap_err();
    assert_error(
        err,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Not connected to MongoDB yet",
    );

    let err = sdk
        .reminder
        .create(CreateReminderInput::default())
        .await
        .unwrap_err();
    assert_error(err, StatusCode::BAD_REQUEST, "Not connected to MongoDB yet");
}
