use crate::{APIResponse, BaseClient};
use reminder_app_api_structs::*;
use reminder_app_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

#[derive(Debug, Default)]
pub struct CreateReminderInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub completed: Option<bool>,
}

/// Only the fields that are `Some` are sent, the others are left unchanged
/// by the server. `Some(None)` clears a text field.
#[derive(Debug, Default)]
pub struct UpdateReminderInput {
    pub reminder_id: ID,
    pub title: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub date: Option<Option<String>>,
    pub time: Option<Option<String>>,
    pub completed: Option<bool>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateReminderInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        let body = create_reminder::RequestBody {
            title: input.title,
            description: input.description,
            date: input.date,
            time: input.time,
            completed: input.completed,
        };
        self.base
            .post(body, "api/reminders".into(), StatusCode::CREATED)
            .await
    }

    pub async fn list(&self) -> APIResponse<get_reminders::APIResponse> {
        self.base.get("api/reminders".into(), StatusCode::OK).await
    }

    pub async fn update(
        &self,
        input: UpdateReminderInput,
    ) -> APIResponse<update_reminder::APIResponse> {
        let body = update_reminder::RequestBody {
            title: input.title,
            description: input.description,
            date: input.date,
            time: input.time,
            completed: input.completed.map(Some),
        };
        self.base
            .put(
                body,
                format!("api/reminders/{}", input.reminder_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, reminder_id: ID) -> APIResponse<delete_reminder::APIResponse> {
        self.base
            .delete(format!("api/reminders/{}", reminder_id), StatusCode::OK)
            .await
    }
}
