use crate::{
    error::AppError,
    shared::{
        body_of,
        usecase::{execute, UseCase},
        JsonOrForm,
    },
};
use actix_web::{web, HttpResponse};
use reminder_app_api_structs::create_reminder::*;
use reminder_app_domain::Reminder;
use reminder_app_infra::ReminderContext;
use tracing::debug;

pub async fn create_reminder_controller(
    body: JsonOrForm<RequestBody>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, AppError> {
    let body = body_of(body);
    debug!("Received data: {:?}", body);

    let usecase = CreateReminderUseCase {
        title: body.title,
        description: body.description,
        date: body.date,
        time: body.time,
        completed: body.completed,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| {
            debug!("Saved reminder: {:?}", reminder);
            HttpResponse::Created().json(APIResponse::new(reminder))
        })
        .map_err(AppError::from)
}

#[derive(Debug, Default)]
pub struct CreateReminderUseCase {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError(String),
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError(msg) => Self::BadClientData(msg),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = Reminder::new(ctx.sys.get_timestamp_millis());
        reminder.title = self.title.take();
        reminder.description = self.description.take();
        reminder.date = self.date.take();
        reminder.time = self.time.take();
        reminder.completed = self.completed.unwrap_or(false);

        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;

        Ok(reminder)
    }
}
