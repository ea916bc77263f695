use crate::{
    error::AppError,
    shared::{
        body_of,
        usecase::{execute, UseCase},
        JsonOrForm,
    },
};
use actix_web::{web, HttpResponse};
use reminder_app_api_structs::update_reminder::*;
use reminder_app_domain::{Reminder, ReminderPatch, ID};
use reminder_app_infra::ReminderContext;

pub async fn update_reminder_controller(
    path: web::Path<PathParams>,
    body: JsonOrForm<RequestBody>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, AppError> {
    let body = body_of(body);
    let usecase = UpdateReminderUseCase {
        reminder_id: path.into_inner().reminder_id,
        title: body.title,
        description: body.description,
        date: body.date,
        time: body.time,
        completed: body.completed,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(AppError::from)
}

/// Fields that are `None` are left unchanged. `Some(None)` clears a text field
/// but is rejected for `completed`, which is never null.
#[derive(Debug, Default)]
pub struct UpdateReminderUseCase {
    pub reminder_id: String,
    pub title: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub date: Option<Option<String>>,
    pub time: Option<Option<String>>,
    pub completed: Option<Option<bool>>,
}

#[derive(Debug)]
pub enum UseCaseError {
    MalformedId(String),
    NullCompleted,
    NotFound,
    StorageError(String),
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MalformedId(msg) => Self::BadClientData(msg),
            UseCaseError::NullCompleted => {
                Self::BadClientData("`completed` must be a boolean, not null".into())
            }
            UseCaseError::NotFound => Self::NotFound("Reminder not found".into()),
            UseCaseError::StorageError(msg) => Self::BadClientData(msg),
        }
    }
}

impl UpdateReminderUseCase {
    fn patch(&mut self) -> Result<ReminderPatch, UseCaseError> {
        let completed = match self.completed {
            Some(None) => return Err(UseCaseError::NullCompleted),
            Some(Some(completed)) => Some(completed),
            None => None,
        };

        Ok(ReminderPatch {
            title: self.title.take(),
            description: self.description.take(),
            date: self.date.take(),
            time: self.time.take(),
            completed,
        })
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let reminder_id = self
            .reminder_id
            .parse::<ID>()
            .map_err(|e| UseCaseError::MalformedId(e.to_string()))?;
        let patch = self.patch()?;

        let mut reminder = match ctx.repos.reminders.find(&reminder_id).await {
            Ok(Some(reminder)) => reminder,
            Ok(None) => return Err(UseCaseError::NotFound),
            Err(e) => return Err(UseCaseError::StorageError(e.to_string())),
        };

        reminder.apply(patch);

        match ctx.repos.reminders.save(&reminder).await {
            Ok(true) => Ok(reminder),
            // Deleted since it was read
            Ok(false) => Err(UseCaseError::NotFound),
            Err(e) => Err(UseCaseError::StorageError(e.to_string())),
        }
    }
}
