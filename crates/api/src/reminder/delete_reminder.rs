use crate::{
    error::AppError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use reminder_app_api_structs::delete_reminder::*;
use reminder_app_domain::{Reminder, ID};
use reminder_app_infra::ReminderContext;

pub async fn delete_reminder_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<ReminderContext>,
) -> Result<HttpResponse, AppError> {
    let usecase = DeleteReminderUseCase {
        reminder_id: path.into_inner().reminder_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse::new()))
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub reminder_id: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    MalformedId(String),
    NotFound,
    StorageError(String),
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MalformedId(msg) => Self::InternalError(msg),
            UseCaseError::NotFound => Self::NotFound("Reminder not found".into()),
            UseCaseError::StorageError(msg) => Self::InternalError(msg),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let reminder_id = self
            .reminder_id
            .parse::<ID>()
            .map_err(|e| UseCaseError::MalformedId(e.to_string()))?;

        match ctx.repos.reminders.delete(&reminder_id).await {
            Ok(Some(reminder)) => Ok(reminder),
            Ok(None) => Err(UseCaseError::NotFound),
            Err(e) => Err(UseCaseError::StorageError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::{http::StatusCode, ResponseError};

    #[actix_web::main]
    #[test]
    async fn deletes_reminder_once() {
        let ctx = ReminderContext::create_inmemory();
        let reminder = Reminder::new(1000);
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let mut usecase = DeleteReminderUseCase {
            reminder_id: reminder.id.to_string(),
        };
        let deleted = usecase.execute(&ctx).await.expect("To delete reminder");
        assert_eq!(deleted, reminder);
        assert!(ctx.repos.reminders.find_all().await.unwrap().is_empty());

        let err = AppError::from(usecase.execute(&ctx).await.unwrap_err());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Reminder not found");
    }

    #[actix_web::main]
    #[test]
    async fn malformed_id_is_internal_error() {
        let ctx = ReminderContext::create_inmemory();
        let mut usecase = DeleteReminderUseCase {
            reminder_id: "not-an-id".into(),
        };

        let err = AppError::from(usecase.execute(&ctx).await.unwrap_err());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "ID: not-an-id is malformed");
    }
}
