pub mod usecase;

use actix_web::web;

/// Request body sent either as json or as an urlencoded form
pub type JsonOrForm<T> = web::Either<web::Json<T>, web::Form<T>>;

pub fn body_of<T>(body: JsonOrForm<T>) -> T {
    match body {
        web::Either::Left(json) => json.into_inner(),
        web::Either::Right(form) => form.into_inner(),
    }
}
