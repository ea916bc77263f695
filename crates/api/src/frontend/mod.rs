use actix_files::{Files, NamedFile};
use actix_web::web;
use reminder_app_infra::ReminderContext;
use std::path::Path;

/// The front-end does not need the database, so this keeps working
/// while the storage is still connecting.
async fn index(ctx: web::Data<ReminderContext>) -> actix_web::Result<NamedFile> {
    let path = Path::new(&ctx.config.static_dir).join("index.html");
    Ok(NamedFile::open_async(path).await?)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, static_dir: &str) {
    cfg.route("/", web::get().to(index));
    cfg.service(Files::new("/", static_dir));
}
