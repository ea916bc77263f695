mod error;
mod frontend;
mod reminder;
mod shared;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use error::json_error_handler;
use reminder_app_infra::ReminderContext;
use std::net::TcpListener;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    reminder::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: ReminderContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        Application::start_connection_supervisor(context);

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Connects the storage in the background, the server does not wait for it.
    /// Requests that need the storage fail until the connection is made.
    fn start_connection_supervisor(context: ReminderContext) {
        if let Some(mut supervisor) = context.connection_supervisor() {
            actix_web::rt::spawn(async move { supervisor.run().await });
        }
    }

    async fn configure_server(context: ReminderContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();
            let static_dir = ctx.config.static_dir.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .service(web::scope("/api").configure(configure_server_api))
                .configure(|cfg| frontend::configure_routes(cfg, &static_dir))
        })
        .listen(listener)?
        // A single worker, storage calls are the only points where a request yields
        .workers(1)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        info!("Server is running on http://localhost:{}", self.port);
        self.server.await
    }
}
