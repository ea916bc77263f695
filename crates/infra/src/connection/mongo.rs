use super::{ConnectionError, IConnector};
use mongodb::{
    bson::doc,
    error::{Error, ErrorKind},
    options::ClientOptions,
    Client, Database,
};
use tracing::info;

/// Used when the connection string does not name a database
const DEFAULT_DATABASE: &str = "reminderapp";

pub struct MongoConnector {}

#[async_trait::async_trait]
impl IConnector for MongoConnector {
    type Connection = Database;

    async fn connect(&self, uri: &str) -> Result<Database, ConnectionError> {
        let client_options = ClientOptions::parse(uri).await?;
        let client = Client::with_options(client_options)?;
        let db = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

        // The driver connects lazily, so the server is only known to be up
        // once it answered a command.
        info!("DB CHECKING CONNECTION ...");
        db.run_command(doc! { "ping": 1 }, None).await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(db)
    }
}

impl From<Error> for ConnectionError {
    fn from(e: Error) -> Self {
        let (name, code) = match e.kind.as_ref() {
            ErrorKind::Command(err) => ("CommandError", Some(err.code)),
            ErrorKind::Authentication { .. } => ("AuthenticationError", None),
            ErrorKind::ServerSelection { .. } => ("ServerSelectionError", None),
            ErrorKind::InvalidArgument { .. } => ("InvalidArgumentError", None),
            ErrorKind::DnsResolve { .. } => ("DnsResolveError", None),
            ErrorKind::Io(_) => ("IoError", None),
            _ => ("MongoError", None),
        };

        Self {
            name: name.into(),
            message: e.to_string(),
            code,
        }
    }
}
