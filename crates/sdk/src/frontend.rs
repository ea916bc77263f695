use crate::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct FrontendClient {
    base: Arc<BaseClient>,
}

impl FrontendClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// The index document served at the root path
    pub async fn index(&self) -> APIResponse<String> {
        self.base.get_text("".into(), StatusCode::OK).await
    }
}
