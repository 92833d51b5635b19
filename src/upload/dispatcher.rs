use crate::config::UploadConfig;
use crate::upload::types::{SelectedFile, UploadError, UploadReply};
use reqwest::multipart::{Form, Part};
use tracing::debug;

/// Sends one file per call to the configured upload endpoint.
///
/// Uses the client's default timeouts; nothing is retried.
#[derive(Clone)]
pub struct UploadDispatcher {
    client: reqwest::Client,
    endpoint: String,
    field_name: String,
}

impl UploadDispatcher {
    pub fn new(endpoint: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            field_name: field_name.into(),
        }
    }

    pub fn from_config(config: &UploadConfig) -> Self {
        Self::new(config.endpoint.clone(), config.field_name.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn send(&self, file: &SelectedFile) -> Result<UploadReply, UploadError> {
        let part = Part::bytes(file.content.to_vec())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)?;
        let form = Form::new().part(self.field_name.clone(), part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        // Status code is not inspected, only the body.
        let status = response.status();
        let body = response.bytes().await?;
        debug!(%status, bytes = body.len(), "Upload response received");

        UploadReply::parse(&body)
    }
}
