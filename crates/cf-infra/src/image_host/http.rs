use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, info};

use cf_core::ports::ImageHostPort;
use cf_core::request::ImageUpload;

const UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    url: Option<String>,
}

/// Unsigned multipart upload to a hosted image service.
///
/// Sends `file` and `upload_preset` form fields and reads the public URL
/// from the JSON response (`secure_url`, falling back to `url`).
pub struct HttpImageHost {
    client: reqwest::Client,
    upload_url: String,
    upload_preset: String,
}

impl HttpImageHost {
    pub fn new(upload_url: impl Into<String>, upload_preset: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(UPLOAD_TIMEOUT)
            .build()
            .context("build image host client failed")?;
        Ok(Self::with_client(client, upload_url, upload_preset))
    }

    pub fn with_client(
        client: reqwest::Client,
        upload_url: impl Into<String>,
        upload_preset: impl Into<String>,
    ) -> Self {
        Self {
            client,
            upload_url: upload_url.into(),
            upload_preset: upload_preset.into(),
        }
    }
}

#[async_trait]
impl ImageHostPort for HttpImageHost {
    async fn upload(&self, image: &ImageUpload) -> Result<String> {
        debug!(file = %image.file_name, bytes = image.bytes.len(), "uploading image");

        let part = Part::bytes(image.bytes.to_vec()).file_name(image.file_name.clone());
        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.upload_preset.clone());

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .with_context(|| format!("image upload request failed: {}", self.upload_url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("image upload failed, status: {}: {}", status, body));
        }

        let parsed: UploadResponse = response
            .json()
            .await
            .context("decode image upload response failed")?;
        let url = parsed
            .secure_url
            .or(parsed.url)
            .ok_or_else(|| anyhow!("image upload response carries no url"))?;

        info!(file = %image.file_name, url = %url, "image uploaded");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use mockito::{Matcher, Server};

    fn image() -> ImageUpload {
        ImageUpload {
            file_name: "cover.png".to_string(),
            bytes: Bytes::from_static(b"fake png bytes"),
        }
    }

    #[tokio::test]
    async fn upload_returns_secure_url() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/image/upload")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex("name=\"upload_preset\"".to_string()),
                Matcher::Regex("unsigned-preset".to_string()),
                Matcher::Regex("filename=\"cover.png\"".to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"secure_url":"https://cdn.example/cover.png","url":"http://cdn.example/cover.png"}"#)
            .create_async()
            .await;

        let host = HttpImageHost::new(format!("{}/image/upload", server.url()), "unsigned-preset")
            .unwrap();
        let url = host.upload(&image()).await.unwrap();

        assert_eq!(url, "https://cdn.example/cover.png");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/image/upload")
            .with_status(400)
            .with_body(r#"{"error":{"message":"Upload preset not found"}}"#)
            .create_async()
            .await;

        let host = HttpImageHost::new(format!("{}/image/upload", server.url()), "missing").unwrap();
        let err = host.upload(&image()).await.unwrap_err();

        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("Upload preset not found"));
    }

    #[tokio::test]
    async fn response_without_url_is_an_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/image/upload")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .create_async()
            .await;

        let host = HttpImageHost::new(format!("{}/image/upload", server.url()), "preset").unwrap();
        assert!(host.upload(&image()).await.is_err());
    }
}
