use anyhow::Result;
use async_trait::async_trait;

use crate::request::ImageUpload;

#[async_trait]
pub trait ImageHostPort: Send + Sync {
    /// Upload an image and return its public URL.
    async fn upload(&self, image: &ImageUpload) -> Result<String>;
}
