use async_trait::async_trait;

use crate::catalog::{Photo, PhotoUpload};

use super::Result;

/// External host for product images.
#[async_trait]
pub trait AssetHost: Send + Sync {
    /// Uploads every file and returns one [`Photo`] per upload, in order.
    async fn upload(&self, files: &[PhotoUpload]) -> Result<Vec<Photo>>;

    /// Deletes the assets with the given public ids.
    async fn delete(&self, public_ids: &[String]) -> Result<()>;
}
