//! In-process stand-in for the external image host.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use storefront_core::assets::{AssetError, AssetHost, Result};
use storefront_core::catalog::{Photo, PhotoUpload};

/// Folder every uploaded asset is placed under.
const ASSET_FOLDER: &str = "storefront";

/// Keeps uploaded bytes in memory and hands out URLs under `base_url`.
#[derive(Debug, Clone)]
pub struct InMemoryAssetHost {
    base_url: String,
    assets: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryAssetHost {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            assets: Arc::default(),
        }
    }

    /// Returns true if an asset with `public_id` is stored.
    pub async fn contains(&self, public_id: &str) -> bool {
        self.assets.read().await.contains_key(public_id)
    }

    /// Number of stored assets.
    pub async fn len(&self) -> usize {
        self.assets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.assets.read().await.is_empty()
    }
}

#[async_trait]
impl AssetHost for InMemoryAssetHost {
    /// Either every file is stored or none is.
    async fn upload(&self, files: &[PhotoUpload]) -> Result<Vec<Photo>> {
        if let Some(file) = files.iter().find(|f| !f.mime_type.starts_with("image/")) {
            return Err(AssetError::UploadFailed(format!(
                "unsupported content type {}",
                file.mime_type
            )));
        }

        let mut assets = self.assets.write().await;
        let photos = files
            .iter()
            .map(|file| {
                let public_id = format!("{ASSET_FOLDER}/{}", Uuid::new_v4());
                assets.insert(public_id.clone(), file.bytes.clone());
                let url = format!("{}/{public_id}", self.base_url);
                Photo::new(public_id, url)
            })
            .collect();

        tracing::debug!(count = files.len(), "Assets uploaded");
        Ok(photos)
    }

    /// Unknown ids are skipped.
    async fn delete(&self, public_ids: &[String]) -> Result<()> {
        let mut assets = self.assets.write().await;
        for public_id in public_ids {
            assets.remove(public_id);
        }

        tracing::debug!(count = public_ids.len(), "Assets deleted");
        Ok(())
    }
}
