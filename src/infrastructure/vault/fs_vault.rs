use std::path::PathBuf;
use std::sync::Arc;

use futures::StreamExt;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutMode, PutPayload};

use crate::application::ports::{Vault, VaultError};
use crate::domain::VaultPath;

/// `Vault` over a local directory tree.
pub struct FsVault {
    inner: Arc<LocalFileSystem>,
}

impl FsVault {
    pub fn new(root: PathBuf) -> Result<Self, VaultError> {
        let fs = LocalFileSystem::new_with_prefix(&root)
            .map_err(|e| VaultError::ReadFailed(format!("vault root {}: {}", root.display(), e)))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }

    fn store_path(path: &VaultPath) -> StorePath {
        StorePath::from(path.as_str())
    }
}

#[async_trait::async_trait]
impl Vault for FsVault {
    async fn read_note(&self, path: &VaultPath) -> Result<String, VaultError> {
        let bytes = self.read_binary(path).await?;
        String::from_utf8(bytes).map_err(|e| VaultError::ReadFailed(format!("{path}: {e}")))
    }

    async fn write_note(&self, path: &VaultPath, content: &str) -> Result<(), VaultError> {
        self.inner
            .put(
                &Self::store_path(path),
                PutPayload::from(content.as_bytes().to_vec()),
            )
            .await
            .map_err(|e| VaultError::WriteFailed(format!("{path}: {e}")))?;
        Ok(())
    }

    async fn create_note(&self, path: &VaultPath, content: &str) -> Result<(), VaultError> {
        let result = self
            .inner
            .put_opts(
                &Self::store_path(path),
                PutPayload::from(content.as_bytes().to_vec()),
                PutMode::Create.into(),
            )
            .await;
        match result {
            Ok(_) => Ok(()),
            Err(object_store::Error::AlreadyExists { .. }) => {
                Err(VaultError::AlreadyExists(path.to_string()))
            }
            Err(e) => Err(VaultError::WriteFailed(format!("{path}: {e}"))),
        }
    }

    async fn exists(&self, path: &VaultPath) -> Result<bool, VaultError> {
        match self.inner.head(&Self::store_path(path)).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(VaultError::ReadFailed(format!("{path}: {e}"))),
        }
    }

    async fn list_files(&self) -> Result<Vec<VaultPath>, VaultError> {
        let mut stream = self.inner.list(None);
        let mut files = Vec::new();
        while let Some(entry) = stream.next().await {
            let meta = entry.map_err(|e| VaultError::ReadFailed(format!("list: {e}")))?;
            files.push(VaultPath::new(meta.location.to_string()));
        }
        Ok(files)
    }

    async fn read_binary(&self, path: &VaultPath) -> Result<Vec<u8>, VaultError> {
        let result = match self.inner.get(&Self::store_path(path)).await {
            Ok(r) => r,
            Err(object_store::Error::NotFound { .. }) => {
                return Err(VaultError::NotFound(path.to_string()));
            }
            Err(e) => return Err(VaultError::ReadFailed(format!("{path}: {e}"))),
        };
        let bytes = result
            .bytes()
            .await
            .map_err(|e| VaultError::ReadFailed(format!("{path}: {e}")))?;
        Ok(bytes.to_vec())
    }
}
