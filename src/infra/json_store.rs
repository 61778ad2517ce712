use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::model::collection::Collection;
use crate::domain::repository::CollectionRepository;

#[derive(Debug, thiserror::Error)]
pub enum JsonStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSONファイルによるCollectionRepository実装。
/// 1 Collection = 1 JSONファイル（Bookの配列、4スペースインデント）。
pub struct JsonCollectionRepository {
    path: PathBuf,
}

impl JsonCollectionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CollectionRepository for JsonCollectionRepository {
    type Error = JsonStoreError;

    fn load(&self) -> Result<Option<Collection>, Self::Error> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let collection: Collection = serde_json::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), books = collection.len(), "collection loaded");
        Ok(Some(collection))
    }

    fn save(&self, collection: &Collection) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = to_pretty_json(collection)?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, &content)?;
        std::fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), books = collection.len(), "collection saved");
        Ok(())
    }
}

fn to_pretty_json(collection: &Collection) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    collection.serialize(&mut ser)?;
    Ok(buf)
}
