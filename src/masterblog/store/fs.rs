use super::PostStore;
use crate::error::{Result, StorageError};
use crate::model::Post;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct JsonFileStore {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StorageError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "posts".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl PostStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Post>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no posts file yet");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(StorageError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let posts: Vec<Post> =
            serde_json::from_str(&content).map_err(StorageError::Serialization)?;
        debug!(path = %self.path.display(), count = posts.len(), "loaded posts");
        Ok(posts)
    }

    fn save(&mut self, posts: &[Post]) -> Result<()> {
        self.ensure_parent()?;

        let content = if self.pretty {
            serde_json::to_string_pretty(posts)
        } else {
            serde_json::to_string(posts)
        }
        .map_err(StorageError::Serialization)?;

        // Write then rename, so readers never observe a half-written file
        let tmp_file = self.tmp_path();
        fs::write(&tmp_file, content).map_err(StorageError::Io)?;
        if let Err(err) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(StorageError::Io(err).into());
        }

        debug!(path = %self.path.display(), count = posts.len(), "saved posts");
        Ok(())
    }
}
