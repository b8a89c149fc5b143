//! # API Facade
//!
//! [`BlogApi`] is the post repository: the single owner of the collection and
//! the entry point every client (CLI, HTTP handler, tests) goes through.
//!
//! ## Role and Responsibilities
//!
//! - **Serializes access**: the store sits behind a mutex, and each operation
//!   holds it across its whole load → mutate → save sequence, so two
//!   concurrent mutations can never interleave and lose an update.
//! - **Dispatches** to the command functions in [`crate::commands`].
//! - **Returns structured types** (`Result<CmdResult>`), never strings for
//!   display and never terminal output.
//!
//! ## Generic Over PostStore
//!
//! - Production: `BlogApi<JsonFileStore>`
//! - Testing: `BlogApi<InMemoryStore>`
//!
//! API tests check dispatch and locking. Business rules are tested in the
//! command modules.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::{BlogError, Result};
use crate::model::FieldMap;
use crate::store::PostStore;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

pub struct BlogApi<S: PostStore> {
    store: Mutex<S>,
    data_dir: Option<PathBuf>,
}

impl<S: PostStore> BlogApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Mutex::new(store),
            data_dir: None,
        }
    }

    /// Directory holding `config.json`, needed only by [`BlogApi::config`].
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    pub fn create_post(&self, fields: &FieldMap) -> Result<CmdResult> {
        let post = commands::create::run(&mut *self.store.lock(), fields)?;
        Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!(
                "Post created ({}): {}",
                post.id, post.title
            )))
            .with_affected_posts(vec![post]))
    }

    pub fn update_post(&self, id: u64, fields: &FieldMap) -> Result<CmdResult> {
        let post = commands::update::run(&mut *self.store.lock(), id, fields)?;
        Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!(
                "Post updated ({}): {}",
                post.id, post.title
            )))
            .with_affected_posts(vec![post]))
    }

    pub fn delete_post(&self, id: u64) -> Result<CmdResult> {
        let post = commands::delete::run(&mut *self.store.lock(), id)?;
        Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!(
                "Post with id {} has been deleted successfully.",
                id
            )))
            .with_affected_posts(vec![post]))
    }

    /// All posts, in creation order unless `sort` asks otherwise.
    pub fn list_posts(&self, sort: &SortQuery) -> Result<CmdResult> {
        let posts = commands::list::run(&*self.store.lock())?;
        let posts = commands::sort::run(posts, sort)?;
        Ok(CmdResult::default().with_listed_posts(posts))
    }

    pub fn search_posts(&self, query: &SearchQuery) -> Result<CmdResult> {
        let posts = commands::list::run(&*self.store.lock())?;
        let found = commands::search::run(&posts, query);
        let mut result = CmdResult::default();
        if query.is_empty() {
            result.add_message(CmdMessage::warning(
                "No search terms given; pass a title and/or content query.",
            ));
        }
        Ok(result.with_listed_posts(found))
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        let dir = self
            .data_dir
            .as_deref()
            .ok_or_else(|| BlogError::Config("No data directory configured".to_string()))?;
        commands::config::run(dir, action)
    }

    pub fn into_store(self) -> S {
        self.store.into_inner()
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::search::SearchQuery;
pub use crate::commands::sort::{Direction, SortKey, SortQuery};
pub use crate::commands::MessageLevel;
