//! # Storage Layer
//!
//! The [`PostStore`] trait is the whole contract between the repository and
//! whatever holds the posts durably: load the full collection, save the full
//! collection. No incremental diffs, no per-post operations.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: Production storage
//!   - One JSON array of posts, e.g. `masterblog_posts.json`
//!   - Writes go to a temp file that is renamed over the target
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can be told to fail loads or saves
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── masterblog_posts.json   # [{"id": 1, "title": "...", "content": "..."}, ...]
//! └── config.json             # BlogConfig
//! ```

use crate::error::Result;
use crate::model::Post;

pub mod fs;
pub mod memory;

/// Abstract interface for post storage.
///
/// A missing or empty medium loads as an empty collection. `save` must be
/// all-or-nothing: a later `load` sees either the old or the new snapshot.
pub trait PostStore {
    /// Read the full collection, in stored order.
    fn load(&self) -> Result<Vec<Post>>;

    /// Replace the full collection.
    fn save(&mut self, posts: &[Post]) -> Result<()>;
}
