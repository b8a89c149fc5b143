use super::PostStore;
use crate::error::{Result, StorageError};
use crate::model::Post;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    posts: Vec<Post>,
    fail_loads: bool,
    fail_saves: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts,
            ..Self::default()
        }
    }

    /// Make every following `load` fail with `StorageUnavailable`.
    pub fn fail_loads(&mut self, fail: bool) {
        self.fail_loads = fail;
    }

    /// Make every following `save` fail with `StorageUnavailable`.
    pub fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Replace the stored snapshot behind the repository's back.
    pub fn replace(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }
}

impl PostStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Post>> {
        if self.fail_loads {
            return Err(StorageError::Unavailable("in-memory load disabled".into()).into());
        }
        Ok(self.posts.clone())
    }

    fn save(&mut self, posts: &[Post]) -> Result<()> {
        if self.fail_saves {
            return Err(StorageError::Unavailable("in-memory save disabled".into()).into());
        }
        self.posts = posts.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_posts(mut self, count: usize) -> Self {
            let start = self.store.posts.len() as u64;
            for i in 1..=count as u64 {
                let id = start + i;
                self.store.posts.push(Post::new(
                    id,
                    format!("Test Post {}", id),
                    format!("Content for post {}", id),
                ));
            }
            self
        }

        pub fn with_post(mut self, id: u64, title: &str, content: &str) -> Self {
            self.store
                .posts
                .push(Post::new(id, title.to_string(), content.to_string()));
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
