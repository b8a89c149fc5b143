use crate::error::{BlogError, Result};
use crate::model::Post;
use crate::store::PostStore;
use tracing::{info, warn};

/// Removes the post with `id` and returns it.
pub fn run<S: PostStore>(store: &mut S, id: u64) -> Result<Post> {
    let mut posts = store.load()?;
    let Some(position) = posts.iter().position(|p| p.id == id) else {
        warn!(id, "delete of unknown post");
        return Err(BlogError::NotFound(id));
    };

    let removed = posts.remove(position);
    store.save(&posts)?;

    info!(id, "post deleted");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_only_the_matching_post() {
        let mut store = StoreFixture::new().with_posts(3).build();
        let removed = run(&mut store, 2).unwrap();
        assert_eq!(removed.id, 2);

        let ids: Vec<_> = list::run(&store).unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn unknown_id_leaves_collection_untouched() {
        let mut store = StoreFixture::new().with_posts(2).build();
        let before = store.posts().to_vec();

        let err = run(&mut store, 5).unwrap_err();
        assert!(matches!(err, BlogError::NotFound(5)));
        assert_eq!(store.posts(), before.as_slice());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn deleted_post_is_gone_for_good() {
        let mut store = StoreFixture::new().with_posts(1).build();
        run(&mut store, 1).unwrap();
        assert!(matches!(run(&mut store, 1), Err(BlogError::NotFound(1))));
    }
}
