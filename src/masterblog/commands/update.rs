use crate::error::{BlogError, Result};
use crate::model::{FieldMap, Post};
use crate::store::PostStore;
use crate::validation::post_patch;
use tracing::{info, warn};

/// Partially updates the post with `id`.
///
/// Only `title` and `content` are considered. A field that is absent, or
/// blank after trimming, keeps its stored value; any other field name is
/// ignored. Overwritten values are stored trimmed, the same as on create.
/// The collection is persisted even when nothing changed.
pub fn run<S: PostStore>(store: &mut S, id: u64, fields: &FieldMap) -> Result<Post> {
    let mut posts = store.load()?;
    let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
        warn!(id, "update of unknown post");
        return Err(BlogError::NotFound(id));
    };

    post_patch(fields).apply(post);
    let updated = post.clone();
    store.save(&posts)?;

    info!(id, "post updated");
    Ok(updated)
}
