use crate::error::Result;
use crate::model::{FieldMap, Post};
use crate::store::PostStore;
use crate::validation::{next_id, validate_new_post};
use tracing::{info, warn};

/// Validates `fields`, appends the new post and persists the collection.
///
/// Validation runs before the store is touched, so a rejected create never
/// loads or saves anything.
pub fn run<S: PostStore>(store: &mut S, fields: &FieldMap) -> Result<Post> {
    let new = validate_new_post(fields).inspect_err(|err| {
        warn!(kind = %err.kind(), "create rejected");
    })?;

    let mut posts = store.load()?;
    let post = Post::new(next_id(&posts)?, new.title, new.content);
    posts.push(post.clone());
    store.save(&posts)?;

    info!(id = post.id, "post created");
    Ok(post)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::fields;
    use crate::commands::{delete, list};
    use crate::error::BlogError;
    use crate::model::Field;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use serde_json::json;

    #[test]
    fn first_post_gets_id_one() {
        let mut store = InMemoryStore::new();
        let post = run(&mut store, &fields("Hello", "World")).unwrap();
        assert_eq!(post, Post::new(1, "Hello".into(), "World".into()));
        assert_eq!(store.posts(), &[post]);
    }

    #[test]
    fn ids_always_exceed_every_previous_id() {
        let mut store = InMemoryStore::new();
        let mut seen = Vec::new();
        for i in 0..5 {
            let post = run(&mut store, &fields(&format!("T{i}"), "c")).unwrap();
            assert!(seen.iter().all(|&prev| post.id > prev));
            assert_eq!(post.id, seen.iter().max().map_or(1, |m| m + 1));
            seen.push(post.id);
        }
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = InMemoryStore::new();
        assert_eq!(run(&mut store, &fields("A", "x")).unwrap().id, 1);
        assert_eq!(run(&mut store, &fields("B", "y")).unwrap().id, 2);
        delete::run(&mut store, 1).unwrap();
        assert_eq!(run(&mut store, &fields("C", "z")).unwrap().id, 3);

        let ids: Vec<_> = list::run(&store).unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn id_follows_storage_edited_externally() {
        let mut store = StoreFixture::new().with_post(40, "Old", "post").build();
        assert_eq!(run(&mut store, &fields("New", "post")).unwrap().id, 41);

        store.replace(vec![Post::new(7, "Seven".into(), "s".into())]);
        assert_eq!(run(&mut store, &fields("Next", "n")).unwrap().id, 8);
    }

    #[test]
    fn blank_fields_leave_collection_unchanged() {
        let mut store = StoreFixture::new().with_posts(2).build();

        let err = run(&mut store, &fields("   ", "body")).unwrap_err();
        assert!(matches!(err, BlogError::EmptyField(Field::Title)));
        let err = run(&mut store, &fields("title", "")).unwrap_err();
        assert!(matches!(err, BlogError::EmptyField(Field::Content)));

        assert_eq!(store.posts().len(), 2);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut store = InMemoryStore::new();
        let mut input = fields("T", "C");
        input.insert("author".into(), json!("me"));

        let err = run(&mut store, &input).unwrap_err();
        assert!(matches!(err, BlogError::UnknownField(name) if name == "author"));
        assert!(store.posts().is_empty());
    }

    #[test]
    fn failed_save_surfaces_storage_unavailable() {
        let mut store = StoreFixture::new().with_posts(1).build();
        store.fail_saves(true);

        let err = run(&mut store, &fields("T", "C")).unwrap_err();
        assert!(matches!(err, BlogError::StorageUnavailable(_)));
        assert_eq!(store.posts().len(), 1);
    }

    #[test]
    fn exhausted_id_space_fails_without_saving() {
        let mut store = StoreFixture::new()
            .with_post(u64::MAX, "Last", "post")
            .build();

        let err = run(&mut store, &fields("T", "C")).unwrap_err();
        assert!(matches!(err, BlogError::StorageUnavailable(_)));
        assert_eq!(store.posts().len(), 1);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn stores_trimmed_values() {
        let mut store = InMemoryStore::new();
        let post = run(&mut store, &fields("  spaced  out ", " body ")).unwrap();
        assert_eq!(post.title, "spaced  out");
        assert_eq!(post.content, "body");
    }
}
