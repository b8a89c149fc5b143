use crate::error::Result;
use crate::model::Post;
use crate::store::PostStore;

/// All posts in collection (creation) order.
pub fn run<S: PostStore>(store: &S) -> Result<Vec<Post>> {
    store.load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::commands::test_support::fields;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_in_creation_order() {
        let mut store = InMemoryStore::new();
        create::run(&mut store, &fields("Zebra", "z")).unwrap();
        create::run(&mut store, &fields("Apple", "a")).unwrap();

        let titles: Vec<_> = run(&store).unwrap().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Zebra", "Apple"]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        assert!(run(&InMemoryStore::new()).unwrap().is_empty());
    }
}
