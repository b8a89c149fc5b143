use crate::model::Post;

/// Raw search parameters. Each present query is a case-insensitive
/// substring to look for in the matching field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl SearchQuery {
    pub fn new(title: Option<String>, content: Option<String>) -> Self {
        Self { title, content }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Posts matching the title query, the content query, or both.
///
/// Each post appears at most once, in collection order. With no query at all
/// nothing matches. An empty query string matches every post.
pub fn run(posts: &[Post], query: &SearchQuery) -> Vec<Post> {
    if query.is_empty() {
        return Vec::new();
    }

    let title = query.title.as_deref().map(str::to_lowercase);
    let content = query.content.as_deref().map(str::to_lowercase);

    posts
        .iter()
        .filter(|post| {
            let on_title = title
                .as_deref()
                .is_some_and(|q| post.title.to_lowercase().contains(q));
            on_title
                || content
                    .as_deref()
                    .is_some_and(|q| post.content.to_lowercase().contains(q))
        })
        .cloned()
        .collect()
}
