use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Candidate field set as received from a client, before validation.
pub type FieldMap = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
}

impl Post {
    pub fn new(id: u64, title: String, content: String) -> Self {
        Self { id, title, content }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Content => &self.content,
        }
    }
}

/// The two user-supplied fields of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Content,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Title, Field::Content];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Content => "content",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalized fields for a post about to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

/// Fields an update will overwrite. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    pub fn apply(&self, post: &mut Post) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(content) = &self.content {
            post.content = content.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_keys_in_wire_order() {
        let post = Post::new(3, "Hello".into(), "World".into());
        let json = serde_json::to_string(&post).unwrap();
        assert_eq!(json, r#"{"id":3,"title":"Hello","content":"World"}"#);
    }

    #[test]
    fn field_names_resolve_exactly() {
        assert_eq!(Field::from_name("title"), Some(Field::Title));
        assert_eq!(Field::from_name("content"), Some(Field::Content));
        assert_eq!(Field::from_name("Title"), None);
        assert_eq!(Field::from_name("id"), None);
    }

    #[test]
    fn patch_only_touches_present_fields() {
        let mut post = Post::new(1, "Old".into(), "Body".into());
        let patch = PostPatch {
            title: Some("New".into()),
            content: None,
        };
        patch.apply(&mut post);
        assert_eq!(post.title, "New");
        assert_eq!(post.content, "Body");
    }
}
