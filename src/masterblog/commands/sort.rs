//! Ordering posts by a text field.
//!
//! Ascending is a stable sort on the field's string value. Descending is that
//! same ascending result reversed as a whole, so posts with equal keys come
//! out in reverse collection order rather than keeping their relative order.

use crate::error::{BlogError, Result};
use crate::model::{Field, Post};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Content,
}

impl SortKey {
    pub fn field(&self) -> Field {
        match self {
            SortKey::Title => Field::Title,
            SortKey::Content => Field::Content,
        }
    }
}

impl FromStr for SortKey {
    type Err = BlogError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "title" => Ok(SortKey::Title),
            "content" => Ok(SortKey::Content),
            other => Err(BlogError::InvalidSortKey(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl FromStr for Direction {
    type Err = BlogError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            other => Err(BlogError::InvalidDirection(other.to_string())),
        }
    }
}

/// Raw sort parameters as a client sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortQuery {
    pub key: Option<String>,
    pub direction: Option<String>,
}

impl SortQuery {
    pub fn new(key: Option<String>, direction: Option<String>) -> Self {
        Self { key, direction }
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_none() && self.direction.is_none()
    }

    /// Validates whichever parameters are present.
    ///
    /// Returns `None` when the collection order should be kept: nothing was
    /// requested, or only a direction was. A key without a direction sorts
    /// ascending.
    pub fn resolve(&self) -> Result<Option<(SortKey, Direction)>> {
        if self.is_empty() {
            return Ok(None);
        }

        let key = self.key.as_deref().map(SortKey::from_str).transpose()?;
        let direction = self
            .direction
            .as_deref()
            .map(Direction::from_str)
            .transpose()?;

        Ok(key.map(|key| (key, direction.unwrap_or_default())))
    }
}

/// Orders `posts` as `query` asks, or leaves them in place.
pub fn run(posts: Vec<Post>, query: &SortQuery) -> Result<Vec<Post>> {
    Ok(match query.resolve()? {
        Some((key, direction)) => sort_posts(posts, key, direction),
        None => posts,
    })
}

pub fn sort_posts(mut posts: Vec<Post>, key: SortKey, direction: Direction) -> Vec<Post> {
    let field = key.field();
    posts.sort_by(|a, b| a.field(field).cmp(b.field(field)));
    if direction == Direction::Desc {
        posts.reverse();
    }
    posts
}
