//! Field validation and identifier assignment.
//!
//! Create is strict: exactly `title` and `content`, both non-blank. Update is
//! lenient: unknown names are ignored and blank values mean "leave as is".
//! Both paths trim surrounding whitespace and keep internal whitespace.

use crate::error::{BlogError, Result, StorageError};
use crate::model::{Field, FieldMap, NewPost, Post, PostPatch};
use serde_json::Value;

/// Renders a proposed value as text. JSON `null` counts as blank.
pub fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Trimmed text of `value`, or `None` when nothing is left after trimming.
fn non_blank(value: &Value) -> Option<String> {
    let text = coerce_text(value);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Checks a candidate field set for creation.
///
/// Unknown names are reported first, then `title` before `content`, each
/// either missing or blank.
pub fn validate_new_post(fields: &FieldMap) -> Result<NewPost> {
    if let Some(unknown) = fields.keys().find(|name| Field::from_name(name).is_none()) {
        return Err(BlogError::UnknownField(unknown.clone()));
    }

    let title = required(fields, Field::Title)?;
    let content = required(fields, Field::Content)?;
    Ok(NewPost { title, content })
}

fn required(fields: &FieldMap, field: Field) -> Result<String> {
    let value = fields
        .get(field.name())
        .ok_or(BlogError::MissingField(field))?;
    non_blank(value).ok_or(BlogError::EmptyField(field))
}

/// Extracts the fields an update should overwrite. Never fails.
pub fn post_patch(fields: &FieldMap) -> PostPatch {
    let pick = |field: Field| fields.get(field.name()).and_then(non_blank);
    PostPatch {
        title: pick(Field::Title),
        content: pick(Field::Content),
    }
}

/// Next identifier for the live collection: one past the largest id, or 1.
///
/// Derived from the posts every time so external edits to storage are
/// honoured and deleted ids are never handed out again while a larger one
/// survives. Fails once the largest id is `u64::MAX`.
pub fn next_id(posts: &[Post]) -> Result<u64> {
    match posts.iter().map(|p| p.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or_else(|| {
            BlogError::StorageUnavailable(StorageError::Unavailable(
                "id space exhausted".to_string(),
            ))
        }),
    }
}
