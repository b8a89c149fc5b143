use colored::Colorize;
use masterblog::api::MessageLevel;
use masterblog::commands::CmdMessage;
use masterblog::config::BlogConfig;
use masterblog::error::{Result, StorageError};
use masterblog::model::Post;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 6;
const TITLE_WIDTH: usize = 32;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_posts(posts: &[Post], json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(posts).map_err(StorageError::Serialization)?;
        println!("{}", out);
        return Ok(());
    }

    if posts.is_empty() {
        println!("No posts found.");
        return Ok(());
    }

    for post in posts {
        println!("{}", format_row(post));
    }
    Ok(())
}

/// A created or updated post as a bare JSON object.
pub(super) fn print_post(post: &Post) -> Result<()> {
    let out = serde_json::to_string_pretty(post).map_err(StorageError::Serialization)?;
    println!("{}", out);
    Ok(())
}

/// JSON acknowledgement for a delete, shaped like `{"message": "..."}`.
pub(super) fn print_deleted(messages: &[CmdMessage]) -> Result<()> {
    let message = messages
        .first()
        .map(|m| m.content.as_str())
        .unwrap_or_default();
    let out = serde_json::to_string_pretty(&serde_json::json!({ "message": message }))
        .map_err(StorageError::Serialization)?;
    println!("{}", out);
    Ok(())
}

pub(super) fn print_config(config: &BlogConfig) {
    for key in BlogConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn format_row(post: &Post) -> String {
    let id = format!("{:>width$}. ", post.id, width = ID_WIDTH - 2);
    let title = fit(&flatten(&post.title), TITLE_WIDTH);
    let padding = TITLE_WIDTH.saturating_sub(title.width());
    let available = LINE_WIDTH.saturating_sub(ID_WIDTH + TITLE_WIDTH + 1);
    let preview = fit(&flatten(&post.content), available);

    format!(
        "{}{}{} {}",
        id.yellow(),
        title.bold(),
        " ".repeat(padding),
        preview.dimmed()
    )
}

fn flatten(s: &str) -> String {
    s.chars()
        .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
        .collect()
}

fn fit(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_keeps_short_strings() {
        assert_eq!(fit("hello", 10), "hello");
    }

    #[test]
    fn fit_truncates_by_display_width() {
        assert_eq!(fit("abcdefgh", 5), "abcd…");
        assert_eq!(fit("日本語テキスト", 6), "日本…");
    }

    #[test]
    fn rows_flatten_newlines() {
        colored::control::set_override(false);
        let row = format_row(&Post::new(12, "Title".into(), "line one\nline two".into()));
        assert!(row.starts_with("  12. Title"));
        assert!(row.ends_with("line one line two"));
    }
}
