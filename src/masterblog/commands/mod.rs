use crate::config::BlogConfig;
use crate::model::Post;

pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod search;
pub mod sort;
pub mod update;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, content)
    }
}

/// What an API call hands back to its client: the posts it touched, the
/// posts it lists, and anything worth telling the user.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_posts: Vec<Post>,
    pub listed_posts: Vec<Post>,
    pub config: Option<BlogConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_posts(mut self, posts: Vec<Post>) -> Self {
        self.affected_posts = posts;
        self
    }

    pub fn with_listed_posts(mut self, posts: Vec<Post>) -> Self {
        self.listed_posts = posts;
        self
    }

    pub fn with_config(mut self, config: BlogConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_helpers_match_new() {
        let built = CmdMessage::new(MessageLevel::Warning, "careful");
        let helper = CmdMessage::warning("careful");
        assert_eq!(built.level, helper.level);
        assert_eq!(built.content, helper.content);
        assert_eq!(CmdMessage::info("x").level, MessageLevel::Info);
        assert_eq!(CmdMessage::error("x").level, MessageLevel::Error);
    }

    #[test]
    fn builders_accumulate_messages() {
        let mut result = CmdResult::default().with_message(CmdMessage::success("done"));
        result.add_message(CmdMessage::info("note"));
        let levels: Vec<_> = result.messages.iter().map(|m| m.level).collect();
        assert_eq!(levels, vec![MessageLevel::Success, MessageLevel::Info]);
    }
}
