//! # Command Layer
//!
//! Business logic for each user-facing operation. Commands operate on a
//! [`TagStore`](crate::store::TagStore) and return a structured [`CmdResult`];
//! they never print, prompt, or exit. The CLI (or any other front end) decides
//! how to render the result.
//!
//! ## Command Modules
//!
//! - [`tags`]: show, set, and clear the tags of one world book; list all tags
//! - [`filter`]: manage the active filter selection
//! - [`list`]: list world books, narrowed by a filter
//!
//! Tests use [`MemPersister`](crate::store::memory::MemPersister) so nothing
//! touches the filesystem.

use serde::Serialize;

pub mod filter;
pub mod list;
pub mod tags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A world book together with its tags, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldTags {
    pub name: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    /// World books to display, in display order.
    pub worlds: Vec<WorldTags>,
    /// Bare tag list (all tags, or the active filter).
    pub tags: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_worlds(mut self, worlds: Vec<WorldTags>) -> Self {
        self.worlds = worlds;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

pub(crate) fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
