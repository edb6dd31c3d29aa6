use chrono::{DateTime, Local};

use super::AccentColor;

/// A reaction pill under a message.
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    pub emoji: String,
    pub count: u32,
}

impl Reaction {
    pub fn new(emoji: impl Into<String>, count: u32) -> Self {
        Self {
            emoji: emoji.into(),
            count,
        }
    }
}

/// One message in a channel feed.
///
/// Doubles as the seed entity for a thread page: the message id keys the
/// page in the [`PageStore`](crate::wiki::PageStore) and the message text
/// becomes the page's initial heading.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadMessage {
    pub id: String,
    pub author: String,
    /// Single-character display avatar.
    pub avatar: String,
    pub color: AccentColor,
    pub content: String,
    pub sent_at: DateTime<Local>,
    pub reactions: Vec<Reaction>,
}

impl ThreadMessage {
    pub fn new(
        id: impl Into<String>,
        author: impl Into<String>,
        avatar: impl Into<String>,
        color: AccentColor,
        content: impl Into<String>,
        sent_at: DateTime<Local>,
    ) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            avatar: avatar.into(),
            color,
            content: content.into(),
            sent_at,
            reactions: Vec::new(),
        }
    }

    pub fn with_reactions(mut self, reactions: Vec<Reaction>) -> Self {
        self.reactions = reactions;
        self
    }

    /// "Today at 2:14 PM" for same-day messages, "Mar 4 at 2:14 PM"
    /// otherwise.
    pub fn display_time(&self) -> String {
        if self.sent_at.date_naive() == Local::now().date_naive() {
            format!("Today at {}", self.sent_at.format("%-I:%M %p"))
        } else {
            self.sent_at.format("%b %-d at %-I:%M %p").to_string()
        }
    }
}
