//! FAQ chat widget state: panel open/closed, the one-time greeting and the
//! message feed with its transient "typing" placeholders.

use crate::lang::Lang;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Delay between a question and its canned answer.
pub const TYPING_DELAY_MS: u32 = 600;
/// Interval of the avatar frame rotation.
pub const AVATAR_FRAME_MS: u32 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// Handle to a typing placeholder that is waiting for its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTicket(u32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEntry {
    Message(ChatMessage),
    Typing(TypingTicket),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatWidget {
    panel: PanelState,
    greeted: bool,
    feed: Vec<FeedEntry>,
    next_ticket: u32,
}

impl ChatWidget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn panel(&self) -> PanelState {
        self.panel
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.panel, PanelState::Open)
    }

    #[must_use]
    pub fn feed(&self) -> &[FeedEntry] {
        &self.feed
    }

    /// Messages only, without typing placeholders.
    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.feed.iter().filter_map(|entry| match entry {
            FeedEntry::Message(m) => Some(m),
            FeedEntry::Typing(_) => None,
        })
    }

    /// Open the panel. The first open of the widget's lifetime posts `greeting`.
    pub fn open(&mut self, greeting: &str) {
        self.panel = PanelState::Open;
        if !self.greeted {
            self.greeted = true;
            self.push(ChatRole::Bot, greeting);
        }
    }

    pub fn close(&mut self) {
        self.panel = PanelState::Closed;
    }

    pub fn toggle(&mut self, greeting: &str) {
        if self.is_open() {
            self.close();
        } else {
            self.open(greeting);
        }
    }

    /// Post the user's question followed by a typing placeholder.
    pub fn ask(&mut self, question: &str) -> TypingTicket {
        self.push(ChatRole::User, question);
        let ticket = TypingTicket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.feed.push(FeedEntry::Typing(ticket));
        ticket
    }

    /// Replace the placeholder for `ticket` with the bot's answer.
    pub fn answer(&mut self, ticket: TypingTicket, answer: &str) {
        self.feed
            .retain(|entry| !matches!(entry, FeedEntry::Typing(t) if *t == ticket));
        self.push(ChatRole::Bot, answer);
    }

    fn push(&mut self, role: ChatRole, text: &str) {
        self.feed.push(FeedEntry::Message(ChatMessage {
            role,
            text: text.to_string(),
        }));
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Per-language copy of the chat widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqScript {
    pub name: String,
    pub subtitle: String,
    pub greeting: String,
    pub typing: String,
    pub entries: Vec<FaqEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FaqBook(BTreeMap<Lang, FaqScript>);

impl FaqBook {
    /// Load the FAQ dataset from JSON keyed by language code.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the FAQ schema.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn script(&self, lang: Lang) -> Option<&FaqScript> {
        self.0.get(&lang)
    }
}

/// Cycles a fixed list of avatar frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarRotator {
    frames: Vec<String>,
    index: usize,
}

impl AvatarRotator {
    #[must_use]
    pub fn new(frames: Vec<String>) -> Self {
        Self { frames, index: 0 }
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.frames.get(self.index).map(String::as_str)
    }

    pub fn advance(&mut self) -> Option<&str> {
        if self.frames.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.frames.len();
        self.current()
    }
}
