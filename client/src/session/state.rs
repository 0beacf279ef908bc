//! # Session State Types
//!
//! Everything the UI reads: authentication phase, current user, chat list,
//! selected chat, current view and pending notices.

use std::collections::VecDeque;

use shared::dto::{ChatInfo, UserInfo};

/// Authentication phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPhase {
    #[default]
    Anonymous,
    /// A login or registration request is in flight
    Authenticating,
    Authenticated,
}

/// Screen the UI should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A user-visible message (toast), drained by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

/// Client session.
#[derive(Debug, Default)]
pub struct Session {
    pub phase: AuthPhase,
    pub token: Option<String>,
    pub user: Option<UserInfo>,
    /// Most recently updated first, as served
    pub chats: Vec<ChatInfo>,
    /// Id of the selected chat
    pub selected_chat: Option<String>,
    pub view: View,
    notices: VecDeque<Notice>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated
    }

    pub fn selected(&self) -> Option<&ChatInfo> {
        let id = self.selected_chat.as_deref()?;
        self.chats.iter().find(|chat| chat.id == id)
    }

    /// Select a chat by id. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, chat_id: &str) -> bool {
        if self.chats.iter().any(|chat| chat.id == chat_id) {
            self.selected_chat = Some(chat_id.to_string());
            self.view = View::Chat;
            true
        } else {
            false
        }
    }

    /// Replace the chat list, keeping the selection if it still exists and
    /// falling back to the first chat otherwise.
    pub fn set_chats(&mut self, chats: Vec<ChatInfo>) {
        self.chats = chats;
        let still_there = self
            .selected_chat
            .as_deref()
            .is_some_and(|id| self.chats.iter().any(|chat| chat.id == id));
        if !still_there {
            self.selected_chat = self.chats.first().map(|chat| chat.id.clone());
        }
    }

    /// Put `chat` at the top of the list, replacing any older copy.
    pub fn upsert_front(&mut self, chat: ChatInfo) {
        self.chats.retain(|existing| existing.id != chat.id);
        self.chats.insert(0, chat);
    }

    /// Remove a chat; a removed selection moves to the first remaining chat.
    pub fn remove_chat(&mut self, chat_id: &str) {
        self.chats.retain(|chat| chat.id != chat_id);
        if self.selected_chat.as_deref() == Some(chat_id) {
            self.selected_chat = self.chats.first().map(|chat| chat.id.clone());
        }
    }

    /// Chats whose first message (or name, when empty) contains `term`,
    /// ignoring case. An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<&ChatInfo> {
        let term = term.trim();
        self.chats
            .iter()
            .filter(|chat| term.is_empty() || chat.matches(term))
            .collect()
    }

    pub fn push_notice(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notices.push_back(Notice {
            level,
            text: text.into(),
        });
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    /// Back to a logged-out session. Pending notices survive.
    pub fn reset(&mut self) {
        self.phase = AuthPhase::Anonymous;
        self.token = None;
        self.user = None;
        self.chats.clear();
        self.selected_chat = None;
        self.view = View::Login;
    }
}

/// Sidebar title of a chat.
pub fn chat_title(chat: &ChatInfo) -> &str {
    chat.title()
}
