//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Activities;

/// Progress of the most recent activity load
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn css_class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// The `#message` banner.
///
/// Every `show` issues a new token. `expire` only hides the banner for the
/// current token, so a timer started for an older message is a no-op.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Banner {
    pub text: String,
    pub kind: Option<MessageKind>,
    pub visible: bool,
    token: u64,
}

impl Banner {
    pub fn show(&mut self, text: String, kind: MessageKind) -> u64 {
        self.token += 1;
        self.text = text;
        self.kind = Some(kind);
        self.visible = true;
        self.token
    }

    /// Returns true if this call hid the banner
    pub fn expire(&mut self, token: u64) -> bool {
        if token != self.token || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn css_class(&self) -> String {
        let kind = self.kind.map(MessageKind::css_class);
        match (kind, self.visible) {
            (Some(kind), true) => kind.to_string(),
            (Some(kind), false) => format!("{} hidden", kind),
            (None, _) => "hidden".to_string(),
        }
    }
}

/// View state shared by every flow of the board
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Activities from the most recent successful fetch
    pub activities: Activities,
    pub load_state: LoadState,
    pub banner: Banner,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the whole activity set after a successful fetch
pub fn store_replace_activities(store: &BoardStore, activities: Activities) {
    *store.activities().write() = activities;
    *store.load_state().write() = LoadState::Ready;
}

/// Mark the list as failed; the selection options keep the last good set
pub fn store_mark_load_failed(store: &BoardStore) {
    *store.load_state().write() = LoadState::Failed;
}

pub fn store_show_message(store: &BoardStore, text: String, kind: MessageKind) -> u64 {
    store.banner().write().show(text, kind)
}

pub fn store_expire_message(store: &BoardStore, token: u64) -> bool {
    store.banner().write().expire(token)
}
