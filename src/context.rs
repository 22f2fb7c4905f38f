//! Board Context
//!
//! View state and flows shared through the Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::HttpApi;
use crate::config::BoardConfig;
use crate::flows::{self, BoardView};
use crate::models::Activities;
use crate::store::{self, BoardStore, MessageKind};

pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

/// Handles passed to every flow instead of looking elements up globally
#[derive(Clone, Copy)]
pub struct BoardContext {
    pub store: BoardStore,
    config: StoredValue<BoardConfig>,
}

impl BoardContext {
    pub fn new(store: BoardStore, config: BoardConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    pub fn api(&self) -> HttpApi {
        HttpApi::new(self.config.with_value(|c| c.api_base.clone()))
    }

    /// Fetch the activity set and replace what is rendered.
    ///
    /// Not serialized: when loads overlap, the last response to arrive wins.
    pub fn reload(&self) {
        let ctx = *self;
        spawn_local(async move {
            flows::load_activities(&ctx.api(), &ctx).await;
        });
    }
}

impl BoardView for BoardContext {
    fn replace_activities(&self, activities: Activities) {
        store::store_replace_activities(&self.store, activities);
    }

    fn mark_load_failed(&self) {
        store::store_mark_load_failed(&self.store);
    }

    fn notify(&self, text: String, kind: MessageKind) {
        let store = self.store;
        let delay = self.config.with_value(|c| c.message_hide_delay);
        let token = store::store_show_message(&store, text, kind);
        spawn_local(async move {
            let hidden = flows::hide_message_after(delay, gloo_timers::future::sleep, || {
                store::store_expire_message(&store, token)
            })
            .await;
            if !hidden {
                log::debug!("[BOARD] Message {} superseded before hide", token);
            }
        });
    }
}
