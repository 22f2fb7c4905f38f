//! Board Configuration
//!
//! Defaults suit a page served from the same origin as the API. A host page
//! can override them with `<meta>` tags:
//!
//! ```html
//! <meta name="activity-board:api-base" content="http://localhost:8000">
//! <meta name="activity-board:message-hide-ms" content="5000">
//! <meta name="activity-board:log-level" content="debug">
//! ```

use std::str::FromStr;
use std::time::Duration;

const META_API_BASE: &str = "activity-board:api-base";
const META_MESSAGE_HIDE_MS: &str = "activity-board:message-hide-ms";
const META_LOG_LEVEL: &str = "activity-board:log-level";

/// How long a banner message stays visible
pub const DEFAULT_MESSAGE_HIDE_DELAY: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Prefix for API paths, without trailing slash. Empty means same origin.
    pub api_base: String,
    pub message_hide_delay: Duration,
    pub log_level: log::Level,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            message_hide_delay: DEFAULT_MESSAGE_HIDE_DELAY,
            log_level: log::Level::Info,
        }
    }
}

impl BoardConfig {
    /// Build from a meta-tag lookup. Unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(base) = lookup(META_API_BASE) {
            config.api_base = base.trim().trim_end_matches('/').to_string();
        }
        if let Some(ms) = lookup(META_MESSAGE_HIDE_MS).and_then(|v| v.trim().parse::<u64>().ok()) {
            config.message_hide_delay = Duration::from_millis(ms);
        }
        if let Some(level) = lookup(META_LOG_LEVEL).and_then(|v| log::Level::from_str(v.trim()).ok()) {
            config.log_level = level;
        }
        config
    }

    /// Read overrides from the current document's `<meta>` tags
    pub fn from_document() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        Self::from_lookup(|name| {
            document
                .as_ref()?
                .query_selector(&format!("meta[name=\"{}\"]", name))
                .ok()??
                .get_attribute("content")
        })
    }
}
