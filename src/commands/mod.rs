//! Activities API Bindings
//!
//! Frontend bindings to the backend HTTP endpoints, organized by domain.

mod activity;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::ApiError;
use crate::models::Activities;

// Re-export all public items
pub use activity::*;

/// The calls the board makes against the Activities API
#[allow(async_fn_in_trait)]
pub trait ActivityApi {
    async fn list_activities(&self) -> Result<Activities, ApiError>;

    async fn change_membership(
        &self,
        action: Membership,
        activity: &str,
        email: &str,
    ) -> Result<MutationOutcome, ApiError>;
}

/// Characters `encodeURIComponent` leaves untouched
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a path segment or query value
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}
