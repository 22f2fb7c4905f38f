//! Activity Commands
//!
//! Frontend bindings for the activity endpoints.

use gloo_net::http::Request;

use super::{encode_component, ActivityApi};
use crate::error::ApiError;
use crate::models::{Activities, MutationReply};

/// Shown when a rejected reply carries no usable `detail`
pub const FALLBACK_DETAIL: &str = "An error occurred";

// ========================
// Endpoints
// ========================

/// Membership change on an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Signup,
    Unregister,
}

impl Membership {
    fn path(self) -> &'static str {
        match self {
            Membership::Signup => "signup",
            Membership::Unregister => "unregister",
        }
    }
}

pub fn activities_url(base: &str) -> String {
    format!("{}/activities", base)
}

pub fn membership_url(base: &str, action: Membership, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/{}?email={}",
        base,
        encode_component(activity),
        action.path(),
        encode_component(email)
    )
}

// ========================
// Outcomes
// ========================

/// Application-level result of a signup/unregister request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// 2xx with the server's confirmation message
    Accepted(String),
    /// Non-2xx with the server's detail, or the fallback text
    Rejected(String),
}

impl MutationOutcome {
    pub fn from_reply(ok: bool, reply: MutationReply) -> Self {
        if ok {
            MutationOutcome::Accepted(reply.message.unwrap_or_default())
        } else {
            let detail = reply.detail_text().unwrap_or(FALLBACK_DETAIL).to_string();
            MutationOutcome::Rejected(detail)
        }
    }
}

// ========================
// Commands
// ========================

pub async fn list_activities(base: &str) -> Result<Activities, ApiError> {
    let resp = Request::get(&activities_url(base))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<Activities>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn change_membership(
    base: &str,
    action: Membership,
    activity: &str,
    email: &str,
) -> Result<MutationOutcome, ApiError> {
    let url = membership_url(base, action, activity, email);
    let resp = Request::post(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let reply = resp
        .json::<MutationReply>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(MutationOutcome::from_reply(resp.ok(), reply))
}

/// Activities API over HTTP, rooted at `base`
#[derive(Debug, Clone)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl ActivityApi for HttpApi {
    async fn list_activities(&self) -> Result<Activities, ApiError> {
        list_activities(&self.base).await
    }

    async fn change_membership(
        &self,
        action: Membership,
        activity: &str,
        email: &str,
    ) -> Result<MutationOutcome, ApiError> {
        change_membership(&self.base, action, activity, email).await
    }
}
