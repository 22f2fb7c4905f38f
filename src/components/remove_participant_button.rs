//! Remove Participant Button Component
//!
//! `×` control on a participant row. Asks for confirmation, then unregisters.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::BoardContext;
use crate::flows;
use crate::models::RemovalTarget;

/// Blocking yes/no prompt. A missing window or a blocked dialog counts as "no".
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Removal control for one participant
///
/// # Arguments
/// * `target` - activity and email this control removes; rendered as
///   `data-activity` / `data-email`
#[component]
pub fn RemoveParticipantButton(target: RemovalTarget) -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");

    let aria_label = format!("Remove {}", target.email);
    let data_activity = target.activity.clone();
    let data_email = target.email.clone();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let target = target.clone();
        spawn_local(async move {
            flows::remove_participant(&ctx.api(), &ctx, &target, confirm).await;
        });
    };

    view! {
        <button
            class="delete-btn"
            data-activity=data_activity
            data-email=data_email
            aria-label=aria_label
            on:click=on_click
        >
            "×"
        </button>
    }
}
