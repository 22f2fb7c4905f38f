//! Signup Form Component
//!
//! `#signup-form` with the `#email` input and the `#activity` selection.
//! Both controls are read at submission time.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::BoardContext;
use crate::flows;
use crate::models::Activities;
use crate::store::BoardStateStoreFields;

const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// One option value per activity, in display order. Also the `<For>` keys.
fn option_values(activities: &Activities) -> Vec<String> {
    activities.names().map(str::to_string).collect()
}

/// Form for signing a student up to an activity
#[component]
pub fn SignupForm() -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");
    let store = ctx.store;

    let email_ref = NodeRef::<html::Input>::new();
    let activity_ref = NodeRef::<html::Select>::new();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (Some(email_input), Some(activity_select)) =
            (email_ref.get_untracked(), activity_ref.get_untracked())
        else {
            log::warn!("[SIGNUP] Form controls not mounted");
            return;
        };
        let email = email_input.value();
        let activity = activity_select.value();

        spawn_local(async move {
            let reset_form = move || {
                email_input.set_value("");
                activity_select.set_value("");
            };
            flows::submit_signup(&ctx.api(), &ctx, &activity, &email, reset_form).await;
        });
    };

    view! {
        <form id="signup-form" on:submit=submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="your-email@mergington.edu"
                    node_ref=email_ref
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select id="activity" required node_ref=activity_ref>
                    <option value="">{SELECT_PLACEHOLDER}</option>
                    // Keyed by name so a reload never rewrites the selected option in place
                    <For
                        each=move || store.activities().with(option_values)
                        key=|name| name.clone()
                        children=move |name: String| {
                            let value = name.clone();
                            view! { <option value=value>{name}</option> }
                        }
                    />
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
