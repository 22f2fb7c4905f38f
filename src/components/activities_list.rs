//! Activities List Component
//!
//! Fills `#activities-list` from the store. The whole subtree is rebuilt on
//! every successful load, so click handlers only exist on the current nodes.

use leptos::prelude::*;

use crate::components::ActivityCard;
use crate::context::{BoardContext, LOAD_FAILED_TEXT};
use crate::store::{BoardStateStoreFields, LoadState};

pub const LOADING_TEXT: &str = "Loading activities...";

#[component]
pub fn ActivitiesList() -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");
    let store = ctx.store;

    view! {
        <div id="activities-list">
            {move || match store.load_state().get() {
                LoadState::Loading => view! { <p>{LOADING_TEXT}</p> }.into_any(),
                LoadState::Failed => view! { <p>{LOAD_FAILED_TEXT}</p> }.into_any(),
                LoadState::Ready => {
                    let activities = store.activities().get();
                    activities
                        .iter()
                        .map(|(name, activity)| {
                            view! { <ActivityCard name=name.to_string() activity=activity.clone() /> }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
