//! Message Banner Component

use leptos::prelude::*;

use crate::context::BoardContext;
use crate::store::BoardStateStoreFields;

/// `#message`, styled `success`/`error` and toggled with `hidden`
#[component]
pub fn MessageBanner() -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");
    let store = ctx.store;

    view! {
        <div
            id="message"
            class=move || store.banner().with(|b| b.css_class())
        >
            {move || store.banner().with(|b| b.text.clone())}
        </div>
    }
}
