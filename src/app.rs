//! Activity Board App
//!
//! Root component: activity list on one side, signup form and message
//! banner on the other.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ActivitiesList, MessageBanner, SignupForm};
use crate::config::BoardConfig;
use crate::context::BoardContext;
use crate::store::BoardState;

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    let store = Store::new(BoardState::default());
    let ctx = BoardContext::new(store, config);

    // Provide context to all children
    provide_context(ctx);

    // Load once when the page is ready; later loads follow successful changes
    Effect::new(move |_| {
        ctx.reload();
    });

    view! {
        <main class="activity-board">
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivitiesList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
                <MessageBanner />
            </section>
        </main>
    }
}
