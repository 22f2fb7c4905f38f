//! Board Flows
//!
//! Load, signup and unregister, written against `ActivityApi` and
//! `BoardView` so the components only wire DOM events to them.

use std::future::Future;
use std::time::Duration;

use crate::commands::{ActivityApi, Membership, MutationOutcome};
use crate::error::ApiError;
use crate::models::{Activities, RemovalTarget};
use crate::store::MessageKind;

pub const SIGNUP_FAILED_TEXT: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED_TEXT: &str = "Failed to remove participant. Please try again.";

/// Where the flows write their results
pub trait BoardView {
    /// Replace the rendered list and the selection options
    fn replace_activities(&self, activities: Activities);
    /// Show the list apology; the options stay as they are
    fn mark_load_failed(&self);
    /// Show a banner message and schedule its hide
    fn notify(&self, text: String, kind: MessageKind);
}

pub fn unregister_prompt(target: &RemovalTarget) -> String {
    format!("Remove {} from {}?", target.email, target.activity)
}

/// What a finished signup/unregister does to the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationEffect {
    pub kind: MessageKind,
    pub text: String,
    pub refresh: bool,
}

impl MutationEffect {
    /// `failure_text` replaces transport and decode errors
    pub fn from_result(result: Result<MutationOutcome, ApiError>, failure_text: &str) -> Self {
        match result {
            Ok(MutationOutcome::Accepted(message)) => Self {
                kind: MessageKind::Success,
                text: message,
                refresh: true,
            },
            Ok(MutationOutcome::Rejected(detail)) => {
                log::warn!("[BOARD] Change rejected: {}", detail);
                Self {
                    kind: MessageKind::Error,
                    text: detail,
                    refresh: false,
                }
            }
            Err(e) => {
                log::error!("[BOARD] Change failed: {}", e);
                Self {
                    kind: MessageKind::Error,
                    text: failure_text.to_string(),
                    refresh: false,
                }
            }
        }
    }
}

/// Fetch the activity set. Returns true when the list was replaced.
pub async fn load_activities<A: ActivityApi, V: BoardView>(api: &A, view: &V) -> bool {
    match api.list_activities().await {
        Ok(activities) => {
            log::info!("[BOARD] Loaded {} activities", activities.len());
            view.replace_activities(activities);
            true
        }
        Err(e) => {
            log::error!("[BOARD] Error fetching activities: {}", e);
            view.mark_load_failed();
            false
        }
    }
}

/// Sign `email` up for `activity`. On success `reset_form` runs before the
/// follow-up load. Returns true when the server accepted.
pub async fn submit_signup<A, V, R>(api: &A, view: &V, activity: &str, email: &str, reset_form: R) -> bool
where
    A: ActivityApi,
    V: BoardView,
    R: FnOnce(),
{
    log::debug!("[SIGNUP] Submitting {} for {}", email, activity);
    let result = api.change_membership(Membership::Signup, activity, email).await;
    let effect = MutationEffect::from_result(result, SIGNUP_FAILED_TEXT);
    view.notify(effect.text, effect.kind);
    if effect.refresh {
        reset_form();
        load_activities(api, view).await;
    }
    effect.refresh
}

/// Ask `confirm`, then unregister. `None` means the user declined and
/// nothing was sent.
pub async fn remove_participant<A, V, C>(api: &A, view: &V, target: &RemovalTarget, confirm: C) -> Option<bool>
where
    A: ActivityApi,
    V: BoardView,
    C: FnOnce(&str) -> bool,
{
    if !confirm(&unregister_prompt(target)) {
        log::debug!("[BOARD] Removal of {} cancelled", target.email);
        return None;
    }
    let result = api
        .change_membership(Membership::Unregister, &target.activity, &target.email)
        .await;
    let effect = MutationEffect::from_result(result, UNREGISTER_FAILED_TEXT);
    view.notify(effect.text, effect.kind);
    if effect.refresh {
        log::info!("[BOARD] Removed {} from {}", target.email, target.activity);
        load_activities(api, view).await;
    }
    Some(effect.refresh)
}

/// Wait `delay` on `sleep`, then run `expire`. Returns what `expire` returned.
pub async fn hide_message_after<S, Fut, E>(delay: Duration, sleep: S, expire: E) -> bool
where
    S: FnOnce(Duration) -> Fut,
    Fut: Future<Output = ()>,
    E: FnOnce() -> bool,
{
    sleep(delay).await;
    expire()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MESSAGE_HIDE_DELAY;
    use crate::store::Banner;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::pin::pin;
    use std::task::{Context, Poll};

    const TWO_CLUBS: &str = r#"{
        "Chess Club": {"description":"Strategy","schedule":"Fri 3pm","max_participants":10,"participants":["a@x.com"]},
        "Art Club": {"description":"Paint","schedule":"Wed 3pm","max_participants":5,"participants":[]}
    }"#;

    fn two_clubs() -> Activities {
        serde_json::from_str(TWO_CLUBS).unwrap()
    }

    fn chess_target() -> RemovalTarget {
        RemovalTarget {
            activity: "Chess Club".into(),
            email: "a@x.com".into(),
        }
    }

    struct FakeApi {
        list: RefCell<Result<Activities, ApiError>>,
        mutation: Result<MutationOutcome, ApiError>,
        reads: Cell<usize>,
        writes: RefCell<Vec<(Membership, String, String)>>,
    }

    impl FakeApi {
        fn new(mutation: Result<MutationOutcome, ApiError>) -> Self {
            Self {
                list: RefCell::new(Ok(two_clubs())),
                mutation,
                reads: Cell::new(0),
                writes: RefCell::new(Vec::new()),
            }
        }
    }

    impl ActivityApi for FakeApi {
        async fn list_activities(&self) -> Result<Activities, ApiError> {
            self.reads.set(self.reads.get() + 1);
            self.list.borrow().clone()
        }

        async fn change_membership(
            &self,
            action: Membership,
            activity: &str,
            email: &str,
        ) -> Result<MutationOutcome, ApiError> {
            self.writes
                .borrow_mut()
                .push((action, activity.to_string(), email.to_string()));
            self.mutation.clone()
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum ViewEvent {
        Replaced(Activities),
        LoadFailed,
        Message(MessageKind, String),
    }

    #[derive(Default)]
    struct FakeView {
        events: RefCell<Vec<ViewEvent>>,
    }

    impl BoardView for FakeView {
        fn replace_activities(&self, activities: Activities) {
            self.events.borrow_mut().push(ViewEvent::Replaced(activities));
        }

        fn mark_load_failed(&self) {
            self.events.borrow_mut().push(ViewEvent::LoadFailed);
        }

        fn notify(&self, text: String, kind: MessageKind) {
            self.events.borrow_mut().push(ViewEvent::Message(kind, text));
        }
    }

    // =============================================================
    // Load
    // =============================================================

    #[test]
    fn test_load_replaces_options_then_failure_keeps_them() {
        let api = FakeApi::new(Ok(MutationOutcome::Accepted(String::new())));
        let view = FakeView::default();

        assert!(block_on(load_activities(&api, &view)));
        *api.list.borrow_mut() = Err(ApiError::Status(500));
        assert!(!block_on(load_activities(&api, &view)));

        let events = view.events.borrow();
        assert_eq!(events.len(), 2);
        match &events[0] {
            ViewEvent::Replaced(activities) => {
                assert_eq!(activities.names().count(), 2);
                assert_eq!(activities.names().collect::<Vec<_>>(), vec!["Chess Club", "Art Club"]);
            }
            other => panic!("expected replaced list, got {:?}", other),
        }
        // A failed load only marks the list; nothing replaces the options
        assert_eq!(events[1], ViewEvent::LoadFailed);
        assert_eq!(api.reads.get(), 2);
    }

    // =============================================================
    // Unregister
    // =============================================================

    #[test]
    fn test_declined_prompt_sends_nothing() {
        let api = FakeApi::new(Ok(MutationOutcome::Accepted("Removed".into())));
        let view = FakeView::default();
        let asked = RefCell::new(String::new());

        let result = block_on(remove_participant(&api, &view, &chess_target(), |prompt| {
            *asked.borrow_mut() = prompt.to_string();
            false
        }));

        assert_eq!(result, None);
        assert_eq!(*asked.borrow(), "Remove a@x.com from Chess Club?");
        assert!(api.writes.borrow().is_empty());
        assert_eq!(api.reads.get(), 0);
        assert!(view.events.borrow().is_empty());
    }

    #[test]
    fn test_accepted_unregister_reloads_once() {
        let api = FakeApi::new(Ok(MutationOutcome::Accepted("Unregistered a@x.com from Chess Club".into())));
        let view = FakeView::default();

        let result = block_on(remove_participant(&api, &view, &chess_target(), |_| true));

        assert_eq!(result, Some(true));
        assert_eq!(
            *api.writes.borrow(),
            vec![(Membership::Unregister, "Chess Club".to_string(), "a@x.com".to_string())]
        );
        assert_eq!(api.reads.get(), 1);
        let events = view.events.borrow();
        assert_eq!(
            events[0],
            ViewEvent::Message(MessageKind::Success, "Unregistered a@x.com from Chess Club".into())
        );
        assert!(matches!(events[1], ViewEvent::Replaced(_)));
    }

    #[test]
    fn test_not_found_unregister_shows_detail_without_reload() {
        let api = FakeApi::new(Ok(MutationOutcome::Rejected("Not found".into())));
        let view = FakeView::default();

        let result = block_on(remove_participant(&api, &view, &chess_target(), |_| true));

        assert_eq!(result, Some(false));
        assert_eq!(api.reads.get(), 0);
        assert_eq!(
            *view.events.borrow(),
            vec![ViewEvent::Message(MessageKind::Error, "Not found".into())]
        );
    }

    #[test]
    fn test_unregister_network_failure_uses_fallback() {
        let api = FakeApi::new(Err(ApiError::Network("offline".into())));
        let view = FakeView::default();

        block_on(remove_participant(&api, &view, &chess_target(), |_| true));

        assert_eq!(api.reads.get(), 0);
        assert_eq!(
            *view.events.borrow(),
            vec![ViewEvent::Message(MessageKind::Error, UNREGISTER_FAILED_TEXT.into())]
        );
    }

    // =============================================================
    // Signup
    // =============================================================

    #[test]
    fn test_accepted_signup_resets_form_and_reloads_once() {
        let api = FakeApi::new(Ok(MutationOutcome::Accepted("Signed up b@x.com for Art Club".into())));
        let view = FakeView::default();
        let resets = Cell::new(0);

        let accepted = block_on(submit_signup(&api, &view, "Art Club", "b@x.com", || {
            resets.set(resets.get() + 1)
        }));

        assert!(accepted);
        assert_eq!(resets.get(), 1);
        assert_eq!(api.reads.get(), 1);
        assert_eq!(
            *api.writes.borrow(),
            vec![(Membership::Signup, "Art Club".to_string(), "b@x.com".to_string())]
        );
        assert_eq!(
            view.events.borrow()[0],
            ViewEvent::Message(MessageKind::Success, "Signed up b@x.com for Art Club".into())
        );
    }

    #[test]
    fn test_rejected_signup_keeps_form_and_list() {
        let api = FakeApi::new(Ok(MutationOutcome::Rejected(
            "Student already signed up for this activity".into(),
        )));
        let view = FakeView::default();
        let resets = Cell::new(0);

        let accepted = block_on(submit_signup(&api, &view, "Chess Club", "a@x.com", || {
            resets.set(resets.get() + 1)
        }));

        assert!(!accepted);
        assert_eq!(resets.get(), 0);
        assert_eq!(api.reads.get(), 0);
        assert_eq!(
            *view.events.borrow(),
            vec![ViewEvent::Message(
                MessageKind::Error,
                "Student already signed up for this activity".into()
            )]
        );
    }

    #[test]
    fn test_signup_bad_body_uses_fallback() {
        let api = FakeApi::new(Err(ApiError::Decode("expected value".into())));
        let view = FakeView::default();

        block_on(submit_signup(&api, &view, "Chess Club", "a@x.com", || {}));

        assert_eq!(
            *view.events.borrow(),
            vec![ViewEvent::Message(MessageKind::Error, SIGNUP_FAILED_TEXT.into())]
        );
    }

    // =============================================================
    // Message hide
    // =============================================================

    #[test]
    fn test_message_hides_after_delay_and_not_before() {
        let banner = RefCell::new(Banner::default());
        let token = banner.borrow_mut().show("Signed up".into(), MessageKind::Success);
        let requested = Cell::new(None);
        let (fire, fired) = oneshot::channel::<()>();

        let requested_ref = &requested;
        let mut hide = pin!(hide_message_after(
            DEFAULT_MESSAGE_HIDE_DELAY,
            move |delay| {
                requested_ref.set(Some(delay));
                async move {
                    let _ = fired.await;
                }
            },
            || banner.borrow_mut().expire(token),
        ));
        let mut cx = Context::from_waker(futures::task::noop_waker_ref());

        assert!(hide.as_mut().poll(&mut cx).is_pending());
        assert_eq!(requested.get(), Some(Duration::from_millis(5000)));
        assert!(banner.borrow().visible);

        fire.send(()).unwrap();
        assert_eq!(hide.as_mut().poll(&mut cx), Poll::Ready(true));
        assert!(!banner.borrow().visible);
    }

    #[test]
    fn test_old_timer_leaves_newer_message_visible() {
        let banner = RefCell::new(Banner::default());
        let first = banner.borrow_mut().show("Signed up".into(), MessageKind::Success);
        banner.borrow_mut().show("Not found".into(), MessageKind::Error);

        let hid = block_on(hide_message_after(
            DEFAULT_MESSAGE_HIDE_DELAY,
            |_| async {},
            || banner.borrow_mut().expire(first),
        ));

        assert!(!hid);
        assert!(banner.borrow().visible);
        assert_eq!(banner.borrow().text, "Not found");
    }
}
