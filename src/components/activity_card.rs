//! Activity Card Component
//!
//! One activity with its availability and participant list.

use leptos::prelude::*;

use crate::components::RemoveParticipantButton;
use crate::models::Activity;

pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";

fn availability_text(activity: &Activity) -> String {
    format!("{} spots left", activity.spots_left())
}

/// Participants with removal controls, or a placeholder when empty
#[component]
pub fn ParticipantList(activity_name: String, activity: Activity) -> impl IntoView {
    let targets = activity.removal_targets(&activity_name);

    if targets.is_empty() {
        return view! {
            <p class="no-participants"><em>{NO_PARTICIPANTS_TEXT}</em></p>
        }
        .into_any();
    }

    view! {
        <ul class="participants-list">
            {targets
                .into_iter()
                .map(|target| {
                    let email = target.email.clone();
                    view! {
                        <li>
                            <span>{email}</span>
                            <RemoveParticipantButton target=target />
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}

#[component]
pub fn ActivityCard(name: String, activity: Activity) -> impl IntoView {
    let availability = availability_text(&activity);
    let description = activity.description.clone();
    let schedule = activity.schedule.clone();
    let heading = name.clone();

    view! {
        <div class="activity-card">
            <h4>{heading}</h4>
            <p>{description}</p>
            <p><strong>"Schedule:"</strong> " " {schedule}</p>
            <p><strong>"Availability:"</strong> " " {availability}</p>
            <div class="participants-section">
                <strong>"Participants:"</strong>
                <ParticipantList activity_name=name activity=activity />
            </div>
        </div>
    }
}
