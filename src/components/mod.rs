//! UI Components
//!
//! Leptos components making up the activity board.

mod activities_list;
mod activity_card;
mod message_banner;
mod remove_participant_button;
mod signup_form;

pub use activities_list::ActivitiesList;
pub use activity_card::ActivityCard;
pub use message_banner::MessageBanner;
pub use remove_participant_button::RemoveParticipantButton;
pub use signup_form::SignupForm;
