//! Frontend Models
//!
//! Data structures matching the Activities API payloads.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// Activity data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Negative when the server has over-filled the activity.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }

    /// One removal target per participant row, in server order.
    pub fn removal_targets(&self, activity_name: &str) -> Vec<RemovalTarget> {
        self.participants
            .iter()
            .map(|email| RemovalTarget {
                activity: activity_name.to_string(),
                email: email.clone(),
            })
            .collect()
    }
}

/// Data carried by a participant's removal control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalTarget {
    pub activity: String,
    pub email: String,
}

/// Activities keyed by name, kept in the order the server sent them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Activities(Vec<(String, Activity)>);

impl Activities {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.0.iter().map(|(n, a)| (n.as_str(), a))
    }

    /// Names in display order, used for the selection options
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    /// Insert keeping first-seen position; a repeated name overwrites the value.
    fn upsert(&mut self, name: String, activity: Activity) {
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = activity,
            None => self.0.push((name, activity)),
        }
    }
}

impl<'de> Deserialize<'de> for Activities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ActivitiesVisitor;

        impl<'de> Visitor<'de> for ActivitiesVisitor {
            type Value = Activities;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Activities, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut activities = Activities(Vec::with_capacity(map.size_hint().unwrap_or(0)));
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    activities.upsert(name, activity);
                }
                Ok(activities)
            }
        }

        deserializer.deserialize_map(ActivitiesVisitor)
    }
}

/// Body of a signup/unregister reply.
///
/// `message` is set on success, `detail` on error. `detail` stays untyped
/// because validation failures send a list instead of a string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MutationReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl MutationReply {
    pub fn detail_text(&self) -> Option<&str> {
        self.detail.as_ref().and_then(|d| d.as_str()).filter(|d| !d.is_empty())
    }
}
