//! Activity records as returned by the Bored API.
//!
//! The API returns at most one suggestion per call; a payload carrying an
//! `error` field is its way of saying nothing matched the query.

use serde::{Deserialize, Serialize};

/// The closed set of activity categories the API knows about.
/// Lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Education,
    Recreational,
    Social,
    Diy,
    Charity,
    Cooking,
    Relaxation,
    Music,
    Busywork,
}

impl ActivityType {
    /// All categories, in the order the type selector shows them.
    pub const ALL: [ActivityType; 9] = [
        ActivityType::Education,
        ActivityType::Recreational,
        ActivityType::Social,
        ActivityType::Diy,
        ActivityType::Charity,
        ActivityType::Cooking,
        ActivityType::Relaxation,
        ActivityType::Music,
        ActivityType::Busywork,
    ];

    /// Human-readable label for the selector row and cards.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Education => "Education",
            ActivityType::Recreational => "Recreational",
            ActivityType::Social => "Social",
            ActivityType::Diy => "DIY",
            ActivityType::Charity => "Charity",
            ActivityType::Cooking => "Cooking",
            ActivityType::Relaxation => "Relaxation",
            ActivityType::Music => "Music",
            ActivityType::Busywork => "Busywork",
        }
    }

    /// Value used in the `type` query parameter.
    pub fn query_value(&self) -> &'static str {
        match self {
            ActivityType::Education => "education",
            ActivityType::Recreational => "recreational",
            ActivityType::Social => "social",
            ActivityType::Diy => "diy",
            ActivityType::Charity => "charity",
            ActivityType::Cooking => "cooking",
            ActivityType::Relaxation => "relaxation",
            ActivityType::Music => "music",
            ActivityType::Busywork => "busywork",
        }
    }
}

/// One suggested activity. Read-only once fetched; the only local state
/// layered on top of it is the selection bookkeeping in
/// [`crate::models::Entry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// API identifier. Some payloads omit it, so [`Activity::id`] falls
    /// back to the description.
    #[serde(default)]
    pub key: String,
    /// Human-readable description ("Learn to juggle").
    pub activity: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub participants: u32,
    /// 0.0 is free, 1.0 is expensive.
    pub price: f64,
    /// Optional URL with more information; empty string when absent.
    #[serde(default)]
    pub link: String,
    /// 0.0 is the most accessible, 1.0 the least.
    pub accessibility: f64,
}

impl Activity {
    /// Stable identity for selection bookkeeping.
    pub fn id(&self) -> &str {
        if self.key.is_empty() {
            &self.activity
        } else {
            &self.key
        }
    }

    /// Whether a link action should be offered for this activity.
    pub fn has_link(&self) -> bool {
        !self.link.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_payload() {
        let json = r#"{
            "activity": "Take your dog on a walk",
            "type": "relaxation",
            "participants": 1,
            "price": 0,
            "link": "",
            "key": "9395203",
            "accessibility": 0.2
        }"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.activity, "Take your dog on a walk");
        assert_eq!(activity.kind, ActivityType::Relaxation);
        assert_eq!(activity.participants, 1);
        assert_eq!(activity.id(), "9395203");
        assert!(!activity.has_link());
    }

    #[test]
    fn test_decode_without_key_falls_back_to_description() {
        let json = r#"{"activity":"Learn to juggle","type":"recreational","participants":1,"price":0,"link":"","accessibility":0.1}"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.activity, "Learn to juggle");
        assert_eq!(activity.id(), "Learn to juggle");
        assert!(!activity.has_link());
    }

    #[test]
    fn test_decode_rejects_unknown_type() {
        let json = r#"{"activity":"x","type":"sleeping","participants":1,"price":0,"accessibility":0.1}"#;
        assert!(serde_json::from_str::<Activity>(json).is_err());
    }

    #[test]
    fn test_type_round_trips_lowercase() {
        let json = serde_json::to_string(&ActivityType::Diy).unwrap();
        assert_eq!(json, r#""diy""#);
        let back: ActivityType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ActivityType::Diy);
    }
}
