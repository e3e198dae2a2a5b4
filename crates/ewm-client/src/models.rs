//! Resource Records
//!
//! Data structures matching backend responses. Records are owned by the
//! backend; the console only ever holds the most recently fetched copy.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::EVENT_DATE_FORMAT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Initiator/requester reference embedded in other records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserShort {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

/// Full event as returned by the admin listing and the single-event endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub annotation: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: Category,
    /// `yyyy-MM-dd HH:mm:ss`
    pub event_date: String,
    pub initiator: UserShort,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub participant_limit: Option<i32>,
    #[serde(default)]
    pub request_moderation: Option<bool>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub confirmed_requests: Option<i64>,
    #[serde(default)]
    pub views: Option<i64>,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub published_on: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
}

impl Event {
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.event_date, EVENT_DATE_FORMAT).ok()
    }
}

/// Event summary embedded in compilations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventShort {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub annotation: String,
    pub category: Category,
    pub event_date: String,
    #[serde(default)]
    pub paid: bool,
    pub initiator: UserShort,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compilation {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub events: Vec<EventShort>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pending,
    Confirmed,
    Rejected,
    Canceled,
}

/// A user's request to take part in an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipationRequest {
    pub id: i64,
    pub created: String,
    pub event: i64,
    pub requester: i64,
    pub status: RequestStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_decodes_embedded_category_and_ignores_unknown_fields() {
        let event: Event = serde_json::from_value(json!({
            "id": 11,
            "title": "Rust meetup",
            "annotation": "Monthly meetup of the local Rust group",
            "category": {"id": 2, "name": "Tech"},
            "eventDate": "2026-11-02 19:30:00",
            "initiator": {"id": 1, "name": "Alice"},
            "paid": false,
            "participantLimit": 40,
            "state": "PENDING",
            "rating": 4.5
        }))
        .unwrap();

        assert_eq!(event.category.name, "Tech");
        assert_eq!(event.participant_limit, Some(40));
        assert_eq!(event.description, None);
        assert_eq!(
            event.starts_at().unwrap().format("%H:%M").to_string(),
            "19:30"
        );
    }

    #[test]
    fn compilation_defaults_missing_collections() {
        let compilation: Compilation =
            serde_json::from_value(json!({"id": 3, "title": "Summer"})).unwrap();
        assert!(!compilation.pinned);
        assert!(compilation.events.is_empty());
    }

    #[test]
    fn request_status_uses_backend_spelling() {
        let request: ParticipationRequest = serde_json::from_value(json!({
            "id": 8,
            "created": "2026-10-01 12:00:00",
            "event": 11,
            "requester": 4,
            "status": "CONFIRMED"
        }))
        .unwrap();
        assert_eq!(request.status, RequestStatus::Confirmed);
    }
}
