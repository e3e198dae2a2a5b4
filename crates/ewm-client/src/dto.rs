//! Request Payloads
//!
//! One explicit body type per mutating operation. Optional fields are left
//! out of the JSON entirely so PATCH calls only touch what was given.

use serde::{Deserialize, Serialize};

use crate::models::{Location, ParticipationRequest, RequestStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCategory {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryUpdate {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub annotation: String,
    pub description: String,
    /// Category id
    pub category: i64,
    /// `yyyy-MM-dd HH:mm:ss`
    pub event_date: String,
    pub paid: bool,
    pub participant_limit: i32,
    pub request_moderation: bool,
    pub location: Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStateAction {
    SendToReview,
    CancelReview,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_moderation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_action: Option<EventStateAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCompilation {
    pub title: String,
    pub pinned: bool,
    pub events: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompilationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<i64>>,
}

/// Confirm or reject a batch of participation requests
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestStatusUpdate {
    pub request_ids: Vec<i64>,
    pub status: RequestStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestStatusUpdateResult {
    pub confirmed_requests: Vec<ParticipationRequest>,
    pub rejected_requests: Vec<ParticipationRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_update_omits_absent_fields() {
        let update = EventUpdate {
            title: Some("Renamed".into()),
            state_action: Some(EventStateAction::SendToReview),
            ..EventUpdate::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"title": "Renamed", "stateAction": "SEND_TO_REVIEW"})
        );
    }

    #[test]
    fn new_event_uses_camel_case() {
        let event = NewEvent {
            title: "Jazz night".into(),
            annotation: "Live jazz at the old port".into(),
            description: String::new(),
            category: 4,
            event_date: "2026-12-01 20:00:00".into(),
            paid: true,
            participant_limit: 100,
            request_moderation: true,
            location: Location { lat: 55.75, lon: 37.61 },
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["eventDate"], "2026-12-01 20:00:00");
        assert_eq!(value["participantLimit"], 100);
        assert_eq!(value["requestModeration"], true);
    }

    #[test]
    fn request_status_update_wire_shape() {
        let update = RequestStatusUpdate {
            request_ids: vec![1, 2],
            status: RequestStatus::Rejected,
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"requestIds": [1, 2], "status": "REJECTED"})
        );
    }
}
