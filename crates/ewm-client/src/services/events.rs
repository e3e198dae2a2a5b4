//! Event bindings
//!
//! Creation and editing are scoped to the initiating user; listing goes
//! through the admin endpoint.

use crate::dto::{EventUpdate, NewEvent, RequestStatusUpdate, RequestStatusUpdateResult};
use crate::error::ApiResult;
use crate::filters::{EventFilters, Page};
use crate::models::{Event, ParticipationRequest};
use crate::transport::{ApiRequest, Transport};

use super::decode;

pub async fn list<T: Transport + ?Sized>(transport: &T, filters: &EventFilters) -> ApiResult<Vec<Event>> {
    let request = ApiRequest::get("/admin/events").with_query(filters.to_query());
    decode(transport.send(request).await?)
}

pub async fn get<T: Transport + ?Sized>(transport: &T, id: i64) -> ApiResult<Event> {
    decode(transport.send(ApiRequest::get(format!("/events/{id}"))).await?)
}

pub async fn list_for_user<T: Transport + ?Sized>(transport: &T, user_id: i64, page: Page) -> ApiResult<Vec<Event>> {
    let request = ApiRequest::get(format!("/users/{user_id}/events")).with_query(page.to_query());
    decode(transport.send(request).await?)
}

pub async fn create<T: Transport + ?Sized>(transport: &T, user_id: i64, event: &NewEvent) -> ApiResult<Event> {
    let request = ApiRequest::post(format!("/users/{user_id}/events")).with_body(event)?;
    decode(transport.send(request).await?)
}

pub async fn update<T: Transport + ?Sized>(
    transport: &T,
    user_id: i64,
    event_id: i64,
    update: &EventUpdate,
) -> ApiResult<Event> {
    let request = ApiRequest::patch(format!("/users/{user_id}/events/{event_id}")).with_body(update)?;
    decode(transport.send(request).await?)
}

/// Participation requests for an event, as seen by its initiator
pub async fn requests<T: Transport + ?Sized>(
    transport: &T,
    user_id: i64,
    event_id: i64,
) -> ApiResult<Vec<ParticipationRequest>> {
    let request = ApiRequest::get(format!("/users/{user_id}/events/{event_id}/requests"));
    decode(transport.send(request).await?)
}

pub async fn update_requests<T: Transport + ?Sized>(
    transport: &T,
    user_id: i64,
    event_id: i64,
    update: &RequestStatusUpdate,
) -> ApiResult<RequestStatusUpdateResult> {
    let request =
        ApiRequest::patch(format!("/users/{user_id}/events/{event_id}/requests")).with_body(update)?;
    decode(transport.send(request).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::PaidFilter;
    use crate::models::{Location, RequestStatus};
    use crate::services::testing::ScriptedTransport;
    use crate::transport::Method;
    use serde_json::json;

    fn event_json(id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "title": "Jazz night",
            "annotation": "Live jazz at the old port",
            "category": {"id": 4, "name": "Music"},
            "eventDate": "2026-12-01 20:00:00",
            "initiator": {"id": 1, "name": "Alice"},
            "paid": true
        })
    }

    #[tokio::test]
    async fn list_sends_filters_to_admin_endpoint() {
        let transport = ScriptedTransport::replying(json!([event_json(1), event_json(2)]));
        let filters = EventFilters {
            paid: PaidFilter::Paid,
            categories: vec![4],
            ..EventFilters::default()
        };

        let events = list(&transport, &filters).await.unwrap();

        assert_eq!(events.len(), 2);
        let call = transport.last_call().unwrap();
        assert_eq!(call.path, "/admin/events");
        assert_eq!(call.query_value("paid"), Some("true"));
        assert_eq!(call.query_value("categories"), Some("4"));
    }

    #[tokio::test]
    async fn create_is_nested_under_user() {
        let transport = ScriptedTransport::replying(event_json(7));
        let event = NewEvent {
            title: "Jazz night".into(),
            annotation: "Live jazz at the old port".into(),
            description: String::new(),
            category: 4,
            event_date: "2026-12-01 20:00:00".into(),
            paid: true,
            participant_limit: 0,
            request_moderation: true,
            location: Location::default(),
        };

        let created = create(&transport, 1, &event).await.unwrap();

        assert_eq!(created.id, 7);
        let call = transport.last_call().unwrap();
        assert_eq!((call.method, call.path.as_str()), (Method::Post, "/users/1/events"));
        assert_eq!(call.body.unwrap()["eventDate"], "2026-12-01 20:00:00");
    }

    #[tokio::test]
    async fn update_and_single_fetch_paths() {
        let transport = ScriptedTransport::replying(event_json(7));

        update(&transport, 1, 7, &EventUpdate { paid: Some(false), ..EventUpdate::default() })
            .await
            .unwrap();
        get(&transport, 7).await.unwrap();
        list_for_user(&transport, 1, Page { from: Some(10), size: None }).await.ok();

        assert_eq!(transport.count(Method::Patch, "/users/1/events/7"), 1);
        assert_eq!(transport.count(Method::Get, "/events/7"), 1);
        let calls = transport.calls();
        assert_eq!(calls[2].path, "/users/1/events");
        assert_eq!(calls[2].query_value("from"), Some("10"));
    }

    #[tokio::test]
    async fn request_moderation_endpoints() {
        let transport = ScriptedTransport::new(|request| match request.method {
            Method::Get => Ok(json!([{
                "id": 30, "created": "2026-10-18 09:00:00", "event": 7, "requester": 2, "status": "PENDING"
            }])),
            _ => Ok(json!({"confirmedRequests": [], "rejectedRequests": [{
                "id": 30, "created": "2026-10-18 09:00:00", "event": 7, "requester": 2, "status": "REJECTED"
            }]})),
        });

        let pending = requests(&transport, 1, 7).await.unwrap();
        assert_eq!(pending[0].status, RequestStatus::Pending);

        let result = update_requests(
            &transport,
            1,
            7,
            &RequestStatusUpdate { request_ids: vec![30], status: RequestStatus::Rejected },
        )
        .await
        .unwrap();
        assert_eq!(result.rejected_requests.len(), 1);
        assert_eq!(transport.count(Method::Patch, "/users/1/events/7/requests"), 1);
    }
}
