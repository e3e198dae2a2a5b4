//! Events
//!
//! The form keeps date and time as the separate strings the inputs produce
//! (`yyyy-MM-dd`, `HH:mm`). They are combined into the backend timestamp
//! only when a submission is built.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use ewm_client::dto::{EventUpdate, NewEvent};
use ewm_client::models::{Event, Location};
use ewm_client::services::events;
use ewm_client::{ApiError, ApiResult, EventFilters, Transport, DEFAULT_ACTING_USER_ID, EVENT_DATE_FORMAT};

use crate::resource::{Noun, Resource};
use crate::validation::{require, ValidationError};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
const TIME_INPUT_FORMAT: &str = "%H:%M";

pub struct Events;

#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub annotation: String,
    pub description: String,
    pub category_id: Option<i64>,
    /// `yyyy-MM-dd` as produced by a date input
    pub date: String,
    /// `HH:mm` (or `HH:mm:ss`) as produced by a time input
    pub time: String,
    pub paid: bool,
    pub participant_limit: i32,
    pub request_moderation: bool,
    pub location: Location,
    /// User the event is created or edited under
    pub initiator_id: i64,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self::for_user(DEFAULT_ACTING_USER_ID)
    }
}

impl EventDraft {
    pub fn for_user(initiator_id: i64) -> Self {
        Self {
            title: String::new(),
            annotation: String::new(),
            description: String::new(),
            category_id: None,
            date: String::new(),
            time: String::new(),
            paid: false,
            participant_limit: 0,
            request_moderation: true,
            location: Location::default(),
            initiator_id,
        }
    }

    /// Combine the date and time fields
    pub fn starts_at(&self) -> Result<NaiveDateTime, ValidationError> {
        require("Date", &self.date)?;
        require("Time", &self.time)?;
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_INPUT_FORMAT)
            .map_err(|_| ValidationError::Invalid("Date"))?;
        let time = parse_time(self.time.trim()).ok_or(ValidationError::Invalid("Time"))?;
        Ok(date.and_time(time))
    }

    /// Timestamp string in the backend format
    pub fn event_date(&self) -> Result<String, ValidationError> {
        Ok(self.starts_at()?.format(EVENT_DATE_FORMAT).to_string())
    }

    fn to_new_event(&self) -> Result<NewEvent, ValidationError> {
        Ok(NewEvent {
            title: self.title.trim().to_string(),
            annotation: self.annotation.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category_id.ok_or(ValidationError::Missing("Category"))?,
            event_date: self.event_date()?,
            paid: self.paid,
            participant_limit: self.participant_limit,
            request_moderation: self.request_moderation,
            location: self.location,
        })
    }

    fn to_update(&self) -> Result<EventUpdate, ValidationError> {
        let event = self.to_new_event()?;
        Ok(EventUpdate {
            title: Some(event.title),
            annotation: Some(event.annotation),
            description: Some(event.description),
            category: Some(event.category),
            event_date: Some(event.event_date),
            paid: Some(event.paid),
            participant_limit: Some(event.participant_limit),
            request_moderation: Some(event.request_moderation),
            location: Some(event.location),
            state_action: None,
        })
    }
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_INPUT_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Drafts that slipped past the gate are a programming error, but they
/// still must not reach the network
fn invalid_draft(e: ValidationError) -> ApiError {
    ApiError::Encode(e.to_string())
}

#[async_trait(?Send)]
impl Resource for Events {
    type Record = Event;
    type Draft = EventDraft;
    type Filters = EventFilters;

    const NOUN: Noun = Noun::new("event", "events");
    const SUPPORTS_DELETE: bool = false;

    fn record_id(record: &Event) -> i64 {
        record.id
    }

    fn draft_from(record: &Event) -> EventDraft {
        let (date, time) = match record.starts_at() {
            Some(at) => (
                at.format(DATE_INPUT_FORMAT).to_string(),
                at.format(TIME_INPUT_FORMAT).to_string(),
            ),
            None => (String::new(), String::new()),
        };
        EventDraft {
            title: record.title.clone(),
            annotation: record.annotation.clone(),
            description: record.description.clone().unwrap_or_default(),
            category_id: Some(record.category.id),
            date,
            time,
            paid: record.paid,
            participant_limit: record.participant_limit.unwrap_or(0),
            request_moderation: record.request_moderation.unwrap_or(true),
            location: record.location.unwrap_or_default(),
            initiator_id: record.initiator.id,
        }
    }

    fn check_draft(draft: &EventDraft) -> Result<(), ValidationError> {
        require("Title", &draft.title)?;
        require("Annotation", &draft.annotation)?;
        if draft.category_id.is_none() {
            return Err(ValidationError::Missing("Category"));
        }
        if draft.participant_limit < 0 {
            return Err(ValidationError::Invalid("Participant limit"));
        }
        draft.starts_at().map(|_| ())
    }

    fn check_at_submit(draft: &EventDraft, now: NaiveDateTime) -> Result<(), ValidationError> {
        if draft.starts_at()? <= now {
            return Err(ValidationError::NotInFuture);
        }
        Ok(())
    }

    async fn list<T: Transport + ?Sized>(transport: &T, filters: &EventFilters) -> ApiResult<Vec<Event>> {
        events::list(transport, filters).await
    }

    async fn create<T: Transport + ?Sized>(transport: &T, draft: &EventDraft) -> ApiResult<()> {
        let body = draft.to_new_event().map_err(invalid_draft)?;
        events::create(transport, draft.initiator_id, &body).await.map(|_| ())
    }

    async fn update<T: Transport + ?Sized>(transport: &T, id: i64, draft: &EventDraft) -> ApiResult<()> {
        let body = draft.to_update().map_err(invalid_draft)?;
        events::update(transport, draft.initiator_id, id, &body).await.map(|_| ())
    }

    async fn delete<T: Transport + ?Sized>(_transport: &T, _id: i64) -> ApiResult<()> {
        Err(ApiError::Unsupported("deleting events"))
    }
}
