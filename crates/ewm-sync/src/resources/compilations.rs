//! Compilations
//!
//! Event membership is edited as a comma separated id list and parsed when
//! the request is built.

use async_trait::async_trait;
use ewm_client::dto::{CompilationUpdate, NewCompilation};
use ewm_client::models::Compilation;
use ewm_client::services::compilations;
use ewm_client::{ApiError, ApiResult, CompilationFilters, Transport};

use crate::resource::{Noun, Resource};
use crate::validation::{char_len, ValidationError};

pub const MAX_TITLE_LEN: usize = 50;

pub struct Compilations;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompilationDraft {
    pub title: String,
    pub pinned: bool,
    /// e.g. `"3, 7, 12"`
    pub event_ids: String,
}

impl CompilationDraft {
    pub fn parse_event_ids(&self) -> Result<Vec<i64>, ValidationError> {
        let ids = self
            .event_ids
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<i64>().map_err(|_| ValidationError::Invalid("Event ids")))
            .collect::<Result<Vec<_>, _>>()?;
        if ids.is_empty() {
            return Err(ValidationError::Missing("Events"));
        }
        Ok(ids)
    }
}

#[async_trait(?Send)]
impl Resource for Compilations {
    type Record = Compilation;
    type Draft = CompilationDraft;
    type Filters = CompilationFilters;

    const NOUN: Noun = Noun::new("compilation", "compilations");

    fn record_id(record: &Compilation) -> i64 {
        record.id
    }

    fn draft_from(record: &Compilation) -> CompilationDraft {
        CompilationDraft {
            title: record.title.clone(),
            pinned: record.pinned,
            event_ids: record
                .events
                .iter()
                .map(|event| event.id.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    fn check_draft(draft: &CompilationDraft) -> Result<(), ValidationError> {
        match char_len(&draft.title) {
            0 => return Err(ValidationError::Missing("Title")),
            len if len > MAX_TITLE_LEN => {
                return Err(ValidationError::TooLong { field: "Title", max: MAX_TITLE_LEN })
            }
            _ => {}
        }
        draft.parse_event_ids().map(|_| ())
    }

    async fn list<T: Transport + ?Sized>(
        transport: &T,
        filters: &CompilationFilters,
    ) -> ApiResult<Vec<Compilation>> {
        compilations::list(transport, filters).await
    }

    async fn create<T: Transport + ?Sized>(transport: &T, draft: &CompilationDraft) -> ApiResult<()> {
        let events = draft
            .parse_event_ids()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let body = NewCompilation {
            title: draft.title.trim().to_string(),
            pinned: draft.pinned,
            events,
        };
        compilations::create(transport, &body).await.map(|_| ())
    }

    async fn update<T: Transport + ?Sized>(transport: &T, id: i64, draft: &CompilationDraft) -> ApiResult<()> {
        let events = draft
            .parse_event_ids()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let body = CompilationUpdate {
            title: Some(draft.title.trim().to_string()),
            pinned: Some(draft.pinned),
            events: Some(events),
        };
        compilations::update(transport, id, &body).await.map(|_| ())
    }

    async fn delete<T: Transport + ?Sized>(transport: &T, id: i64) -> ApiResult<()> {
        compilations::delete(transport, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, event_ids: &str) -> CompilationDraft {
        CompilationDraft {
            title: title.into(),
            pinned: false,
            event_ids: event_ids.into(),
        }
    }

    #[test]
    fn event_ids_accept_commas_and_spaces() {
        assert_eq!(draft("Summer", "3, 7 12,").parse_event_ids(), Ok(vec![3, 7, 12]));
        assert_eq!(
            draft("Summer", "3, x").parse_event_ids(),
            Err(ValidationError::Invalid("Event ids"))
        );
        assert_eq!(draft("Summer", " ").parse_event_ids(), Err(ValidationError::Missing("Events")));
    }

    #[test]
    fn title_between_one_and_fifty_characters() {
        assert_eq!(Compilations::check_draft(&draft("", "1")), Err(ValidationError::Missing("Title")));
        let long = "x".repeat(51);
        assert_eq!(
            Compilations::check_draft(&draft(&long, "1")),
            Err(ValidationError::TooLong { field: "Title", max: 50 })
        );
        assert!(Compilations::check_draft(&draft(&"x".repeat(50), "1")).is_ok());
    }
}
