//! View Controller
//!
//! Drives load / submit / remove for one resource. Every successful
//! mutation is followed by exactly one fresh listing; nothing in the local
//! snapshot is patched by hand.

use std::marker::PhantomData;

use chrono::NaiveDateTime;
use ewm_client::Transport;

use crate::cell::StateCell;
use crate::notify::Notify;
use crate::resource::{Action, Resource};
use crate::state::{DialogMode, ResourceState, SubmitRefusal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation gate or in-flight guard stopped it; no request was made
    Refused(SubmitRefusal),
    /// The backend rejected it; the dialog and draft are still there
    Failed,
    Saved,
}

pub struct ResourceController<R, T, S, N> {
    transport: T,
    state: S,
    notifier: N,
    _resource: PhantomData<fn() -> R>,
}

impl<R, T: Clone, S: Clone, N: Clone> Clone for ResourceController<R, T, S, N> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            state: self.state.clone(),
            notifier: self.notifier.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R, T: Copy, S: Copy, N: Copy> Copy for ResourceController<R, T, S, N> {}

impl<R, T, S, N> ResourceController<R, T, S, N>
where
    R: Resource,
    T: Transport,
    S: StateCell<ResourceState<R>>,
    N: Notify,
{
    pub fn new(transport: T, state: S, notifier: N) -> Self {
        Self {
            transport,
            state,
            notifier,
            _resource: PhantomData,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Fetch the collection with the current filters. On failure the
    /// previous snapshot is left as it was.
    pub async fn load(&self) -> bool {
        let Some(filters) = self.state.mutate(|state| state.begin_load()) else {
            return false;
        };
        tracing::debug!(resource = R::NOUN.plural, "loading");

        match R::list(&self.transport, &filters).await {
            Ok(records) => {
                tracing::debug!(resource = R::NOUN.plural, count = records.len(), "loaded");
                self.state.mutate(|state| state.finish_load(records));
                true
            }
            Err(e) => {
                tracing::warn!(resource = R::NOUN.plural, error = %e, "load failed");
                self.state.mutate(|state| state.fail_load());
                self.notifier.error(R::NOUN.failure(Action::Load));
                false
            }
        }
    }

    pub fn open_create(&self) {
        self.open_create_with(R::Draft::default());
    }

    pub fn open_create_with(&self, draft: R::Draft) {
        self.state.mutate(|state| state.open_create(draft));
    }

    pub fn open_edit(&self, record: &R::Record) {
        self.state.mutate(|state| state.open_edit(record));
    }

    pub fn cancel(&self) {
        self.state.mutate(|state| state.close_dialog());
    }

    /// Validate the open draft and send it as a create or update.
    ///
    /// `now` is the wall-clock time of the click; drafts that must lie in
    /// the future are checked against it.
    pub async fn submit(&self, now: NaiveDateTime) -> SubmitOutcome {
        let prepared = self
            .state
            .mutate(|state| state.begin_submit(now))
            .unwrap_or(Err(SubmitRefusal::NoDialog));

        let submission = match prepared {
            Ok(submission) => submission,
            Err(refusal) => {
                if let SubmitRefusal::Rejected(reason) = &refusal {
                    self.notifier.error(reason.to_string());
                }
                tracing::debug!(resource = R::NOUN.singular, ?refusal, "submit refused");
                return SubmitOutcome::Refused(refusal);
            }
        };

        let (action, result) = match submission.mode {
            DialogMode::Create => (Action::Create, R::create(&self.transport, &submission.draft).await),
            DialogMode::Edit { id } => (Action::Update, R::update(&self.transport, id, &submission.draft).await),
        };

        match result {
            Ok(()) => {
                self.state.mutate(|state| state.finish_submit(true));
                self.notifier.success(R::NOUN.success(action));
                self.load().await;
                SubmitOutcome::Saved
            }
            Err(e) => {
                tracing::warn!(resource = R::NOUN.singular, ?action, error = %e, "submit failed");
                self.state.mutate(|state| state.finish_submit(false));
                self.notifier.error(R::NOUN.failure(action));
                SubmitOutcome::Failed
            }
        }
    }

    /// Delete without confirmation. Errors end up in the notification bar,
    /// never with the caller.
    pub async fn remove(&self, id: i64) -> bool {
        match R::delete(&self.transport, id).await {
            Ok(()) => {
                self.notifier.success(R::NOUN.success(Action::Delete));
                self.load().await;
                true
            }
            Err(e) => {
                tracing::warn!(resource = R::NOUN.singular, id, error = %e, "delete failed");
                self.notifier.error(R::NOUN.failure(Action::Delete));
                false
            }
        }
    }
}
