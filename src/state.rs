//! Leptos side of the controllers
//!
//! The controllers in `ewm-sync` only know about [`StateCell`], [`Notify`]
//! and [`Transport`]. This module backs them with signals so every state
//! change re-renders whatever reads it.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use ewm_client::{ApiConfig, ApiError, ApiRequest, ApiResult, HttpTransport, Transport};
use ewm_sync::{
    NotificationState, Notify, Resource, ResourceController, ResourceState, Severity, StateCell,
    AUTO_HIDE,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

pub type Controller<R> = ResourceController<R, Api, SignalCell<ResourceState<R>>, Notices>;

// ============================================================================
// Transport handle
// ============================================================================

/// Copyable handle to the shared [`HttpTransport`]
#[derive(Clone, Copy)]
pub struct Api(StoredValue<HttpTransport, LocalStorage>);

impl Api {
    pub fn new(config: ApiConfig) -> Self {
        Self(StoredValue::new_local(HttpTransport::new(config)))
    }
}

#[async_trait(?Send)]
impl Transport for Api {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        let transport = self
            .0
            .try_get_value()
            .ok_or_else(|| ApiError::Network("transport disposed".into()))?;
        transport.send(request).await
    }
}

// ============================================================================
// State cell
// ============================================================================

pub struct SignalCell<T: Send + Sync + 'static>(RwSignal<T>);

impl<T: Send + Sync + 'static> Clone for SignalCell<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for SignalCell<T> {}

impl<T: Send + Sync + 'static> SignalCell<T> {
    pub fn new(value: T) -> Self {
        Self(RwSignal::new(value))
    }

    /// Tracked read for views
    pub fn with<O>(&self, f: impl FnOnce(&T) -> O) -> O {
        self.0.with(f)
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.0.update(f);
    }
}

impl<T: Send + Sync + 'static> StateCell<T> for SignalCell<T> {
    fn peek<O>(&self, f: impl FnOnce(&T) -> O) -> Option<O> {
        self.0.try_with_untracked(f)
    }

    fn mutate<O>(&self, f: impl FnOnce(&mut T) -> O) -> Option<O> {
        self.0.try_update(f)
    }
}

impl<R: Resource> SignalCell<ResourceState<R>> {
    /// Read one field of the open draft, default when no dialog is open
    pub fn draft_field<O: Default>(&self, f: impl FnOnce(&R::Draft) -> O) -> O {
        self.with(|state| state.draft().map(f).unwrap_or_default())
    }

    pub fn edit_draft(&self, f: impl FnOnce(&mut R::Draft)) {
        self.update(|state| {
            if let Some(draft) = state.draft_mut() {
                f(draft);
            }
        });
    }

    pub fn records(&self) -> Vec<R::Record> {
        self.with(|state| state.records().to_vec())
    }
}

// ============================================================================
// Notifications
// ============================================================================

#[derive(Clone, Copy)]
pub struct Notices(RwSignal<NotificationState>);

impl Notices {
    pub fn new() -> Self {
        Self(RwSignal::new(NotificationState::default()))
    }

    pub fn state(&self) -> ReadSignal<NotificationState> {
        self.0.read_only()
    }

    pub fn dismiss(&self) {
        self.0.update(|state| state.dismiss());
    }
}

impl Notify for Notices {
    fn notify(&self, message: String, severity: Severity) {
        let Some(generation) = self.0.try_update(|state| state.show(message, severity)) else {
            return;
        };
        let signal = self.0;
        spawn_local(async move {
            gloo_timers::future::sleep(AUTO_HIDE).await;
            signal.try_update(|state| state.expire(generation));
        });
    }
}

/// Wall-clock time of a submit click, for the submit-time checks
pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
