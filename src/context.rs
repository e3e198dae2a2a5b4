//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use ewm_client::ApiConfig;
use ewm_sync::{Resource, ResourceController, ResourceState};
use leptos::prelude::*;

use crate::state::{Api, Controller, Notices, SignalCell};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Transport shared by every page
    pub api: Api,
    /// Notification bar state
    pub notices: Notices,
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            api: Api::new(config.clone()),
            notices: Notices::new(),
            config: StoredValue::new(config),
        }
    }

    /// User id new events are created under
    pub fn acting_user_id(&self) -> i64 {
        self.config.with_value(|config| config.acting_user_id)
    }

    /// Fresh controller with its own state, owned by the calling component
    pub fn controller<R: Resource>(&self) -> Controller<R> {
        ResourceController::new(self.api, SignalCell::new(ResourceState::default()), self.notices)
    }
}
