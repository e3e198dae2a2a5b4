//! Resource Service Bindings
//!
//! Verb/path templates over a [`Transport`](crate::Transport), one module per
//! resource. Nothing here validates or reshapes payloads.

pub mod categories;
pub mod compilations;
pub mod events;
pub mod users;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiResult;

fn decode<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
    Ok(serde_json::from_value(value)?)
}
