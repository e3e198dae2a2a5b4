//! Scripted transport for tests
//!
//! Records every request and answers from a closure, so callers can play
//! the backend without a network.

use std::cell::RefCell;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ApiError, ApiResult, ErrorPayload};
use crate::transport::{ApiRequest, Method, Transport};

type Handler = Box<dyn Fn(&ApiRequest) -> ApiResult<Value>>;

pub struct ScriptedTransport {
    handler: Handler,
    calls: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new(handler: impl Fn(&ApiRequest) -> ApiResult<Value> + 'static) -> Self {
        Self {
            handler: Box::new(handler),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Answers every request with `value`
    pub fn replying(value: Value) -> Self {
        Self::new(move |_| Ok(value.clone()))
    }

    /// Fails every request with a backend error of `status`
    pub fn failing(status: u16) -> Self {
        Self::new(move |_| Err(backend_error(status, "scripted failure")))
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.borrow().clone()
    }

    pub fn last_call(&self) -> Option<ApiRequest> {
        self.calls.borrow().last().cloned()
    }

    /// Number of recorded requests with this verb and path
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.method == method && call.path == path)
            .count()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        self.calls.borrow_mut().push(request.clone());
        (self.handler)(&request)
    }
}

pub fn backend_error(status: u16, message: &str) -> ApiError {
    ApiError::Backend {
        status,
        payload: ErrorPayload {
            message: Some(message.to_string()),
            ..ErrorPayload::default()
        },
    }
}
