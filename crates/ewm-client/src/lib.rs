//! EWM Client
//!
//! Layered bindings to the event service REST API:
//! - transport: single-attempt JSON requests against a fixed origin
//! - models / dto / filters: wire shapes of records, payloads and query state
//! - services: one module of verb/path templates per resource

mod config;
mod error;
mod filters;
mod transport;

pub mod dto;
pub mod models;
pub mod services;

pub use config::{ApiConfig, DEFAULT_ACTING_USER_ID, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiResult, ErrorPayload};
pub use filters::{CategoryFilters, CompilationFilters, EventFilters, Page, PaidFilter, UserFilters};
pub use transport::{ApiRequest, HttpTransport, Method, Transport};

/// Timestamp format the backend expects and returns for event dates
pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
