//! EWM Sync
//!
//! Keeps a locally held collection consistent with the backend:
//! - state: owned per-resource state (snapshot, phase, dialog, filters)
//! - controller: load / submit / remove workflows, reload after every mutation
//! - resources: drafts, validation and bindings for each resource type
//! - notify: single-slot notification surface shared by all controllers

mod cell;
mod controller;
mod notify;
mod resource;
mod state;
mod validation;

pub mod resources;

#[cfg(test)]
mod testing;

pub use cell::StateCell;
pub use controller::{ResourceController, SubmitOutcome};
pub use notify::{Notify, NotificationState, Severity, AUTO_HIDE};
pub use resource::{Action, Noun, Resource};
pub use state::{Dialog, DialogMode, Phase, ResourceState, Submission, SubmitRefusal};
pub use validation::ValidationError;
