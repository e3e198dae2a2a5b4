//! Resource Contract
//!
//! What a controller needs to know about one resource type: its record,
//! draft and filter shapes, how drafts are checked, and which bindings
//! carry it to the backend.

use std::fmt::Debug;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use ewm_client::{ApiResult, Transport};

use crate::validation::ValidationError;

/// Workflow steps that produce a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    Create,
    Update,
    Delete,
}

/// Singular/plural naming used in notification texts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Noun {
    pub singular: &'static str,
    pub plural: &'static str,
}

impl Noun {
    pub const fn new(singular: &'static str, plural: &'static str) -> Self {
        Self { singular, plural }
    }

    pub fn success(&self, action: Action) -> String {
        let verb = match action {
            Action::Load => "loaded",
            Action::Create => "created",
            Action::Update => "updated",
            Action::Delete => "deleted",
        };
        let subject = match action {
            Action::Load => self.plural,
            _ => self.singular,
        };
        format!("{} {verb} successfully", capitalize(subject))
    }

    pub fn failure(&self, action: Action) -> String {
        match action {
            Action::Load => format!("Error loading {}", self.plural),
            Action::Create => format!("Error creating {}", self.singular),
            Action::Update => format!("Error updating {}", self.singular),
            Action::Delete => format!("Error deleting {}", self.singular),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One backend resource as seen by a [`ResourceController`](crate::ResourceController).
///
/// Implementors are marker types; all state lives in
/// [`ResourceState`](crate::ResourceState).
#[async_trait(?Send)]
pub trait Resource: 'static {
    type Record: Clone + PartialEq + Debug + Send + Sync + 'static;
    /// Form contents for create/edit, minus server-assigned fields
    type Draft: Clone + Default + PartialEq + Debug + Send + Sync + 'static;
    type Filters: Clone + Default + PartialEq + Debug + Send + Sync + 'static;

    const NOUN: Noun;
    const SUPPORTS_EDIT: bool = true;
    const SUPPORTS_DELETE: bool = true;

    fn record_id(record: &Self::Record) -> i64;

    /// Draft pre-filled from an existing record for the edit dialog
    fn draft_from(record: &Self::Record) -> Self::Draft;

    /// Checks that depend only on the draft. A failing draft keeps the
    /// submit action disabled; no notification is raised.
    fn check_draft(draft: &Self::Draft) -> Result<(), ValidationError>;

    /// Checks that depend on the moment of submission. Failures are
    /// reported to the user.
    fn check_at_submit(_draft: &Self::Draft, _now: NaiveDateTime) -> Result<(), ValidationError> {
        Ok(())
    }

    async fn list<T: Transport + ?Sized>(transport: &T, filters: &Self::Filters) -> ApiResult<Vec<Self::Record>>;

    async fn create<T: Transport + ?Sized>(transport: &T, draft: &Self::Draft) -> ApiResult<()>;

    async fn update<T: Transport + ?Sized>(transport: &T, id: i64, draft: &Self::Draft) -> ApiResult<()>;

    async fn delete<T: Transport + ?Sized>(transport: &T, id: i64) -> ApiResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_texts() {
        let noun = Noun::new("category", "categories");
        assert_eq!(noun.success(Action::Create), "Category created successfully");
        assert_eq!(noun.success(Action::Update), "Category updated successfully");
        assert_eq!(noun.failure(Action::Load), "Error loading categories");
        assert_eq!(noun.failure(Action::Delete), "Error deleting category");
        assert_eq!(Noun::new("user", "users").failure(Action::Delete), "Error deleting user");
    }
}
