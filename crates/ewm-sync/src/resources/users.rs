//! Users
//!
//! The admin API can create and delete users but has no edit endpoint.

use async_trait::async_trait;
use ewm_client::dto::NewUser;
use ewm_client::models::User;
use ewm_client::services::users;
use ewm_client::{ApiError, ApiResult, Transport, UserFilters};

use crate::resource::{Noun, Resource};
use crate::validation::{require, ValidationError};

pub struct Users;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}

#[async_trait(?Send)]
impl Resource for Users {
    type Record = User;
    type Draft = UserDraft;
    type Filters = UserFilters;

    const NOUN: Noun = Noun::new("user", "users");
    const SUPPORTS_EDIT: bool = false;

    fn record_id(record: &User) -> i64 {
        record.id
    }

    fn draft_from(record: &User) -> UserDraft {
        UserDraft {
            name: record.name.clone(),
            email: record.email.clone(),
        }
    }

    fn check_draft(draft: &UserDraft) -> Result<(), ValidationError> {
        require("Name", &draft.name)?;
        require("Email", &draft.email)?;
        if !draft.email.contains('@') {
            return Err(ValidationError::Invalid("Email"));
        }
        Ok(())
    }

    async fn list<T: Transport + ?Sized>(transport: &T, filters: &UserFilters) -> ApiResult<Vec<User>> {
        users::list(transport, filters).await
    }

    async fn create<T: Transport + ?Sized>(transport: &T, draft: &UserDraft) -> ApiResult<()> {
        let body = NewUser {
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
        };
        users::create(transport, &body).await.map(|_| ())
    }

    async fn update<T: Transport + ?Sized>(_transport: &T, _id: i64, _draft: &UserDraft) -> ApiResult<()> {
        Err(ApiError::Unsupported("editing users"))
    }

    async fn delete<T: Transport + ?Sized>(transport: &T, id: i64) -> ApiResult<()> {
        users::delete(transport, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_email_required() {
        let mut draft = UserDraft::default();
        assert_eq!(Users::check_draft(&draft), Err(ValidationError::Missing("Name")));

        draft.name = "Bob".into();
        assert_eq!(Users::check_draft(&draft), Err(ValidationError::Missing("Email")));

        draft.email = "bob.example.org".into();
        assert_eq!(Users::check_draft(&draft), Err(ValidationError::Invalid("Email")));

        draft.email = "bob@example.org".into();
        assert!(Users::check_draft(&draft).is_ok());
    }
}
