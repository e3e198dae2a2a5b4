//! Categories

use async_trait::async_trait;
use ewm_client::dto::{CategoryUpdate, NewCategory};
use ewm_client::models::Category;
use ewm_client::services::categories;
use ewm_client::{ApiResult, CategoryFilters, Transport};

use crate::resource::{Noun, Resource};
use crate::validation::{char_len, ValidationError};

pub const MIN_NAME_LEN: usize = 2;

pub struct Categories;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryDraft {
    pub name: String,
}

#[async_trait(?Send)]
impl Resource for Categories {
    type Record = Category;
    type Draft = CategoryDraft;
    type Filters = CategoryFilters;

    const NOUN: Noun = Noun::new("category", "categories");

    fn record_id(record: &Category) -> i64 {
        record.id
    }

    fn draft_from(record: &Category) -> CategoryDraft {
        CategoryDraft { name: record.name.clone() }
    }

    fn check_draft(draft: &CategoryDraft) -> Result<(), ValidationError> {
        if char_len(&draft.name) < MIN_NAME_LEN {
            return Err(ValidationError::TooShort { field: "Category name", min: MIN_NAME_LEN });
        }
        Ok(())
    }

    async fn list<T: Transport + ?Sized>(transport: &T, filters: &CategoryFilters) -> ApiResult<Vec<Category>> {
        categories::list(transport, filters).await
    }

    async fn create<T: Transport + ?Sized>(transport: &T, draft: &CategoryDraft) -> ApiResult<()> {
        let body = NewCategory { name: draft.name.trim().to_string() };
        categories::create(transport, &body).await.map(|_| ())
    }

    async fn update<T: Transport + ?Sized>(transport: &T, id: i64, draft: &CategoryDraft) -> ApiResult<()> {
        let body = CategoryUpdate { name: draft.name.trim().to_string() };
        categories::update(transport, id, &body).await.map(|_| ())
    }

    async fn delete<T: Transport + ?Sized>(transport: &T, id: i64) -> ApiResult<()> {
        categories::delete(transport, id).await
    }
}
