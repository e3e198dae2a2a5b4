//! Category bindings

use crate::dto::{CategoryUpdate, NewCategory};
use crate::error::ApiResult;
use crate::filters::CategoryFilters;
use crate::models::Category;
use crate::transport::{ApiRequest, Transport};

use super::decode;

pub async fn list<T: Transport + ?Sized>(transport: &T, filters: &CategoryFilters) -> ApiResult<Vec<Category>> {
    let request = ApiRequest::get("/categories").with_query(filters.to_query());
    decode(transport.send(request).await?)
}

pub async fn get<T: Transport + ?Sized>(transport: &T, id: i64) -> ApiResult<Category> {
    decode(transport.send(ApiRequest::get(format!("/categories/{id}"))).await?)
}

pub async fn create<T: Transport + ?Sized>(transport: &T, category: &NewCategory) -> ApiResult<Category> {
    let request = ApiRequest::post("/admin/categories").with_body(category)?;
    decode(transport.send(request).await?)
}

pub async fn update<T: Transport + ?Sized>(transport: &T, id: i64, update: &CategoryUpdate) -> ApiResult<Category> {
    let request = ApiRequest::patch(format!("/admin/categories/{id}")).with_body(update)?;
    decode(transport.send(request).await?)
}

pub async fn delete<T: Transport + ?Sized>(transport: &T, id: i64) -> ApiResult<()> {
    transport
        .send(ApiRequest::delete(format!("/admin/categories/{id}")))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::ScriptedTransport;
    use crate::transport::Method;
    use crate::ApiError;
    use serde_json::json;

    #[tokio::test]
    async fn create_posts_name_to_admin_endpoint() {
        let transport = ScriptedTransport::replying(json!({"id": 9, "name": "Music"}));

        let created = create(&transport, &NewCategory { name: "Music".into() })
            .await
            .unwrap();

        assert_eq!(created, Category { id: 9, name: "Music".into() });
        let call = transport.last_call().unwrap();
        assert_eq!(call.method, Method::Post);
        assert_eq!(call.path, "/admin/categories");
        assert_eq!(call.body, Some(json!({"name": "Music"})));
    }

    #[tokio::test]
    async fn update_patches_single_resource() {
        let transport = ScriptedTransport::replying(json!({"id": 3, "name": "Technology"}));

        update(&transport, 3, &CategoryUpdate { name: "Technology".into() })
            .await
            .unwrap();

        let call = transport.last_call().unwrap();
        assert_eq!(call.method, Method::Patch);
        assert_eq!(call.path, "/admin/categories/3");
        assert_eq!(call.body, Some(json!({"name": "Technology"})));
    }

    #[tokio::test]
    async fn list_and_get_use_public_paths() {
        let transport = ScriptedTransport::new(|request| match request.path.as_str() {
            "/categories" => Ok(json!([{"id": 1, "name": "Tech"}])),
            _ => Ok(json!({"id": 1, "name": "Tech"})),
        });

        assert_eq!(list(&transport, &CategoryFilters::default()).await.unwrap().len(), 1);
        assert_eq!(get(&transport, 1).await.unwrap().name, "Tech");
        assert_eq!(transport.count(Method::Get, "/categories/1"), 1);
    }

    #[tokio::test]
    async fn mismatched_body_is_decode_error() {
        let transport = ScriptedTransport::replying(json!({"unexpected": true}));
        let err = list(&transport, &CategoryFilters::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn delete_ignores_empty_body() {
        let transport = ScriptedTransport::replying(serde_json::Value::Null);
        delete(&transport, 3).await.unwrap();
        assert_eq!(transport.count(Method::Delete, "/admin/categories/3"), 1);
    }
}
