//! User bindings

use crate::dto::NewUser;
use crate::error::ApiResult;
use crate::filters::UserFilters;
use crate::models::User;
use crate::transport::{ApiRequest, Transport};

use super::decode;

pub async fn list<T: Transport + ?Sized>(transport: &T, filters: &UserFilters) -> ApiResult<Vec<User>> {
    let request = ApiRequest::get("/admin/users").with_query(filters.to_query());
    decode(transport.send(request).await?)
}

pub async fn create<T: Transport + ?Sized>(transport: &T, user: &NewUser) -> ApiResult<User> {
    let request = ApiRequest::post("/admin/users").with_body(user)?;
    decode(transport.send(request).await?)
}

pub async fn delete<T: Transport + ?Sized>(transport: &T, id: i64) -> ApiResult<()> {
    transport.send(ApiRequest::delete(format!("/admin/users/{id}"))).await?;
    Ok(())
}

/// Make `follower_id` follow `user_id`
pub async fn add_follower<T: Transport + ?Sized>(transport: &T, user_id: i64, follower_id: i64) -> ApiResult<()> {
    transport
        .send(ApiRequest::post(format!("/users/{user_id}/followers/{follower_id}")))
        .await?;
    Ok(())
}

pub async fn remove_follower<T: Transport + ?Sized>(transport: &T, user_id: i64, follower_id: i64) -> ApiResult<()> {
    transport
        .send(ApiRequest::delete(format!("/users/{user_id}/followers/{follower_id}")))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{backend_error, ScriptedTransport};
    use crate::transport::Method;
    use serde_json::json;

    #[tokio::test]
    async fn list_passes_filters_as_query() {
        let transport = ScriptedTransport::replying(json!([
            {"id": 5, "name": "Bob", "email": "bob@example.org"}
        ]));
        let filters = UserFilters { ids: vec![5], ..UserFilters::default() };

        let users = list(&transport, &filters).await.unwrap();

        assert_eq!(users[0].email, "bob@example.org");
        let call = transport.last_call().unwrap();
        assert_eq!(call.path, "/admin/users");
        assert_eq!(call.query_value("ids"), Some("5"));
    }

    #[tokio::test]
    async fn follower_relation_paths() {
        let transport = ScriptedTransport::replying(serde_json::Value::Null);

        add_follower(&transport, 1, 2).await.unwrap();
        remove_follower(&transport, 1, 2).await.unwrap();

        assert_eq!(transport.count(Method::Post, "/users/1/followers/2"), 1);
        assert_eq!(transport.count(Method::Delete, "/users/1/followers/2"), 1);
    }

    #[tokio::test]
    async fn delete_propagates_backend_error() {
        let transport = ScriptedTransport::new(|_| Err(backend_error(404, "User with id=5 was not found")));
        let err = delete(&transport, 5).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
