//! Compilation bindings

use crate::dto::{CompilationUpdate, NewCompilation};
use crate::error::ApiResult;
use crate::filters::CompilationFilters;
use crate::models::Compilation;
use crate::transport::{ApiRequest, Transport};

use super::decode;

pub async fn list<T: Transport + ?Sized>(
    transport: &T,
    filters: &CompilationFilters,
) -> ApiResult<Vec<Compilation>> {
    let request = ApiRequest::get("/compilations").with_query(filters.to_query());
    decode(transport.send(request).await?)
}

pub async fn get<T: Transport + ?Sized>(transport: &T, id: i64) -> ApiResult<Compilation> {
    decode(transport.send(ApiRequest::get(format!("/compilations/{id}"))).await?)
}

pub async fn create<T: Transport + ?Sized>(transport: &T, compilation: &NewCompilation) -> ApiResult<Compilation> {
    let request = ApiRequest::post("/admin/compilations").with_body(compilation)?;
    decode(transport.send(request).await?)
}

pub async fn update<T: Transport + ?Sized>(
    transport: &T,
    id: i64,
    update: &CompilationUpdate,
) -> ApiResult<Compilation> {
    let request = ApiRequest::patch(format!("/admin/compilations/{id}")).with_body(update)?;
    decode(transport.send(request).await?)
}

pub async fn delete<T: Transport + ?Sized>(transport: &T, id: i64) -> ApiResult<()> {
    transport
        .send(ApiRequest::delete(format!("/admin/compilations/{id}")))
        .await?;
    Ok(())
}
