//! The `{"data": ...}` envelope every successful API response uses.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// A `201 Created` response carrying the new resource.
pub type Created<T> = (StatusCode, Json<DataResponse<T>>);

/// Wrap a newly created resource.
pub fn created<T: Serialize>(data: T) -> Created<T> {
    (StatusCode::CREATED, Json(DataResponse { data }))
}
