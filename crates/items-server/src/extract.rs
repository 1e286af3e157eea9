//! Extractors that validate raw request input into domain types.
//!
//! Each extractor rejects with an [`ApiError`], so handlers only ever see
//! values that passed validation.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use items_core::{ItemId, ListQuery, Schema};
use serde_json::Value;

use crate::error::ApiError;

/// JSON body parsed through a [`Schema`].
///
/// Syntax errors and a missing JSON content type become `BadRequest`;
/// schema failures become `Validation`.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: Schema,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        Ok(Self(T::parse(&value)?))
    }
}

/// List query parameters (`page`, `limit`, `category`, `search`).
#[derive(Debug)]
pub struct ValidQuery(pub ListQuery);

impl<S> FromRequestParts<S> for ValidQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        Ok(Self(ListQuery::from_params(&params)?))
    }
}

/// The `{id}` path segment as an [`ItemId`].
#[derive(Debug)]
pub struct ValidItemId(pub ItemId);

impl<S> FromRequestParts<S> for ValidItemId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        Ok(Self(ItemId::parse(&raw)?))
    }
}
