//! Item CRUD routes.
//!
//! - POST /items - Create an item
//! - GET /items - List items with filtering and pagination
//! - GET /items/{id} - Get a single item
//! - PUT /items/{id} - Partially update an item
//! - DELETE /items/{id} - Delete an item

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use items_core::{ApiResponse, CreateItemInput, Item, MessageResponse, Page, UpdateItemInput};

use crate::error::ApiResult;
use crate::extract::{ValidItemId, ValidJson, ValidQuery};
use crate::state::AppState;

/// Message returned after a successful delete.
pub const DELETED_MESSAGE: &str = "Item deleted successfully";

/// POST /items
async fn create_item(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateItemInput>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Item>>)> {
    let item = state.service().create(input)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(item))))
}

/// GET /items
async fn list_items(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery,
) -> ApiResult<Json<ApiResponse<Page<Item>>>> {
    let page = state.service().find_all(&query)?;
    Ok(Json(ApiResponse::success(page)))
}

/// GET /items/{id}
async fn get_item(
    State(state): State<AppState>,
    ValidItemId(id): ValidItemId,
) -> ApiResult<Json<ApiResponse<Item>>> {
    let item = state.service().find_by_id(id)?;
    Ok(Json(ApiResponse::success(item)))
}

/// PUT /items/{id}
async fn update_item(
    State(state): State<AppState>,
    ValidItemId(id): ValidItemId,
    ValidJson(changes): ValidJson<UpdateItemInput>,
) -> ApiResult<Json<ApiResponse<Item>>> {
    let item = state.service().update(id, changes)?;
    Ok(Json(ApiResponse::success(item)))
}

/// DELETE /items/{id}
async fn delete_item(
    State(state): State<AppState>,
    ValidItemId(id): ValidItemId,
) -> ApiResult<Json<MessageResponse>> {
    state.service().delete(id)?;
    Ok(Json(MessageResponse::success(DELETED_MESSAGE)))
}

/// Build item routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::routes::build_router;

    async fn send(state: &AppState, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = build_router(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn create(state: &AppState, body: Value) -> Value {
        let (status, json) = send(state, "POST", "/items", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        json["data"].clone()
    }

    #[tokio::test]
    async fn test_create_item() {
        let state = AppState::in_memory();
        let (status, json) = send(
            &state,
            "POST",
            "/items",
            Some(json!({ "name": "Laptop", "price": 999.99, "category": "Electronics" })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["name"], "Laptop");
        assert_eq!(json["data"]["inStock"], true);
        assert_eq!(json["data"]["createdAt"], json["data"]["updatedAt"]);
        assert!(json["data"].get("description").is_none());
    }

    #[tokio::test]
    async fn test_create_missing_fields_is_bad_request() {
        let state = AppState::in_memory();
        let (status, json) = send(&state, "POST", "/items", Some(json!({ "name": "Laptop" }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["message"], "Validation failed");

        let fields: Vec<_> = json["error"]["details"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["field"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(fields, ["price", "category"]);
    }

    #[tokio::test]
    async fn test_create_length_and_negative_price_are_bad_request() {
        let state = AppState::in_memory();
        let (status, json) = send(
            &state,
            "POST",
            "/items",
            Some(json!({ "name": "x".repeat(101), "price": -5, "category": "Misc" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["details"].as_array().unwrap().len(), 2);
        assert_eq!(state.service().count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_zero_price_is_unprocessable() {
        let state = AppState::in_memory();
        let (status, json) = send(
            &state,
            "POST",
            "/items",
            Some(json!({ "name": "Free", "price": 0, "category": "Misc" })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"]["details"][0]["constraint"], "positive");
        assert_eq!(state.service().count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_malformed_json() {
        let state = AppState::in_memory();
        let request = Request::builder()
            .method("POST")
            .uri("/items")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"name\": "))
            .unwrap();

        let response = build_router(state).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_list_with_filters() {
        let state = AppState::in_memory();
        create(&state, json!({ "name": "Laptop", "price": 999.99, "category": "Electronics" })).await;
        create(&state, json!({ "name": "Novel", "price": 12.5, "category": "Books" })).await;

        let (status, json) = send(&state, "GET", "/items?category=electronics&search=LAP", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["data"].as_array().unwrap().len(), 1);
        assert_eq!(
            json["data"]["pagination"],
            json!({ "page": 1, "limit": 10, "total": 1, "totalPages": 1 })
        );
    }

    #[tokio::test]
    async fn test_list_rejects_bad_page() {
        let state = AppState::in_memory();
        let (status, json) = send(&state, "GET", "/items?page=abc", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["details"][0]["field"], "page");
    }

    #[tokio::test]
    async fn test_get_invalid_id() {
        let state = AppState::in_memory();
        let (status, json) = send(&state, "GET", "/items/not-a-uuid", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["details"][0]["message"], "Invalid item ID format");
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let state = AppState::in_memory();
        let id = uuid::Uuid::new_v4();
        let (status, json) = send(&state, "GET", &format!("/items/{id}"), None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], format!("Item with id {id} not found"));
    }

    #[tokio::test]
    async fn test_update_partial() {
        let state = AppState::in_memory();
        let created = create(
            &state,
            json!({ "name": "Laptop", "price": 999.99, "category": "Electronics" }),
        )
        .await;
        let uri = format!("/items/{}", created["id"].as_str().unwrap());

        let (status, json) = send(&state, "PUT", &uri, Some(json!({ "price": 1199.99 }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["price"], 1199.99);
        assert_eq!(json["data"]["name"], "Laptop");
        assert_eq!(json["data"]["createdAt"], created["createdAt"]);
        assert_ne!(json["data"]["updatedAt"], created["updatedAt"]);
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let state = AppState::in_memory();
        let created = create(
            &state,
            json!({ "name": "Laptop", "price": 999.99, "category": "Electronics" }),
        )
        .await;
        let uri = format!("/items/{}", created["id"].as_str().unwrap());

        let (status, json) = send(&state, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "success": true, "message": DELETED_MESSAGE }));

        let (status, _) = send(&state, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&state, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let state = AppState::in_memory();
        let (status, json) = send(&state, "GET", "/nope", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["message"], "Route GET /nope not found");
    }
}
