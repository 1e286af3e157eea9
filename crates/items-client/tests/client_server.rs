//! Drives `ApiClient` and `ItemsHook` against a real server on an ephemeral port.

use items_client::{ApiClient, ClientError, ItemsApi, ItemsHook};
use items_core::{CreateItemInput, ItemId, ListQuery, UpdateItemInput};
use items_server::{AppState, app};
use tokio::net::TcpListener;

async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app(AppState::in_memory())).await.unwrap();
    });

    format!("http://{addr}")
}

fn laptop() -> CreateItemInput {
    CreateItemInput {
        name: "Laptop".to_string(),
        description: Some("Thin and light".to_string()),
        price: 1299.99,
        category: "Electronics".to_string(),
        in_stock: true,
    }
}

#[tokio::test]
async fn test_api_client_round_trip() {
    let client = ApiClient::new(spawn_server().await).unwrap();

    let health = client.health().await.unwrap();
    assert_eq!(health.status, "ok");

    let created = client.create(&laptop()).await.unwrap();
    assert!(created.in_stock);

    let query = ListQuery {
        search: Some("laptop".to_string()),
        ..Default::default()
    };
    let page = client.list(&query).await.unwrap();
    assert_eq!(page.data, vec![created.clone()]);

    let updated = client
        .update(
            created.id,
            &UpdateItemInput {
                price: Some(1199.99),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.price, 1199.99);
    assert_eq!(updated.name, created.name);

    assert_eq!(client.get(created.id).await.unwrap(), updated);

    let message = client.delete(created.id).await.unwrap();
    assert_eq!(message, "Item deleted successfully");
}

#[tokio::test]
async fn test_api_errors_are_mapped() {
    let client = ApiClient::new(spawn_server().await).unwrap();

    let err = client.get(ItemId::new()).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.code(), Some("NOT_FOUND"));

    let mut invalid = laptop();
    invalid.price = -10.0;
    let err = client.create(&invalid).await.unwrap_err();
    match &err {
        ClientError::Api { status, code, details, .. } => {
            assert_eq!(*status, 400);
            assert_eq!(code, "VALIDATION_ERROR");
            assert_eq!(details[0].field, "price");
        }
        other => panic!("expected an API error, got {other:?}"),
    }
    assert_eq!(err.to_string(), "Validation failed");

    assert!(client.list(&ListQuery::default()).await.unwrap().data.is_empty());
}

#[tokio::test]
async fn test_hook_against_server() {
    let mut hook = ItemsHook::new(ApiClient::new(spawn_server().await).unwrap());
    hook.mount().await;
    assert!(hook.state().items.is_empty());
    assert_eq!(hook.state().pagination.unwrap().total, 0);

    let created = hook.create(laptop()).await.unwrap();
    assert_eq!(hook.state().items, vec![created.clone()]);
    assert_eq!(hook.state().pagination.unwrap().total, 1);

    let mut invalid = laptop();
    invalid.name = String::new();
    assert!(hook.create(invalid).await.is_err());
    assert_eq!(hook.state().items.len(), 1);
    assert_eq!(hook.state().error.as_deref(), Some("Validation failed"));

    hook.refresh().await;
    assert!(hook.state().error.is_none());

    assert!(hook.delete(ItemId::new()).await.is_err());
    assert_eq!(hook.state().items.len(), 1);
    assert_eq!(hook.state().pagination.unwrap().total, 1);

    hook.delete(created.id).await.unwrap();
    assert!(hook.state().items.is_empty());

    hook.refresh().await;
    assert_eq!(hook.state().pagination.unwrap().total, 0);
}
