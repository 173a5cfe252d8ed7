mod support;

use std::sync::Arc;
use storefront::{
    abstract_trait::{ProductCommandServiceTrait, ProductQueryServiceTrait},
    domain::requests::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
    errors::ServiceError,
    service::{ProductCommandService, ProductQueryService},
};
use support::MemStore;

const BASE_URL: &str = "http://localhost:5000";

fn query_service(store: &MemStore) -> ProductQueryService {
    ProductQueryService::new(Arc::new(store.clone()), BASE_URL.to_string())
}

fn command_service(store: &MemStore) -> ProductCommandService {
    ProductCommandService::new(Arc::new(store.clone()))
}

#[tokio::test]
async fn public_listing_pages_and_counts() {
    let store = MemStore::default();
    for i in 0..15 {
        store.add_product(&format!("Widget {i}"), 1000 + i, 5);
    }

    let service = query_service(&store);
    let response = service
        .find_all(&FindAllProducts {
            page: 2,
            page_size: 10,
            search: String::new(),
        })
        .await
        .unwrap();

    assert_eq!(response.data.len(), 5);
    assert_eq!(response.pagination.total_items, 15);
    assert_eq!(response.pagination.total_pages, 2);
}

#[tokio::test]
async fn search_filters_by_name() {
    let store = MemStore::default();
    store.add_product("Mechanical Keyboard", 12999, 5);
    store.add_product("Mouse", 4999, 5);

    let service = query_service(&store);
    let response = service
        .find_all(&FindAllProducts {
            search: "keyboard".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0].name, "Mechanical Keyboard");
}

#[tokio::test]
async fn show_returns_product_or_not_found() {
    let store = MemStore::default();
    let id = store.add_product("Widget", 1500, 5);

    let service = query_service(&store);
    let response = service.find_by_id(id).await.unwrap();
    assert_eq!(response.data.id, id);
    assert_eq!(response.data.price, 1500);

    let err = service.find_by_id(id + 100).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn admin_create_update_delete_roundtrip() {
    let store = MemStore::default();
    let command = command_service(&store);
    let query = query_service(&store);

    let created = command
        .create_product(&CreateProductRequest {
            name: "Mechanical Keyboard".into(),
            description: "Clicky".into(),
            price: 12999,
            stock: 25,
            image_url: Some("https://cdn.example.com/kb.png".into()),
        })
        .await
        .unwrap();
    let id = created.data.id;

    let updated = command
        .update_product(
            id,
            &UpdateProductRequest {
                name: None,
                description: None,
                price: Some(10999),
                stock: None,
                image_url: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.data.price, 10999);
    assert_eq!(updated.data.name, "Mechanical Keyboard");

    // Admin view carries the raw image metadata columns.
    let admin = query.find_all_admin(&FindAllProducts::default()).await.unwrap();
    assert_eq!(
        admin.data[0].image_url.as_deref(),
        Some("https://cdn.example.com/kb.png")
    );

    command.delete_product(id).await.unwrap();
    let err = query.find_by_id(id).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn create_rejects_negative_price() {
    let store = MemStore::default();
    let command = command_service(&store);

    let err = command
        .create_product(&CreateProductRequest {
            name: "Widget".into(),
            description: "A widget".into(),
            price: -1,
            stock: 5,
            image_url: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn update_of_missing_product_is_not_found() {
    let store = MemStore::default();
    let command = command_service(&store);

    let err = command
        .update_product(
            42,
            &UpdateProductRequest {
                name: None,
                description: None,
                price: Some(100),
                stock: None,
                image_url: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::NotFound(_)));
}
