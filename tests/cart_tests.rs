mod support;

use std::sync::Arc;
use storefront::{
    abstract_trait::CartServiceTrait,
    domain::requests::{AddCartItemRequest, UpdateCartItemRequest},
    errors::ServiceError,
    service::CartService,
};
use support::MemStore;

fn cart_service(store: &MemStore) -> CartService {
    CartService::new(Arc::new(store.clone()), Arc::new(store.clone()))
}

#[tokio::test]
async fn add_creates_a_new_cart_line() {
    let store = MemStore::default();
    let product_a = store.add_product("Widget", 1500, 5);

    let service = cart_service(&store);
    let response = service
        .add_item(
            1,
            &AddCartItemRequest {
                product_id: product_a,
                quantity: 2,
            },
        )
        .await
        .unwrap();

    assert_eq!(response.data.product_id, product_a);
    assert_eq!(response.data.quantity, 2);
    assert_eq!(store.cart_len(1), 1);
}

#[tokio::test]
async fn add_merges_quantities_onto_an_existing_line() {
    let store = MemStore::default();
    let product_a = store.add_product("Widget", 1500, 5);

    let service = cart_service(&store);
    let req = AddCartItemRequest {
        product_id: product_a,
        quantity: 2,
    };
    service.add_item(1, &req).await.unwrap();
    let response = service.add_item(1, &req).await.unwrap();

    // Still one line for (user, product), quantity accumulated.
    assert_eq!(store.cart_len(1), 1);
    assert_eq!(response.data.quantity, 4);
}

#[tokio::test]
async fn add_checks_stock_against_the_accumulated_quantity() {
    let store = MemStore::default();
    let product_a = store.add_product("Widget", 1500, 5);

    let service = cart_service(&store);
    service
        .add_item(
            1,
            &AddCartItemRequest {
                product_id: product_a,
                quantity: 4,
            },
        )
        .await
        .unwrap();

    let err = service
        .add_item(
            1,
            &AddCartItemRequest {
                product_id: product_a,
                quantity: 2,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::InsufficientStock { .. }));
}

#[tokio::test]
async fn add_rejects_unknown_product() {
    let store = MemStore::default();

    let service = cart_service(&store);
    let err = service
        .add_item(
            1,
            &AddCartItemRequest {
                product_id: 42,
                quantity: 1,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn update_overwrites_quantity_within_stock() {
    let store = MemStore::default();
    let product_a = store.add_product("Widget", 1500, 5);
    let line = store.add_cart_line(1, product_a, 2);

    let service = cart_service(&store);
    let response = service
        .update_quantity(1, line, &UpdateCartItemRequest { quantity: 5 })
        .await
        .unwrap();
    assert_eq!(response.data.quantity, 5);

    let err = service
        .update_quantity(1, line, &UpdateCartItemRequest { quantity: 6 })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InsufficientStock { .. }));
}

#[tokio::test]
async fn cart_lines_are_scoped_to_their_owner() {
    let store = MemStore::default();
    let product_a = store.add_product("Widget", 1500, 5);
    let line = store.add_cart_line(1, product_a, 2);

    let service = cart_service(&store);

    let err = service
        .update_quantity(2, line, &UpdateCartItemRequest { quantity: 1 })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let err = service.remove_item(2, line).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    // The owner still can.
    service.remove_item(1, line).await.unwrap();
    assert_eq!(store.cart_len(1), 0);
}

#[tokio::test]
async fn get_cart_totals_all_lines() {
    let store = MemStore::default();
    let product_a = store.add_product("Widget", 1500, 5);
    let product_b = store.add_product("Gadget", 2750, 5);
    store.add_cart_line(1, product_a, 2);
    store.add_cart_line(1, product_b, 1);

    let service = cart_service(&store);
    let response = service.get_cart(1).await.unwrap();

    assert_eq!(response.data.items.len(), 2);
    assert_eq!(response.data.total, 2 * 1500 + 2750);
    assert_eq!(
        response.data.total,
        response.data.items.iter().map(|i| i.subtotal).sum::<i64>()
    );
}

#[tokio::test]
async fn add_rejects_zero_quantity() {
    let store = MemStore::default();
    let product_a = store.add_product("Widget", 1500, 5);

    let service = cart_service(&store);
    let err = service
        .add_item(
            1,
            &AddCartItemRequest {
                product_id: product_a,
                quantity: 0,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
}
