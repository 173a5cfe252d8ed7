use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use storefront::{
    abstract_trait::{
        CartRepositoryTrait, OrderCommandRepositoryTrait, OrderQueryRepositoryTrait,
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
    },
    domain::requests::{
        CreateOrderRequest, CreateProductRequest, FindAllProducts, UpdateProductRequest,
    },
    errors::RepositoryError,
    model::{CartItem, CartItemWithProduct, Order, OrderItemDetail, OrderWithItems, Product},
};

#[derive(Default)]
pub struct StoreState {
    next_id: i32,
    pub products: BTreeMap<i32, Product>,
    pub cart: Vec<CartItem>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItemDetail>,
}

impl StoreState {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory stand-in for the Postgres repositories. A single mutex guards
/// the whole state, so `checkout` is exactly as atomic here as the real
/// transaction is against the database.
#[derive(Clone, Default)]
pub struct MemStore(pub Arc<Mutex<StoreState>>);

impl MemStore {
    pub fn add_product(&self, name: &str, price: i64, stock: i32) -> i32 {
        let mut state = self.0.lock().unwrap();
        let id = state.next_id();
        state.products.insert(
            id,
            Product {
                product_id: id,
                name: name.to_string(),
                description: format!("{name} description"),
                price,
                stock,
                image_url: None,
                image_filename: None,
                image_path: None,
                image_alt: None,
                image_thumbnail: None,
                created_at: Some(Utc::now().naive_utc()),
                updated_at: Some(Utc::now().naive_utc()),
            },
        );
        id
    }

    pub fn add_cart_line(&self, user_id: i32, product_id: i32, quantity: i32) -> i32 {
        let mut state = self.0.lock().unwrap();
        let id = state.next_id();
        state.cart.push(CartItem {
            cart_item_id: id,
            user_id,
            product_id,
            quantity,
            created_at: Some(Utc::now().naive_utc()),
            updated_at: Some(Utc::now().naive_utc()),
        });
        id
    }

    pub fn set_price(&self, product_id: i32, price: i64) {
        let mut state = self.0.lock().unwrap();
        state.products.get_mut(&product_id).unwrap().price = price;
    }

    pub fn stock_of(&self, product_id: i32) -> i32 {
        self.0.lock().unwrap().products[&product_id].stock
    }

    pub fn cart_len(&self, user_id: i32) -> usize {
        self.0
            .lock()
            .unwrap()
            .cart
            .iter()
            .filter(|c| c.user_id == user_id)
            .count()
    }

    pub fn order_count(&self) -> usize {
        self.0.lock().unwrap().orders.len()
    }
}

fn joined_cart(state: &StoreState, user_id: i32) -> Vec<CartItemWithProduct> {
    let mut lines: Vec<CartItemWithProduct> = state
        .cart
        .iter()
        .filter(|c| c.user_id == user_id)
        .map(|c| {
            let product = &state.products[&c.product_id];
            CartItemWithProduct {
                cart_item_id: c.cart_item_id,
                product_id: c.product_id,
                quantity: c.quantity,
                name: product.name.clone(),
                price: product.price,
                stock: product.stock,
            }
        })
        .collect();
    lines.sort_by_key(|l| l.product_id);
    lines
}

#[async_trait]
impl ProductQueryRepositoryTrait for MemStore {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<Product>, i64), RepositoryError> {
        let state = self.0.lock().unwrap();
        let search = req.search.trim().to_lowercase();

        let matching: Vec<Product> = state
            .products
            .values()
            .filter(|p| search.is_empty() || p.name.to_lowercase().contains(&search))
            .cloned()
            .collect();

        let total = matching.len() as i64;
        let offset = (((req.page - 1).max(0)) * req.page_size) as usize;
        let page = matching
            .into_iter()
            .skip(offset)
            .take(req.page_size as usize)
            .collect();

        Ok((page, total))
    }

    async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, RepositoryError> {
        Ok(self.0.lock().unwrap().products.get(&product_id).cloned())
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for MemStore {
    async fn create_product(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        let mut state = self.0.lock().unwrap();
        let id = state.next_id();
        let product = Product {
            product_id: id,
            name: req.name.clone(),
            description: req.description.clone(),
            price: req.price,
            stock: req.stock,
            image_url: req.image_url.clone(),
            image_filename: None,
            image_path: None,
            image_alt: None,
            image_thumbnail: None,
            created_at: Some(Utc::now().naive_utc()),
            updated_at: Some(Utc::now().naive_utc()),
        };
        state.products.insert(id, product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        product_id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Product, RepositoryError> {
        let mut state = self.0.lock().unwrap();
        let product = state
            .products
            .get_mut(&product_id)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(name) = &req.name {
            product.name = name.clone();
        }
        if let Some(description) = &req.description {
            product.description = description.clone();
        }
        if let Some(price) = req.price {
            product.price = price;
        }
        if let Some(stock) = req.stock {
            product.stock = stock;
        }
        if let Some(image_url) = &req.image_url {
            product.image_url = Some(image_url.clone());
        }

        Ok(product.clone())
    }

    async fn delete_product(&self, product_id: i32) -> Result<(), RepositoryError> {
        let mut state = self.0.lock().unwrap();

        if state
            .order_items
            .iter()
            .any(|i| i.product_id == product_id)
        {
            return Err(RepositoryError::ForeignKey(
                "product referenced by order items".into(),
            ));
        }

        state
            .products
            .remove(&product_id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl CartRepositoryTrait for MemStore {
    async fn find_items(
        &self,
        user_id: i32,
    ) -> Result<Vec<CartItemWithProduct>, RepositoryError> {
        let state = self.0.lock().unwrap();
        Ok(joined_cart(&state, user_id))
    }

    async fn find_item(
        &self,
        user_id: i32,
        product_id: i32,
    ) -> Result<Option<CartItem>, RepositoryError> {
        let state = self.0.lock().unwrap();
        Ok(state
            .cart
            .iter()
            .find(|c| c.user_id == user_id && c.product_id == product_id)
            .cloned())
    }

    async fn upsert_item(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError> {
        let mut state = self.0.lock().unwrap();

        if let Some(existing) = state
            .cart
            .iter_mut()
            .find(|c| c.user_id == user_id && c.product_id == product_id)
        {
            existing.quantity += quantity;
            return Ok(existing.clone());
        }

        let id = state.next_id();
        let item = CartItem {
            cart_item_id: id,
            user_id,
            product_id,
            quantity,
            created_at: Some(Utc::now().naive_utc()),
            updated_at: Some(Utc::now().naive_utc()),
        };
        state.cart.push(item.clone());
        Ok(item)
    }

    async fn update_quantity(
        &self,
        user_id: i32,
        cart_item_id: i32,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError> {
        let mut state = self.0.lock().unwrap();
        let item = state
            .cart
            .iter_mut()
            .find(|c| c.user_id == user_id && c.cart_item_id == cart_item_id)
            .ok_or(RepositoryError::NotFound)?;
        item.quantity = quantity;
        Ok(item.clone())
    }

    async fn remove_item(&self, user_id: i32, cart_item_id: i32) -> Result<(), RepositoryError> {
        let mut state = self.0.lock().unwrap();
        let before = state.cart.len();
        state
            .cart
            .retain(|c| !(c.user_id == user_id && c.cart_item_id == cart_item_id));

        if state.cart.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for MemStore {
    async fn find_all_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<OrderWithItems>, RepositoryError> {
        let state = self.0.lock().unwrap();
        let mut result: Vec<OrderWithItems> = state
            .orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .map(|order| OrderWithItems {
                order: order.clone(),
                items: state
                    .order_items
                    .iter()
                    .filter(|i| i.order_id == order.order_id)
                    .cloned()
                    .collect(),
            })
            .collect();
        result.reverse();
        Ok(result)
    }

    async fn find_by_id(
        &self,
        user_id: i32,
        order_id: i32,
    ) -> Result<Option<OrderWithItems>, RepositoryError> {
        let state = self.0.lock().unwrap();
        Ok(state
            .orders
            .iter()
            .find(|o| o.order_id == order_id && o.user_id == user_id)
            .map(|order| OrderWithItems {
                order: order.clone(),
                items: state
                    .order_items
                    .iter()
                    .filter(|i| i.order_id == order.order_id)
                    .cloned()
                    .collect(),
            }))
    }
}

/// Fails the first `conflicts` checkout attempts with a retryable conflict
/// before delegating, the way a lost serialization race surfaces from
/// Postgres.
pub struct ConflictingCheckout {
    inner: MemStore,
    remaining: Mutex<u32>,
}

impl ConflictingCheckout {
    pub fn new(inner: MemStore, conflicts: u32) -> Self {
        Self {
            inner,
            remaining: Mutex::new(conflicts),
        }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for ConflictingCheckout {
    async fn checkout(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<OrderWithItems, RepositoryError> {
        {
            let mut remaining = self.remaining.lock().unwrap();
            if *remaining > 0 {
                *remaining -= 1;
                return Err(RepositoryError::Conflict(
                    "could not serialize access due to concurrent update".into(),
                ));
            }
        }

        self.inner.checkout(user_id, req).await
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for MemStore {
    async fn checkout(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<OrderWithItems, RepositoryError> {
        // One lock across check and mutation: all-or-nothing, same as the
        // real transaction.
        let mut state = self.0.lock().unwrap();

        let lines = joined_cart(&state, user_id);

        if lines.is_empty() {
            return Err(RepositoryError::EmptyCart);
        }

        for line in &lines {
            if line.stock < line.quantity {
                return Err(RepositoryError::InsufficientStock {
                    product: line.name.clone(),
                    requested: line.quantity,
                    available: line.stock,
                });
            }
        }

        let total: i64 = lines.iter().map(|l| l.subtotal()).sum();

        let order_id = state.next_id();
        let order = Order {
            order_id,
            user_id,
            total,
            status: "pending".into(),
            shipping_address: req.shipping_address.clone(),
            payment_method: req.payment_method.clone(),
            created_at: Some(Utc::now().naive_utc()),
            updated_at: Some(Utc::now().naive_utc()),
        };

        let mut items = Vec::with_capacity(lines.len());
        for line in &lines {
            let order_item_id = state.next_id();
            items.push(OrderItemDetail {
                order_item_id,
                order_id,
                product_id: line.product_id,
                product_name: line.name.clone(),
                quantity: line.quantity,
                price: line.price,
            });
            state.products.get_mut(&line.product_id).unwrap().stock -= line.quantity;
        }

        state.orders.push(order.clone());
        state.order_items.extend(items.clone());
        state.cart.retain(|c| c.user_id != user_id);

        Ok(OrderWithItems { order, items })
    }
}
