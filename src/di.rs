use crate::{
    abstract_trait::{
        DynAuthService, DynCartService, DynHashing, DynJwtService, DynOrderCommandService,
        DynOrderQueryService, DynProductCommandService, DynProductQueryService,
    },
    config::ConnectionPool,
    repository::{
        CartRepository, OrderCommandRepository, OrderQueryRepository, ProductCommandRepository,
        ProductQueryRepository, UserRepository,
    },
    service::{
        AuthService, AuthServiceDeps, CartService, OrderCommandService, OrderQueryService,
        ProductCommandService, ProductQueryService,
    },
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub cart_service: DynCartService,
    pub order_query: DynOrderQueryService,
    pub order_command: DynOrderCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"<AuthService>")
            .field("product_query", &"<ProductQueryService>")
            .field("product_command", &"<ProductCommandService>")
            .field("cart_service", &"<CartService>")
            .field("order_query", &"<OrderQueryService>")
            .field("order_command", &"<OrderCommandService>")
            .finish()
    }
}

pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub hash: DynHashing,
    pub jwt_config: DynJwtService,
    pub base_url: String,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            pool,
            hash,
            jwt_config,
            base_url,
        } = deps;

        let user_repository = Arc::new(UserRepository::new(pool.clone()));
        let product_query_repository = Arc::new(ProductQueryRepository::new(pool.clone()));
        let product_command_repository = Arc::new(ProductCommandRepository::new(pool.clone()));
        let cart_repository = Arc::new(CartRepository::new(pool.clone()));
        let order_query_repository = Arc::new(OrderQueryRepository::new(pool.clone()));
        let order_command_repository = Arc::new(OrderCommandRepository::new(pool));

        let auth_service = Arc::new(AuthService::new(AuthServiceDeps {
            user: user_repository,
            hash,
            jwt: jwt_config,
        })) as DynAuthService;

        let product_query = Arc::new(ProductQueryService::new(
            product_query_repository.clone(),
            base_url,
        )) as DynProductQueryService;

        let product_command = Arc::new(ProductCommandService::new(product_command_repository))
            as DynProductCommandService;

        let cart_service = Arc::new(CartService::new(cart_repository, product_query_repository))
            as DynCartService;

        let order_query =
            Arc::new(OrderQueryService::new(order_query_repository)) as DynOrderQueryService;

        let order_command = Arc::new(OrderCommandService::new(order_command_repository))
            as DynOrderCommandService;

        Self {
            auth_service,
            product_query,
            product_command,
            cart_service,
            order_query,
            order_command,
        }
    }
}
