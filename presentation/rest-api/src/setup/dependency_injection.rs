use std::sync::Arc;

use logger::TracingLogger;
use payments::checkout_gateway::HttpCheckoutGateway;
use payments::client::PaymentsClient;
use persistence::cart_slot::file_storage::FileCartStorage;
use persistence::catalog::static_repository::StaticCatalogRepository;
use persistence::stock::repository::StockRepositoryPostgres;

use business::application::cart::add::AddToCartUseCaseImpl;
use business::application::cart::store::CartStore;
use business::application::catalog::get_all::GetProductsUseCaseImpl;
use business::application::catalog::get_by_slug::GetProductBySlugUseCaseImpl;
use business::application::checkout::orchestrator::CheckoutOrchestrator;
use business::application::stock::get_sheet::GetStockSheetUseCaseImpl;
use business::application::stock::save_levels::SaveStockLevelsUseCaseImpl;
use business::domain::catalog::repository::CatalogRepository;
use business::domain::checkout::shipping::{FlatShippingRate, ShippingRateProvider};
use business::domain::logger::Logger;

use crate::api::cart::routes::CartApi;
use crate::api::catalog::routes::CatalogApi;
use crate::api::checkout::routes::CheckoutApi;
use crate::api::health::routes::HealthApi;
use crate::api::stock::routes::StockApi;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub catalog_api: CatalogApi,
    pub cart_api: CartApi,
    pub checkout_api: CheckoutApi,
    pub stock_api: StockApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool, config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let catalog_repository: Arc<dyn CatalogRepository> = match &config.storage.catalog_path {
            Some(path) => Arc::new(StaticCatalogRepository::from_path(path)?),
            None => Arc::new(StaticCatalogRepository::builtin()?),
        };
        let stock_repository = Arc::new(StockRepositoryPostgres::new(pool));
        let cart_storage = Arc::new(FileCartStorage::new(&config.storage.cart_storage_path));
        let checkout_gateway = Arc::new(HttpCheckoutGateway::new(PaymentsClient::new(
            config.checkout.endpoint_url.clone(),
            config.checkout.api_key.clone(),
            config.checkout.timeout,
        )));
        let shipping: Arc<dyn ShippingRateProvider> =
            Arc::new(FlatShippingRate::new(config.checkout.shipping_fee));

        // Cart state, shared by the cart and checkout APIs
        let cart_store = Arc::new(CartStore::load(cart_storage, logger.clone()));

        // Catalog use cases
        let get_products_use_case = Arc::new(GetProductsUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_by_slug_use_case = Arc::new(GetProductBySlugUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let add_to_cart_use_case = Arc::new(AddToCartUseCaseImpl {
            catalog: catalog_repository.clone(),
            cart: cart_store.clone(),
            logger: logger.clone(),
        });

        // Checkout
        let orchestrator = Arc::new(CheckoutOrchestrator::new(
            cart_store.clone(),
            checkout_gateway,
            shipping.clone(),
            config.checkout.origin.clone(),
            logger.clone(),
        ));

        // Stock use cases
        let get_stock_sheet_use_case = Arc::new(GetStockSheetUseCaseImpl {
            catalog: catalog_repository.clone(),
            repository: stock_repository.clone(),
            logger: logger.clone(),
        });
        let save_stock_levels_use_case = Arc::new(SaveStockLevelsUseCaseImpl {
            catalog: catalog_repository,
            repository: stock_repository,
            logger,
        });

        Ok(Self {
            health_api,
            catalog_api: CatalogApi::new(get_products_use_case, get_product_by_slug_use_case),
            cart_api: CartApi::new(cart_store, add_to_cart_use_case, shipping),
            checkout_api: CheckoutApi::new(orchestrator),
            stock_api: StockApi::new(get_stock_sheet_use_case, save_stock_levels_use_case),
        })
    }
}
