use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};

use business::application::cart::store::CartStore;
use business::domain::cart::model::LineKey;
use business::domain::cart::use_cases::add::{AddToCartParams, AddToCartUseCase};
use business::domain::checkout::shipping::ShippingRateProvider;

use crate::api::cart::dto::{AddCartItemRequest, CartResponse, UpdateCartItemRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    cart: Arc<CartStore>,
    add_use_case: Arc<dyn AddToCartUseCase>,
    shipping: Arc<dyn ShippingRateProvider>,
}

impl CartApi {
    pub fn new(
        cart: Arc<CartStore>,
        add_use_case: Arc<dyn AddToCartUseCase>,
        shipping: Arc<dyn ShippingRateProvider>,
    ) -> Self {
        Self {
            cart,
            add_use_case,
            shipping,
        }
    }

    fn current(&self) -> CartResponse {
        let cart = self.cart.snapshot();
        CartResponse::from_cart(&cart, self.shipping.shipping_fee(&cart))
    }
}

/// Shopper cart API
///
/// Every mutation is persisted before the response is sent. A line is
/// addressed by its product id plus an optional `variant` slug; unknown lines
/// are ignored rather than reported.
#[OpenApi]
impl CartApi {
    /// Get the cart
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get(&self) -> Json<CartResponse> {
        Json(self.current())
    }

    /// Add a product to the cart
    ///
    /// Adding a product and variant already in the cart increases that line's
    /// quantity instead of creating a new line.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add(&self, body: Json<AddCartItemRequest>) -> AddCartItemResponse {
        let params = AddToCartParams {
            product_id: body.0.product_id,
            variant_slug: body.0.variant_slug,
            quantity: body.0.quantity,
        };

        match self.add_use_case.execute(params).await {
            Ok(_) => AddCartItemResponse::Created(Json(self.current())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddCartItemResponse::NotFound(json),
                    _ => AddCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Set a line's quantity
    ///
    /// A quantity of zero or less removes the line.
    #[oai(path = "/cart/items/:product_id", method = "put", tag = "ApiTags::Cart")]
    async fn update(
        &self,
        product_id: Path<String>,
        variant: Query<Option<String>>,
        body: Json<UpdateCartItemRequest>,
    ) -> Json<CartResponse> {
        let key = LineKey::new(product_id.0, variant.0.as_deref());
        self.cart.set_quantity(&key, body.0.quantity);
        Json(self.current())
    }

    /// Remove a line
    #[oai(path = "/cart/items/:product_id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove(&self, product_id: Path<String>, variant: Query<Option<String>>) -> Json<CartResponse> {
        let key = LineKey::new(product_id.0, variant.0.as_deref());
        self.cart.remove_from_cart(&key);
        Json(self.current())
    }

    /// Empty the cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear(&self) -> Json<CartResponse> {
        self.cart.clear_cart();
        Json(self.current())
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddCartItemResponse {
    #[oai(status = 201)]
    Created(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
