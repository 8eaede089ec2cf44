use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};

use business::domain::catalog::use_cases::get_all::{GetProductsParams, GetProductsUseCase};
use business::domain::catalog::use_cases::get_by_slug::{
    GetProductBySlugParams, GetProductBySlugUseCase,
};

use crate::api::catalog::dto::ProductResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    get_all_use_case: Arc<dyn GetProductsUseCase>,
    get_by_slug_use_case: Arc<dyn GetProductBySlugUseCase>,
}

impl CatalogApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetProductsUseCase>,
        get_by_slug_use_case: Arc<dyn GetProductBySlugUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_slug_use_case,
        }
    }
}

/// Product catalog API
#[OpenApi]
impl CatalogApi {
    /// List products
    ///
    /// Returns the whole catalog, or only featured products when
    /// `featured=true`.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Catalog")]
    async fn get_all(&self, featured: Query<Option<bool>>) -> GetProductsResponse {
        let params = GetProductsParams {
            featured_only: featured.0.unwrap_or(false),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(products) => {
                GetProductsResponse::Ok(Json(products.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by slug
    #[oai(path = "/products/:slug", method = "get", tag = "ApiTags::Catalog")]
    async fn get_by_slug(&self, slug: Path<String>) -> GetProductResponse {
        match self
            .get_by_slug_use_case
            .execute(GetProductBySlugParams { slug: slug.0 })
            .await
        {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductResponse::NotFound(json),
                    _ => GetProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
