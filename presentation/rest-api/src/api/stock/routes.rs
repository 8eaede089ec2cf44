use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::stock::use_cases::get_sheet::GetStockSheetUseCase;
use business::domain::stock::use_cases::save_levels::{
    SaveStockLevelsParams, SaveStockLevelsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::stock::dto::{SaveStockRequest, SaveStockResponse, StockSheetResponse};
use crate::api::tags::ApiTags;

pub struct StockApi {
    get_sheet_use_case: Arc<dyn GetStockSheetUseCase>,
    save_levels_use_case: Arc<dyn SaveStockLevelsUseCase>,
}

impl StockApi {
    pub fn new(
        get_sheet_use_case: Arc<dyn GetStockSheetUseCase>,
        save_levels_use_case: Arc<dyn SaveStockLevelsUseCase>,
    ) -> Self {
        Self {
            get_sheet_use_case,
            save_levels_use_case,
        }
    }
}

/// Admin stock API
#[OpenApi]
impl StockApi {
    /// Get stock levels
    ///
    /// Lists every catalog product with its stored level. When the stock
    /// store is unreachable, levels default to zero and `banner` is set.
    #[oai(path = "/admin/stock", method = "get", tag = "ApiTags::Stock")]
    async fn get_sheet(&self) -> GetStockSheetResponse {
        match self.get_sheet_use_case.execute().await {
            Ok(sheet) => GetStockSheetResponse::Ok(Json(sheet.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetStockSheetResponse::InternalError(json)
            }
        }
    }

    /// Save stock levels
    ///
    /// Quantities below zero are stored as zero; unknown product ids are
    /// skipped.
    #[oai(path = "/admin/stock", method = "put", tag = "ApiTags::Stock")]
    async fn save(&self, body: Json<SaveStockRequest>) -> SaveStockLevelsResponse {
        let params = SaveStockLevelsParams {
            levels: body.0.levels.into_iter().map(Into::into).collect(),
        };

        match self.save_levels_use_case.execute(params).await {
            Ok(saved) => SaveStockLevelsResponse::Ok(Json(SaveStockResponse {
                saved: saved as u64,
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => SaveStockLevelsResponse::ServiceUnavailable(json),
                    _ => SaveStockLevelsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetStockSheetResponse {
    #[oai(status = 200)]
    Ok(Json<StockSheetResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SaveStockLevelsResponse {
    #[oai(status = 200)]
    Ok(Json<SaveStockResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
