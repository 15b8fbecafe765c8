use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::dto::opening_dto::{
    CreateOpeningPayload, ErrorResponse, OpeningListResponse, OpeningResponse,
    UpdateOpeningPayload,
};
use crate::models::opening::Opening;
use crate::routes::openings;

#[derive(OpenApi)]
#[openapi(
    paths(
        openings::create_opening,
        openings::show_opening,
        openings::list_openings,
        openings::update_opening,
        openings::delete_opening
    ),
    components(schemas(
        Opening,
        CreateOpeningPayload,
        UpdateOpeningPayload,
        OpeningResponse,
        OpeningListResponse,
        ErrorResponse
    )),
    tags((name = "Openings", description = "Job opening management"))
)]
pub struct ApiDoc;

#[axum::debug_handler]
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
