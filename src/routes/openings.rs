use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::opening_dto::{
        CreateOpeningPayload, ErrorResponse, OpeningIdQuery, OpeningListResponse,
        OpeningResponse, UpdateOpeningPayload, TAG_CREATE_OPENING, TAG_DELETED_OPENING,
        TAG_OPENINGS_FOUND, TAG_OPENING_FOUND, TAG_UPDATE_OPENING,
    },
    error::Result,
    AppState,
};

type JsonBody<T> = std::result::Result<Json<T>, JsonRejection>;
type IdQuery = std::result::Result<Query<OpeningIdQuery>, QueryRejection>;

#[utoipa::path(
    post,
    path = "/api/v1/openings",
    tag = "Openings",
    request_body = CreateOpeningPayload,
    responses(
        (status = 201, description = "Opening created", body = OpeningResponse),
        (status = 400, description = "Invalid body or missing field", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn create_opening(
    State(state): State<AppState>,
    payload: JsonBody<CreateOpeningPayload>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    let opening = state.opening_service.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(OpeningResponse::new(TAG_CREATE_OPENING, opening)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/openings/opening",
    tag = "Openings",
    params(OpeningIdQuery),
    responses(
        (status = 200, description = "Opening found", body = OpeningResponse),
        (status = 400, description = "Missing id", body = ErrorResponse),
        (status = 404, description = "Opening not found", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn show_opening(
    State(state): State<AppState>,
    query: IdQuery,
) -> Result<impl IntoResponse> {
    let Query(query) = query?;
    let id = query.require_id()?;
    let opening = state.opening_service.get_by_id(id).await?;
    Ok(Json(OpeningResponse::new(TAG_OPENING_FOUND, opening)))
}

#[utoipa::path(
    get,
    path = "/api/v1/openings",
    tag = "Openings",
    responses(
        (status = 200, description = "All openings, possibly none", body = OpeningListResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_openings(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let openings = state.opening_service.list().await?;
    Ok(Json(OpeningListResponse::new(TAG_OPENINGS_FOUND, openings)))
}

#[utoipa::path(
    put,
    path = "/api/v1/openings",
    tag = "Openings",
    params(OpeningIdQuery),
    request_body = UpdateOpeningPayload,
    responses(
        (status = 200, description = "Opening updated", body = OpeningResponse),
        (status = 400, description = "Missing id, invalid body or no field supplied", body = ErrorResponse),
        (status = 404, description = "Opening not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn update_opening(
    State(state): State<AppState>,
    query: IdQuery,
    payload: JsonBody<UpdateOpeningPayload>,
) -> Result<impl IntoResponse> {
    let Query(query) = query?;
    let id = query.require_id()?;
    let Json(payload) = payload?;
    let opening = state.opening_service.update(id, payload).await?;
    Ok(Json(OpeningResponse::new(TAG_UPDATE_OPENING, opening)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/openings",
    tag = "Openings",
    params(OpeningIdQuery),
    responses(
        (status = 200, description = "Opening deleted", body = OpeningResponse),
        (status = 400, description = "Missing id", body = ErrorResponse),
        (status = 404, description = "Opening not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn delete_opening(
    State(state): State<AppState>,
    query: IdQuery,
) -> Result<impl IntoResponse> {
    let Query(query) = query?;
    let id = query.require_id()?;
    let opening = state.opening_service.delete(id).await?;
    Ok(Json(OpeningResponse::new(TAG_DELETED_OPENING, opening)))
}
