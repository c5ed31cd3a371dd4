//! Route handlers.
//!
//! Every handler runs inside a span named after the operation with the calling user, checks
//! the caller's role, validates the request, then calls the service. Completion is logged
//! with `duration_ms`; failures are logged at error level before being turned into a response.

use super::AppState;
use crate::auth::{Claims, Operation};
use crate::dotnet_rest_actor::DotnetRestError;
use crate::model::{
    CreateDotnetRestResponse, DeleteDotnetRestResponse, DotnetRestDto, GetDotnetRestResponse,
    GetDotnetRestsRequest, GetDotnetRestsResponse, UpdateDotnetRestResponse,
};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header::LOCATION, HeaderMap, StatusCode},
    response::IntoResponse,
    Extension, Json,
};
use serde_json::json;
use std::future::Future;
use std::time::Instant;
use tracing::{debug, error, field, info, info_span, Instrument, Span};

pub const RESOURCE_PATH: &str = "/api/DotnetRestService";

/// The caller for log purposes: the token subject, else `X-User-Id`, else `User-Id`.
pub fn user_id(claims: Option<&Claims>, headers: &HeaderMap) -> Option<String> {
    claims
        .map(|c| c.sub.clone())
        .filter(|sub| !sub.is_empty())
        .or_else(|| header_value(headers, "x-user-id"))
        .or_else(|| header_value(headers, "user-id"))
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn request_span(operation: Operation, claims: &Claims, headers: &HeaderMap) -> Span {
    let user = user_id(Some(claims), headers).unwrap_or_else(|| "anonymous".to_string());
    info_span!(
        "rest",
        method = operation.name(),
        user = %user,
        id = field::Empty,
        page = field::Empty,
        size = field::Empty,
    )
}

async fn timed<T, F>(operation: Operation, span: Span, work: F) -> Result<T, DotnetRestError>
where
    F: Future<Output = Result<T, DotnetRestError>>,
{
    async move {
        let started = Instant::now();
        let result = work.await;
        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => info!(duration_ms, "{} completed", operation.name()),
            Err(e) => error!(duration_ms, error = %e, "{} failed", operation.name()),
        }
        result
    }
    .instrument(span)
    .await
}

fn bad_body(rejection: JsonRejection) -> DotnetRestError {
    DotnetRestError::Validation(rejection.body_text())
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

pub async fn create_dotnet_rest(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    headers: HeaderMap,
    body: Result<Json<DotnetRestDto>, JsonRejection>,
) -> Result<impl IntoResponse, DotnetRestError> {
    let operation = Operation::Create;
    let span = request_span(operation, &claims, &headers);

    let response = timed(operation, span, async {
        state.auth.authorize(&claims, operation)?;
        let Json(request) = body.map_err(bad_body)?;
        debug!(name = %request.name, "CreateDotnetRest started");
        state.validation.validate_create(&request)?;
        state.service.create_dotnet_rest(request).await
    })
    .await?;

    let location = format!(
        "{RESOURCE_PATH}/{}",
        response.dotnet_rest.id.as_deref().unwrap_or_default()
    );
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(response)))
}

pub async fn get_dotnet_rests(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    headers: HeaderMap,
    query: Result<Query<GetDotnetRestsRequest>, QueryRejection>,
) -> Result<Json<GetDotnetRestsResponse>, DotnetRestError> {
    let operation = Operation::List;
    let span = request_span(operation, &claims, &headers);

    let response = timed(operation, span, async {
        state.auth.authorize(&claims, operation)?;
        let Query(request) =
            query.map_err(|rejection| DotnetRestError::Validation(rejection.body_text()))?;
        Span::current()
            .record("page", request.start_page)
            .record("size", request.page_size);
        debug!(
            start_page = request.start_page,
            page_size = request.page_size,
            "GetDotnetRests started"
        );
        state.validation.validate_pagination(&request)?;
        let response = state.service.get_dotnet_rests(request).await?;
        info!(
            returned = response.dotnet_rests.len(),
            total = response.total_elements,
            "GetDotnetRests page served"
        );
        Ok::<_, DotnetRestError>(response)
    })
    .await?;

    Ok(Json(response))
}

pub async fn get_dotnet_rest(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<GetDotnetRestResponse>, DotnetRestError> {
    let operation = Operation::Get;
    let span = request_span(operation, &claims, &headers);

    timed(operation, span, async {
        state.auth.authorize(&claims, operation)?;
        Span::current().record("id", id.as_str());
        debug!("GetDotnetRest started");
        state.validation.validate_id(&id, "id")?;
        state.service.get_dotnet_rest(&id).await
    })
    .await
    .map(Json)
}

pub async fn update_dotnet_rest(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    headers: HeaderMap,
    Path(id): Path<String>,
    body: Result<Json<DotnetRestDto>, JsonRejection>,
) -> Result<Json<UpdateDotnetRestResponse>, DotnetRestError> {
    let operation = Operation::Update;
    let span = request_span(operation, &claims, &headers);

    timed(operation, span, async {
        state.auth.authorize(&claims, operation)?;
        let Json(mut request) = body.map_err(bad_body)?;
        // The route id wins over whatever the body carries.
        request.id = Some(id.clone());
        Span::current().record("id", id.as_str());
        debug!("UpdateDotnetRest started");
        state.validation.validate_id(&id, "id")?;
        state.validation.validate_update(&request)?;
        state.service.update_dotnet_rest(request).await
    })
    .await
    .map(Json)
}

pub async fn delete_dotnet_rest(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<DeleteDotnetRestResponse>, DotnetRestError> {
    let operation = Operation::Delete;
    let span = request_span(operation, &claims, &headers);

    timed(operation, span, async {
        state.auth.authorize(&claims, operation)?;
        Span::current().record("id", id.as_str());
        debug!("DeleteDotnetRest started");
        state.validation.validate_id(&id, "id")?;
        let response = state.service.delete_dotnet_rest(&id).await?;
        info!(deleted = response.deleted, "DeleteDotnetRest done");
        Ok::<_, DotnetRestError>(response)
    })
    .await
    .map(Json)
}
