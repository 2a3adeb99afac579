//! # Automobile Routes
//!
//! Handlers for the `/autos` endpoints. Generic over the store so tests
//! can wire the service directly onto the in-memory implementation.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::auto::Automobile;
use crate::service::{AutosService, SearchFilter};
use crate::store::AutoStore;

use super::errors::ApiError;

/// Optional query-string filters for the listing endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub color: Option<String>,
    pub make: Option<String>,
}

/// Partial-update body: only color and owner may change.
#[derive(Debug, Deserialize)]
pub struct UpdateOwnerRequest {
    pub color: Option<String>,
    pub owner: Option<String>,
}

/// Build the `/autos` router on top of a shared service.
pub fn autos_routes<S: AutoStore + 'static>(service: Arc<AutosService<S>>) -> Router {
    Router::new()
        .route("/autos", get(get_autos).post(add_auto))
        .route(
            "/autos/:vin",
            get(get_auto).patch(update_auto).delete(delete_auto),
        )
        .with_state(service)
}

/// GET /autos — 200 with the collection, 204 when empty or no match.
async fn get_autos<S: AutoStore + 'static>(
    State(service): State<Arc<AutosService<S>>>,
    Query(params): Query<SearchParams>,
) -> Result<Response, ApiError> {
    let filter = SearchFilter::new(params.color, params.make);
    match service.search(&filter)? {
        Some(list) if !list.is_empty() => Ok(Json(list).into_response()),
        _ => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// POST /autos — 200 with the created record, 400 when invalid.
async fn add_auto<S: AutoStore + 'static>(
    State(service): State<Arc<AutosService<S>>>,
    body: Result<Json<Automobile>, JsonRejection>,
) -> Result<Json<Automobile>, ApiError> {
    let Json(auto) = body.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let saved = service.add(auto)?;
    Ok(Json(saved))
}

/// GET /autos/:vin — 200 with the record, 204 when not found.
async fn get_auto<S: AutoStore + 'static>(
    State(service): State<Arc<AutosService<S>>>,
    Path(vin): Path<String>,
) -> Result<Json<Automobile>, ApiError> {
    let auto = service.get_by_vin(&vin)?;
    Ok(Json(auto))
}

/// PATCH /autos/:vin — 200 with the updated record, 204 when not found,
/// 400 when the body is malformed.
async fn update_auto<S: AutoStore + 'static>(
    State(service): State<Arc<AutosService<S>>>,
    Path(vin): Path<String>,
    body: Result<Json<UpdateOwnerRequest>, JsonRejection>,
) -> Result<Json<Automobile>, ApiError> {
    let Json(update) = body.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let updated = service.update(&vin, update.color, update.owner)?;
    Ok(Json(updated))
}

/// DELETE /autos/:vin — 202 when deleted, 204 when not found.
async fn delete_auto<S: AutoStore + 'static>(
    State(service): State<Arc<AutosService<S>>>,
    Path(vin): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.remove(&vin)?;
    Ok(StatusCode::ACCEPTED)
}
