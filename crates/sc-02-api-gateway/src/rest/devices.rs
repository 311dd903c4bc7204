//! Device handlers.

use super::{parse_body, run_blocking};
use crate::adapters::{lookup_error, service_error};
use crate::domain::error::ApiResult;
use crate::domain::types::{
    CreateDeviceBody, DataEnvelope, DeviceResponse, SignDataBody, SignatureResponse,
};
use crate::router::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sc_01_device_signing::CreateDeviceRequest;
use std::sync::Arc;

/// `POST /api/v0/devices`
pub async fn create_device(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<DataEnvelope<DeviceResponse>>)> {
    let CreateDeviceBody {
        id,
        label,
        algorithm,
    } = parse_body(&body)?;

    let api = Arc::clone(&state.api);
    let device = run_blocking(move || {
        api.create_device(CreateDeviceRequest::new(id, label, algorithm))
            .map_err(|e| service_error(e, "Failed to create device"))
    })
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataEnvelope::new(DeviceResponse::from(&device))),
    ))
}

/// `GET /api/v0/devices`
pub async fn list_devices(
    State(state): State<AppState>,
) -> ApiResult<Json<DataEnvelope<Vec<DeviceResponse>>>> {
    let devices = state
        .api
        .list_devices()
        .map_err(|e| service_error(e, "Failed to get all devices"))?;

    Ok(Json(DataEnvelope::new(
        devices.iter().map(DeviceResponse::from).collect(),
    )))
}

/// `GET /api/v0/devices/:id`
pub async fn get_device(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DataEnvelope<DeviceResponse>>> {
    let device = state
        .api
        .get_device(&id)
        .map_err(|e| lookup_error(e, "Failed to get device"))?;

    Ok(Json(DataEnvelope::new(DeviceResponse::from(&device))))
}

/// `POST /api/v0/devices/:id/sign`
///
/// An unknown device is reported as 500, like every other signing failure.
pub async fn sign_data(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<DataEnvelope<SignatureResponse>>> {
    let SignDataBody { data } = parse_body(&body)?;

    let api = Arc::clone(&state.api);
    let record = run_blocking(move || {
        api.sign_data(&id, &data)
            .map_err(|e| service_error(e, "Failed to sign data"))
    })
    .await?;

    Ok(Json(DataEnvelope::new(SignatureResponse::from(record))))
}
