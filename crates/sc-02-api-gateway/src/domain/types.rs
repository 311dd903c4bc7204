//! Wire types for the REST API.
//!
//! Request bodies are deserialized strictly: every field is required.
//! Each request field also accepts its capitalized name (`"ID"`, `"Data"`, ...)
//! as sent by existing clients.
//! Response types never carry key material.

use sc_01_device_signing::{Device, SignatureRecord};
use serde::{Deserialize, Serialize};

/// Success envelope: `{"data": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// `POST /api/v0/devices` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDeviceBody {
    #[serde(alias = "ID")]
    pub id: String,
    #[serde(alias = "Label")]
    pub label: String,
    #[serde(alias = "Algorithm")]
    pub algorithm: String,
}

/// `POST /api/v0/devices/{id}/sign` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignDataBody {
    #[serde(alias = "Data")]
    pub data: String,
}

/// Public view of a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceResponse {
    pub id: String,
    pub label: String,
    pub algorithm: String,
    pub signature_counter: u64,
}

impl From<&Device> for DeviceResponse {
    fn from(device: &Device) -> Self {
        Self {
            id: device.id.clone(),
            label: device.label.clone(),
            algorithm: device.algorithm.to_string(),
            signature_counter: device.signature_counter,
        }
    }
}

/// Result of a signing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureResponse {
    pub signature: String,
    pub signed_data: String,
}

impl From<SignatureRecord> for SignatureResponse {
    fn from(record: SignatureRecord) -> Self {
        Self {
            signature: record.signature,
            signed_data: record.signed_data,
        }
    }
}

/// Health check body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn pass() -> Self {
        Self {
            status: "pass".into(),
            version: crate::API_VERSION.into(),
        }
    }
}
