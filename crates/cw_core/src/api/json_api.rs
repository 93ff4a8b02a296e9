//! JSON entry points for hosts that only speak strings (UI shells, bindings).
//!
//! Errors are returned as `"<CODE>: <message>"` using [`error_codes`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::error_codes;
use crate::layout::{build, Layout};
use crate::surface::{Surface, Zone};
use crate::validator::validate;
use crate::SCHEMA_VERSION;

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

#[derive(Debug, Deserialize)]
pub struct LayoutRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub surface: Surface,
    /// Raw text returned by the text generator
    pub payload: String,
}

#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub schema_version: u8,
    pub fingerprint: String,
    pub layout: Layout,
}

#[derive(Debug, Serialize)]
struct ZoneTableResponse {
    schema_version: u8,
    surface: Surface,
    default_zone: &'static Zone,
    zones: &'static [Zone],
}

/// Validate a generated payload and lay it out.
pub fn layout_from_payload_json(request_json: &str) -> Result<String, String> {
    let request: LayoutRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::INVALID_REQUEST, format!("Invalid JSON request: {e}")))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(err_code(
            error_codes::INVALID_REQUEST,
            format!("Unsupported schema version: {}", request.schema_version),
        ));
    }

    let events = validate(&request.payload).map_err(|e| err_code(e.code(), e))?;
    let layout = build(&events, request.surface);
    debug!(events = events.len(), "layout_from_payload_json complete");

    let fingerprint = layout.fingerprint().map_err(|e| {
        err_code(error_codes::INVALID_REQUEST, format!("Failed to fingerprint layout: {e}"))
    })?;
    let response = LayoutResponse { schema_version: SCHEMA_VERSION, fingerprint, layout };
    serde_json::to_string(&response)
        .map_err(|e| err_code(error_codes::INVALID_REQUEST, format!("Failed to serialize response: {e}")))
}

/// Zone table for a surface, including its fallback zone.
pub fn describe_zones_json(surface: Surface) -> Result<String, String> {
    let response = ZoneTableResponse {
        schema_version: SCHEMA_VERSION,
        surface,
        default_zone: surface.default_zone(),
        zones: surface.zones(),
    };
    serde_json::to_string(&response)
        .map_err(|e| err_code(error_codes::INVALID_REQUEST, format!("Failed to serialize response: {e}")))
}
