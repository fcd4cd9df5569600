use serde_json::{Map, Value};

use crate::error::{Error, Result};

pub const STATUS_OK: &str = "ok";
const GENERIC_REJECTION: &str = "failed to get LibreNMS device list via API";

/// Envelope returned by `GET /api/v0/devices/`
#[derive(Debug, Default)]
pub struct ApiResponse {
    pub count: Option<u64>,
    pub devices: Vec<Map<String, Value>>,
}

impl ApiResponse {
    /// Parse a response body.
    ///
    /// Only `status` is checked before anything else is looked at. `count` is
    /// read leniently, `devices` must be a list of objects on success.
    pub fn parse(body: &str) -> Result<ApiResponse> {
        let json: Map<String, Value> = serde_json::from_str(body)?;

        if json.get("status").and_then(Value::as_str) != Some(STATUS_OK) {
            let message = json
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(GENERIC_REJECTION);
            return Err(Error::ApiRejection(message.to_string()));
        }

        let count = match json.get("count") {
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        };

        let devices = match json.get("devices") {
            None | Some(Value::Null) => Vec::new(),
            Some(list) => serde_json::from_value(list.clone())?,
        };

        Ok(ApiResponse { count, devices })
    }

    /// Reported device count, or the list length when the server omits it
    pub fn device_count(&self) -> u64 {
        self.count.unwrap_or(self.devices.len() as u64)
    }
}
