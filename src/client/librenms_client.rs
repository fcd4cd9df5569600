use std::time::Duration;

use crate::client::response::ApiResponse;
use crate::config::Config;
use crate::device::{ColumnSet, DeviceTable, loader};
use crate::error::Result;

pub const DEVICES_PATH: &str = "/api/v0/devices/";
pub const AUTH_HEADER: &str = "X-Auth-Token";

/*
* Blocking client for the LibreNMS HTTP API
*/
pub struct LibreNMSClient {
    client: reqwest::blocking::Client,
    url: String,
    token: String,
}
impl LibreNMSClient {
    pub fn new(
        url: &str,
        token: &str,
        timeout: Duration,
        tls_insecure: bool,
    ) -> Result<LibreNMSClient> {
        let mut client_builder = reqwest::blocking::Client::builder().timeout(timeout);
        // Disable SSL verification if asked
        if tls_insecure {
            log::warn!("TLS certificate verification disabled for {url}");
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        Ok(LibreNMSClient {
            client: client_builder.build()?,
            url: url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }
    pub fn from_config(config: &Config) -> Result<LibreNMSClient> {
        LibreNMSClient::new(
            config.url(),
            config.token(),
            config.timeout(),
            config.tls_insecure(),
        )
    }
    pub fn devices_url(&self) -> String {
        self.url.to_string() + DEVICES_PATH
    }
    /// Do an authenticated GET request, failing on non-2xx statuses
    fn do_get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        log::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .header(AUTH_HEADER, &self.token)
            .send()?
            .error_for_status()?;
        Ok(response)
    }
    /// Fetch the raw device list. Exactly one request is made.
    pub fn get_devices(&self) -> Result<ApiResponse> {
        let body = self.do_get(&self.devices_url())?.text()?;
        let response = ApiResponse::parse(&body)?;

        log::info!("Success - LibreNMS devices count: {}", response.device_count());
        Ok(response)
    }
    /// Fetch, sort and project the device list
    pub fn fetch_devices(&self, column_set: ColumnSet) -> Result<DeviceTable> {
        let response = self.get_devices()?;
        loader::load_all_from(&response.devices, column_set)
    }
}

/// Fetch the device table described by `config`
pub fn fetch_devices(config: &Config) -> Result<DeviceTable> {
    LibreNMSClient::from_config(config)?.fetch_devices(config.columns())
}
