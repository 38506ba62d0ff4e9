use log::debug;

use crate::api::device_client::HttpDeviceClient;
use crate::api::DeviceApi;
use crate::error::AppError;

/// What a successful validation yields for the new entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEntry {
    pub title: String,
}

/// Check that the device at `url` answers its info endpoint.
///
/// A single attempt; every failure, including a missing name, is
/// reported as `CannotConnect`.
pub async fn validate_input(url: &str) -> Result<ValidatedEntry, AppError> {
    let client =
        HttpDeviceClient::new(url).map_err(|e| AppError::CannotConnect(e.to_string()))?;
    validate_device(&client).await
}

pub async fn validate_device<D: DeviceApi + ?Sized>(
    device: &D,
) -> Result<ValidatedEntry, AppError> {
    let info = device
        .get_info()
        .await
        .map_err(|e| AppError::CannotConnect(e.to_string()))?;
    debug!("Validated device '{}' at {}", info.name, device.base_url());
    Ok(ValidatedEntry { title: info.name })
}
