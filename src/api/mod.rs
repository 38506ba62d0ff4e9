pub mod device_client;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::device_info::DeviceInfo;
use crate::models::device_state::DeviceState;
use crate::models::hsv::Hsv;

/// Calls an LED stripe understands.
///
/// Every call is a single request/response round trip; no retries.
#[async_trait]
pub trait DeviceApi: Send + Sync {
    async fn get_info(&self) -> Result<DeviceInfo, AppError>;
    async fn get_state(&self) -> Result<DeviceState, AppError>;

    async fn on(&self, hsv: Hsv) -> Result<(), AppError>;
    async fn off(&self) -> Result<(), AppError>;

    async fn colorloop(&self, hsv: Hsv) -> Result<(), AppError>;
    async fn rainbow(&self, hsv: Hsv) -> Result<(), AppError>;
    async fn pulse(&self, hsv: Hsv) -> Result<(), AppError>;

    /// Base URL of the device, for display.
    fn base_url(&self) -> &str;
}
