use log::{info, warn};
use rand::Rng;
use serde::Serialize;
use serde_json::json;

use super::state_cache::StateCache;
use super::translator::{translate, translate_off};
use crate::api::DeviceApi;
use crate::error::AppError;
use crate::models::command::DeviceCommand;
use crate::models::device_info::DeviceInfo;
use crate::models::effect::Effect;
use crate::models::intent::LightIntent;

pub const DOMAIN: &str = "ohm_made";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LightFeature {
    Brightness,
    Color,
    Effect,
}

pub const SUPPORTED_FEATURES: [LightFeature; 3] = [
    LightFeature::Brightness,
    LightFeature::Color,
    LightFeature::Effect,
];

/// Send `command` to the device as exactly one call.
pub async fn dispatch<D: DeviceApi + ?Sized>(
    device: &D,
    command: DeviceCommand,
) -> Result<(), AppError> {
    match command {
        DeviceCommand::On(hsv) => device.on(hsv).await,
        DeviceCommand::Off => device.off().await,
        DeviceCommand::Colorloop(hsv) => device.colorloop(hsv).await,
        DeviceCommand::Rainbow(hsv) => device.rainbow(hsv).await,
        DeviceCommand::Pulse(hsv) => device.pulse(hsv).await,
    }
}

/// An LED stripe as seen by the rest of the application.
pub struct OhmLight<D: DeviceApi> {
    device: D,
    info: DeviceInfo,
    cache: StateCache,
    available: bool,
}

impl<D: DeviceApi> OhmLight<D> {
    pub fn new(device: D, info: DeviceInfo, cache: StateCache) -> Self {
        Self {
            device,
            info,
            cache,
            available: true,
        }
    }

    /// Fetch info and initial state once, then build the light.
    pub async fn setup(device: D) -> Result<Self, AppError> {
        let info = device.get_info().await.map_err(AppError::unreachable)?;
        let state = device.get_state().await.map_err(AppError::unreachable)?;
        Ok(Self::new(device, info, StateCache::new(state)))
    }

    pub fn unique_id(&self) -> &str {
        self.info.name_or_default()
    }

    pub fn device_id(&self) -> &str {
        self.unique_id()
    }

    pub fn name(&self) -> &str {
        self.unique_id()
    }

    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    pub fn cache(&self) -> &StateCache {
        &self.cache
    }

    pub fn is_on(&self) -> bool {
        self.cache.is_on()
    }

    pub fn brightness(&self) -> i64 {
        self.cache.brightness()
    }

    pub fn effect(&self) -> Option<Effect> {
        self.cache.current_effect()
    }

    pub fn effect_list(&self) -> &'static [Effect] {
        &Effect::ALL
    }

    pub fn supported_features(&self) -> &'static [LightFeature] {
        &SUPPORTED_FEATURES
    }

    pub fn available(&self) -> bool {
        self.available
    }

    pub fn device_registry_info(&self) -> serde_json::Value {
        json!({
            "identifiers": [[DOMAIN, self.device_id()]],
            "name": self.name(),
            "num_led": self.info.num_led,
            "host": self.device.base_url(),
        })
    }

    pub async fn turn_on(&mut self, intent: &LightIntent) -> Result<DeviceCommand, AppError> {
        let command = translate(intent, &mut rand::thread_rng());
        self.send(command).await
    }

    pub async fn turn_on_with_rng<R: Rng + ?Sized>(
        &mut self,
        intent: &LightIntent,
        rng: &mut R,
    ) -> Result<DeviceCommand, AppError> {
        let command = translate(intent, rng);
        self.send(command).await
    }

    pub async fn turn_off(&mut self) -> Result<DeviceCommand, AppError> {
        self.send(translate_off()).await
    }

    async fn send(&mut self, command: DeviceCommand) -> Result<DeviceCommand, AppError> {
        info!("{}: sending {}", self.unique_id(), command.name());
        dispatch(&self.device, command)
            .await
            .map_err(AppError::unreachable)?;
        Ok(command)
    }

    /// Poll the device. An unreachable device keeps its last snapshot and
    /// is marked unavailable until a poll succeeds.
    pub async fn update(&mut self) {
        match self.cache.refresh(&self.device).await.map(|_| ()) {
            Ok(()) => self.available = true,
            Err(e) => {
                warn!("{}: keeping last known state: {}", self.unique_id(), e);
                self.available = false;
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "unique_id": self.unique_id(),
            "available": self.available(),
            "is_on": self.is_on(),
            "brightness": self.brightness(),
            "effect": self.effect(),
            "effect_list": self.effect_list(),
            "supported_features": self.supported_features(),
            "mode": self.cache.state().mode,
            "refreshed_at": self.cache.refreshed_at(),
            "device_info": self.device_registry_info(),
        })
    }
}
