use chrono::{DateTime, Utc};
use log::debug;

use crate::api::DeviceApi;
use crate::error::AppError;
use crate::models::device_state::DeviceState;
use crate::models::effect::Effect;

/// Last successfully polled device state.
///
/// Accessors only read the cached snapshot. A failed refresh keeps the
/// previous snapshot in place.
#[derive(Debug, Clone)]
pub struct StateCache {
    state: DeviceState,
    refreshed_at: DateTime<Utc>,
}

impl StateCache {
    pub fn new(state: DeviceState) -> Self {
        Self {
            state,
            refreshed_at: Utc::now(),
        }
    }

    /// Query the device once and replace the snapshot wholesale.
    pub async fn refresh<D: DeviceApi + ?Sized>(
        &mut self,
        device: &D,
    ) -> Result<&DeviceState, AppError> {
        let state = device.get_state().await.map_err(AppError::unreachable)?;
        debug!(
            "Refreshed state from {}: mode={} value={}",
            device.base_url(),
            state.mode,
            state.value
        );
        self.state = state;
        self.refreshed_at = Utc::now();
        Ok(&self.state)
    }

    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    pub fn refreshed_at(&self) -> DateTime<Utc> {
        self.refreshed_at
    }

    pub fn is_on(&self) -> bool {
        self.state.is_on()
    }

    pub fn brightness(&self) -> i64 {
        self.state.value
    }

    pub fn current_effect(&self) -> Option<Effect> {
        self.state.effect()
    }
}
