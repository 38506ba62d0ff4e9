use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::DeviceApi;
use crate::error::AppError;
use crate::models::command::DeviceCommand;
use crate::models::device_info::DeviceInfo;
use crate::models::device_state::DeviceState;
use crate::models::hsv::Hsv;

/// In-memory device that records every dispatched command.
pub struct FakeDevice {
    info: Option<DeviceInfo>,
    states: Mutex<VecDeque<Result<DeviceState, String>>>,
    fail_commands: bool,
    pub calls: Mutex<Vec<DeviceCommand>>,
    pub state_queries: Mutex<usize>,
}

impl FakeDevice {
    pub fn new(name: &str) -> Self {
        Self {
            info: Some(DeviceInfo {
                name: name.to_string(),
                num_led: 60,
                extra: Default::default(),
            }),
            states: Mutex::new(VecDeque::new()),
            fail_commands: false,
            calls: Mutex::new(Vec::new()),
            state_queries: Mutex::new(0),
        }
    }

    pub fn unreachable() -> Self {
        let mut device = Self::new("");
        device.info = None;
        device.fail_commands = true;
        device
    }

    pub fn failing_commands(mut self) -> Self {
        self.fail_commands = true;
        self
    }

    pub fn with_state(self, mode: &str, value: i64) -> Self {
        self.push_state(mode, value);
        self
    }

    pub fn push_state(&self, mode: &str, value: i64) {
        self.states.lock().unwrap().push_back(Ok(DeviceState {
            mode: mode.to_string(),
            value,
        }));
    }

    pub fn push_state_error(&self) {
        self.states
            .lock()
            .unwrap()
            .push_back(Err("connection refused".into()));
    }

    pub fn calls(&self) -> Vec<DeviceCommand> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, command: DeviceCommand) -> Result<(), AppError> {
        if self.fail_commands {
            return Err(AppError::Api {
                message: "connection refused".into(),
                status: None,
            });
        }
        self.calls.lock().unwrap().push(command);
        Ok(())
    }
}

#[async_trait]
impl DeviceApi for FakeDevice {
    async fn get_info(&self) -> Result<DeviceInfo, AppError> {
        self.info.clone().ok_or_else(|| AppError::Api {
            message: "connection refused".into(),
            status: None,
        })
    }

    async fn get_state(&self) -> Result<DeviceState, AppError> {
        *self.state_queries.lock().unwrap() += 1;
        match self.states.lock().unwrap().pop_front() {
            Some(Ok(state)) => Ok(state),
            Some(Err(message)) => Err(AppError::Api {
                message,
                status: None,
            }),
            None => Err(AppError::Api {
                message: "no state queued".into(),
                status: None,
            }),
        }
    }

    async fn on(&self, hsv: Hsv) -> Result<(), AppError> {
        self.record(DeviceCommand::On(hsv))
    }

    async fn off(&self) -> Result<(), AppError> {
        self.record(DeviceCommand::Off)
    }

    async fn colorloop(&self, hsv: Hsv) -> Result<(), AppError> {
        self.record(DeviceCommand::Colorloop(hsv))
    }

    async fn rainbow(&self, hsv: Hsv) -> Result<(), AppError> {
        self.record(DeviceCommand::Rainbow(hsv))
    }

    async fn pulse(&self, hsv: Hsv) -> Result<(), AppError> {
        self.record(DeviceCommand::Pulse(hsv))
    }

    fn base_url(&self) -> &str {
        "http://fake.local"
    }
}
