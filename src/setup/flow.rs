use std::collections::BTreeMap;

use log::error;
use serde::Serialize;

use super::store::{ConfigEntry, EntryStore};
use super::validate::validate_device;
use crate::api::device_client::HttpDeviceClient;
use crate::api::DeviceApi;
use crate::error::AppError;

pub const STEP_USER: &str = "user";
pub const FIELD_URL: &str = "url";

const ERROR_BASE: &str = "base";
const ERROR_CANNOT_CONNECT: &str = "cannot_connect";
const ERROR_UNKNOWN: &str = "unknown";
const ABORT_ALREADY_CONFIGURED: &str = "already_configured";

/// The single form field the user fills in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInput {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FlowResult {
    ShowForm {
        step_id: &'static str,
        fields: Vec<&'static str>,
        errors: BTreeMap<String, String>,
    },
    CreateEntry {
        entry: ConfigEntry,
    },
    Abort {
        reason: &'static str,
    },
}

impl FlowResult {
    fn form(errors: BTreeMap<String, String>) -> Self {
        FlowResult::ShowForm {
            step_id: STEP_USER,
            fields: vec![FIELD_URL],
            errors,
        }
    }

    fn form_error(code: &str) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(ERROR_BASE.to_string(), code.to_string());
        Self::form(errors)
    }
}

/// Adds a device: ask for its URL, validate, persist the entry.
///
/// Nothing is written to the store until validation has passed.
pub struct ConfigFlow {
    store: EntryStore,
}

impl ConfigFlow {
    pub fn new(store: EntryStore) -> Self {
        Self { store }
    }

    pub async fn step_user(&self, input: Option<UserInput>) -> FlowResult {
        let Some(input) = input else {
            return FlowResult::form(BTreeMap::new());
        };
        let device =
            HttpDeviceClient::new(&input.url).map_err(|e| AppError::CannotConnect(e.to_string()));
        self.submit(device).await
    }

    pub async fn submit<D: DeviceApi>(&self, device: Result<D, AppError>) -> FlowResult {
        let result = match device {
            Ok(device) => self.create_entry(&device).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(entry) => FlowResult::CreateEntry { entry },
            Err(AppError::CannotConnect(_)) => FlowResult::form_error(ERROR_CANNOT_CONNECT),
            Err(AppError::AlreadyConfigured(_)) => FlowResult::Abort {
                reason: ABORT_ALREADY_CONFIGURED,
            },
            Err(e) => {
                error!("Unexpected exception during setup: {:?}", e);
                FlowResult::form_error(ERROR_UNKNOWN)
            }
        }
    }

    async fn create_entry<D: DeviceApi>(&self, device: &D) -> Result<ConfigEntry, AppError> {
        let validated = validate_device(device).await?;
        self.store
            .add(ConfigEntry::new(validated.title, device.base_url()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeDevice;
    use crate::setup::store::temp_store;

    #[tokio::test]
    async fn test_no_input_shows_empty_form() {
        let (_dir, store) = temp_store();
        let flow = ConfigFlow::new(store);
        match flow.step_user(None).await {
            FlowResult::ShowForm {
                step_id,
                fields,
                errors,
            } => {
                assert_eq!(step_id, "user");
                assert_eq!(fields, vec!["url"]);
                assert!(errors.is_empty());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_valid_device_creates_entry() {
        let (_dir, store) = temp_store();
        let flow = ConfigFlow::new(store);
        let result = flow.submit(Ok(FakeDevice::new("porch"))).await;
        match result {
            FlowResult::CreateEntry { entry } => {
                assert_eq!(entry.title, "porch");
                assert_eq!(entry.data.url, "http://fake.local");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(flow.store.list().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_device_shows_cannot_connect() {
        let (_dir, store) = temp_store();
        let flow = ConfigFlow::new(store);
        let result = flow.submit(Ok(FakeDevice::unreachable())).await;
        assert_eq!(result, FlowResult::form_error("cannot_connect"));
        assert!(flow.store.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bad_url_shows_cannot_connect() {
        let (_dir, store) = temp_store();
        let flow = ConfigFlow::new(store);
        let result = flow
            .step_user(Some(UserInput {
                url: "::not-a-url::".into(),
            }))
            .await;
        assert_eq!(result, FlowResult::form_error("cannot_connect"));
        assert!(flow.store.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_same_device_twice_aborts() {
        let (_dir, store) = temp_store();
        let flow = ConfigFlow::new(store);
        flow.submit(Ok(FakeDevice::new("porch"))).await;
        let result = flow.submit(Ok(FakeDevice::new("porch"))).await;
        assert_eq!(
            result,
            FlowResult::Abort {
                reason: "already_configured"
            }
        );
    }

    #[tokio::test]
    async fn test_unexpected_failure_is_unknown() {
        let (_dir, store) = temp_store();
        let flow = ConfigFlow::new(store);
        let result = flow
            .submit::<FakeDevice>(Err(AppError::Unknown("boom".into())))
            .await;
        assert_eq!(result, FlowResult::form_error("unknown"));
    }
}
