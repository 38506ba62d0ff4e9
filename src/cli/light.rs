use std::time::Duration;

use clap::Args;
use serde_json::json;
use tabled::Tabled;

use crate::api::device_client::HttpDeviceClient;
use crate::api::DeviceApi;
use crate::cli::output::{print_json, print_table};
use crate::config::{OutputMode, RuntimeConfig};
use crate::error::AppError;
use crate::light::OhmLight;
use crate::models::command::DeviceCommand;
use crate::models::hsv::Hsv;
use crate::models::intent::LightIntent;
use crate::resolve;
use crate::setup::store::EntryStore;

fn parse_hue(s: &str) -> Result<f64, String> {
    parse_ranged(s, 360.0)
}

fn parse_saturation(s: &str) -> Result<f64, String> {
    parse_ranged(s, 100.0)
}

fn parse_ranged(s: &str, max: f64) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if !(0.0..=max).contains(&value) {
        return Err(format!("{} is not in 0..={}", value, max));
    }
    Ok(value)
}

#[derive(Args)]
pub struct OnArgs {
    /// Device title, entry ID or URL
    pub device: Option<String>,

    /// Hue in degrees (0-360)
    #[arg(long, value_parser = parse_hue, requires = "saturation")]
    pub hue: Option<f64>,

    /// Saturation in percent (0-100)
    #[arg(long, value_parser = parse_saturation, requires = "hue")]
    pub saturation: Option<f64>,

    /// Brightness (0-255, 0 turns the light off)
    #[arg(long)]
    pub brightness: Option<u8>,

    /// Effect name (colorloop, rainbow, pulse, random)
    #[arg(long)]
    pub effect: Option<String>,
}

impl OnArgs {
    pub fn intent(&self) -> LightIntent {
        LightIntent {
            hs_color: self.hue.zip(self.saturation),
            brightness: self.brightness,
            effect: self.effect.clone(),
        }
    }
}

#[derive(Args)]
pub struct WatchArgs {
    /// Device title, entry ID or URL
    pub device: Option<String>,

    /// Seconds between polls
    #[arg(long, default_value_t = 30)]
    pub interval: u64,

    /// Stop after this many polls
    #[arg(long)]
    pub count: Option<u64>,
}

#[derive(Tabled)]
struct StateRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "POWER")]
    power: String,
    #[tabled(rename = "BRIGHTNESS")]
    brightness: i64,
    #[tabled(rename = "EFFECT")]
    effect: String,
    #[tabled(rename = "AVAILABLE")]
    available: String,
}

fn print_state<D: DeviceApi>(light: &OhmLight<D>, config: &RuntimeConfig) {
    if config.output_mode == OutputMode::Table {
        print_table(&[StateRow {
            name: light.name().to_string(),
            power: if light.is_on() { "on" } else { "off" }.to_string(),
            brightness: light.brightness(),
            effect: light
                .effect()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "-".into()),
            available: if light.available() { "yes" } else { "no" }.to_string(),
        }]);
    } else {
        print_json(&light.to_json());
    }
}

#[derive(Debug, PartialEq, Eq, Tabled)]
struct SentRow {
    #[tabled(rename = "DEVICE")]
    device: String,
    #[tabled(rename = "COMMAND")]
    command: String,
    #[tabled(rename = "HSV")]
    hsv: String,
}

fn format_hsv(hsv: &Hsv) -> String {
    [hsv.hue, hsv.saturation, hsv.value]
        .iter()
        .map(|c| c.map_or_else(|| "-".to_string(), |v| v.to_string()))
        .collect::<Vec<_>>()
        .join(",")
}

fn sent_row(device: &str, command: &DeviceCommand) -> SentRow {
    SentRow {
        device: device.to_string(),
        command: command.name().to_string(),
        hsv: command.hsv().map_or_else(|| "-".to_string(), |hsv| format_hsv(&hsv)),
    }
}

fn print_sent(device: &str, command: &DeviceCommand, config: &RuntimeConfig) {
    if config.output_mode == OutputMode::Table {
        print_table(&[sent_row(device, command)]);
    } else {
        print_json(&json!({"device": device, "sent": command}));
    }
}

fn check_watch_args(args: &WatchArgs) -> Result<(), AppError> {
    if args.interval == 0 {
        return Err(AppError::InvalidInput("--interval must be at least 1".into()));
    }
    if args.count == Some(0) {
        return Err(AppError::InvalidInput("--count must be at least 1".into()));
    }
    Ok(())
}

pub async fn handle_info(device: Option<&str>, _config: &RuntimeConfig) -> Result<(), AppError> {
    let store = EntryStore::open_default()?;
    let url = resolve::resolve_url(&store, device)?;
    let client = HttpDeviceClient::new(&url)?;
    let info = client.get_info().await.map_err(AppError::unreachable)?;
    print_json(&json!({"url": client.base_url(), "info": info}));
    Ok(())
}

pub async fn handle_state(device: Option<&str>, config: &RuntimeConfig) -> Result<(), AppError> {
    let store = EntryStore::open_default()?;
    let light = resolve::resolve_light(&store, device).await?;
    print_state(&light, config);
    Ok(())
}

pub async fn handle_on(args: &OnArgs, config: &RuntimeConfig) -> Result<(), AppError> {
    let store = EntryStore::open_default()?;
    let mut light = resolve::resolve_light(&store, args.device.as_deref()).await?;
    let command = light.turn_on(&args.intent()).await?;
    print_sent(light.name(), &command, config);
    Ok(())
}

pub async fn handle_off(device: Option<&str>, config: &RuntimeConfig) -> Result<(), AppError> {
    let store = EntryStore::open_default()?;
    let mut light = resolve::resolve_light(&store, device).await?;
    let command = light.turn_off().await?;
    print_sent(light.name(), &command, config);
    Ok(())
}

pub async fn handle_watch(args: &WatchArgs, config: &RuntimeConfig) -> Result<(), AppError> {
    check_watch_args(args)?;
    let store = EntryStore::open_default()?;
    let mut light = resolve::resolve_light(&store, args.device.as_deref()).await?;

    let mut ticker = tokio::time::interval(Duration::from_secs(args.interval));
    // First tick fires immediately and the light was just set up.
    ticker.tick().await;
    print_state(&light, config);

    let mut polls = 1;
    while args.count.map_or(true, |count| polls < count) {
        ticker.tick().await;
        light.update().await;
        print_state(&light, config);
        polls += 1;
    }
    Ok(())
}
