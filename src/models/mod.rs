pub mod command;
pub mod device_info;
pub mod device_state;
pub mod effect;
pub mod hsv;
pub mod intent;
