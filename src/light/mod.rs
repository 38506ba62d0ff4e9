pub mod entity;
pub mod state_cache;
pub mod translator;

pub use entity::OhmLight;
