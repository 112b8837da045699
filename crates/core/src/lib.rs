#![forbid(unsafe_code)]

pub mod config;
pub mod generator;
pub mod model;
pub mod ruler;
pub mod time;

pub use config::{ConfigError, GameConfig};
pub use time::Clock;
