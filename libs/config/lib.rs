mod config;
mod load_config;

pub use config::{Config, DisplayConfig};
pub use load_config::{load, load_or_default};
