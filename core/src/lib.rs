mod config;
mod error;
mod series;
mod title;
mod types;

pub use config::RawDisplayConfig;
pub use error::ConfigError;
pub use series::{FALLBACK_LEN, Series};
pub use title::{
    BASE_TITLE, MESSAGES_TITLE, PROFILE_TITLE, ROUTE_TITLES, TitleResolver, TitleSink,
    resolve_title,
};
pub use types::{Bar, DisplayConfig, Gradient, Rgb};
