mod bar_series;
pub mod button_effect;
mod disabled_module;

pub use bar_series::bar_series;
pub use disabled_module::{DISABLED_DETAIL, DISABLED_HEADING, DisabledModuleView};
