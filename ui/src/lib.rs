mod assets;
pub mod components;
mod logging;
mod navigator;
mod shell;
mod title;

pub use assets::application_with_assets;
pub use logging::init_logging;
pub use navigator::{Navigator, PathChanged};
pub use shell::{AuraShell, ShellOptions, launch_shell};
pub use title::WindowTitle;
