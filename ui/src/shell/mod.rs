use aura_core::{DisplayConfig, Series};
use gpui::{App, Bounds, SharedString, WindowBounds, WindowOptions, prelude::*, px, size};
use tracing::{error, info};

use crate::assets::application_with_assets;

mod nav_bar;
mod view;

pub use view::AuraShell;

#[derive(Clone, Debug)]
pub struct ShellOptions {
    pub initial_path: SharedString,
    pub activity: Series,
    pub chart_config: DisplayConfig,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            initial_path: "/feed".into(),
            activity: Series::default(),
            chart_config: DisplayConfig::default(),
        }
    }
}

pub fn launch_shell(options: ShellOptions) {
    info!(path = %options.initial_path, "launching shell");
    application_with_assets().run(move |cx: &mut App| {
        let bounds = Bounds::centered(None, size(px(1100.), px(720.)), cx);
        let opened = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                focus: true,
                ..Default::default()
            },
            move |window, cx| cx.new(|cx| AuraShell::new(options, window, cx)),
        );
        if let Err(err) = opened {
            error!(%err, "failed to open shell window");
            cx.quit();
            return;
        }
        cx.activate(true);
    });
}
