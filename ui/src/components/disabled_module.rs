use gpui::{Render, Window, div, prelude::*, px, rgb, svg};

use crate::assets::POWER_OFF_ICON;

pub const DISABLED_HEADING: &str = "Module Disabled";
pub const DISABLED_DETAIL: &str = "This feature has been decommissioned and is no longer available.";

/// Placeholder shown in place of a decommissioned module.
#[derive(Default)]
pub struct DisabledModuleView;

impl Render for DisabledModuleView {
    fn render(&mut self, _window: &mut Window, _cx: &mut gpui::Context<Self>) -> impl IntoElement {
        div()
            .debug_selector(|| "disabled-module".to_string())
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_4()
            .p_8()
            .w_full()
            .h_full()
            .text_center()
            .text_color(gpui::white())
            .child(
                div()
                    .w(px(64.))
                    .h(px(64.))
                    .flex()
                    .items_center()
                    .justify_center()
                    .rounded_full()
                    .bg(rgb(0x1f2937))
                    .child(
                        svg()
                            .path(POWER_OFF_ICON)
                            .w(px(32.))
                            .h(px(32.))
                            .text_color(rgb(0x9ca3af)),
                    ),
            )
            .child(div().text_xl().child(DISABLED_HEADING))
            .child(
                div()
                    .max_w(px(420.))
                    .text_sm()
                    .text_color(rgb(0x9ca3af))
                    .child(DISABLED_DETAIL),
            )
    }
}
