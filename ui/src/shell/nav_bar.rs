use gpui::{Div, MouseButton, MouseDownEvent, SharedString, div, prelude::*, px, rgb, svg};

use crate::assets::ARROW_LEFT_ICON;
use crate::components::button_effect;

use super::AuraShell;

/// Tabs shown in the navigation bar: every mapped route plus paths that only
/// match by prefix or not at all.
pub(super) const NAV_ROUTES: &[(&str, &str)] = &[
    ("Feed", "/feed"),
    ("Profile", "/profile"),
    ("Profile #42", "/profile/42"),
    ("Messages", "/messages"),
    ("Chat", "/chat"),
    ("Chat #99", "/chat/99"),
    ("Notifications", "/notifications"),
    ("Acquaintances", "/acquaintances"),
    ("Data Aura", "/data-aura"),
    ("Ads", "/ads"),
    ("Ad Manager", "/ads/analytics"),
    ("Settings", "/settings"),
    ("Login", "/login"),
    ("Terms", "/terms"),
    ("Privacy", "/privacy"),
    ("Unknown", "/unknown"),
];

const BAR_BG: u32 = 0x111827;
const ACTIVE_BG: u32 = 0x1f2937;

pub(super) fn nav_bar(current: &str, can_go_back: bool, cx: &mut gpui::Context<AuraShell>) -> Div {
    let go_back = cx.listener(|this: &mut AuraShell, _: &MouseDownEvent, _, cx| {
        this.go_back(cx);
    });

    let back = button_effect::apply(
        div()
            .id("nav-back")
            .w(px(28.))
            .h(px(28.))
            .flex()
            .items_center()
            .justify_center()
            .rounded_full()
            .bg(rgb(BAR_BG))
            .opacity(if can_go_back { 1.0 } else { 0.4 })
            .on_mouse_down(MouseButton::Left, go_back)
            .debug_selector(|| "nav-back".to_string()),
        BAR_BG,
    )
    .child(
        svg()
            .path(ARROW_LEFT_ICON)
            .w(px(18.))
            .h(px(18.))
            .text_color(rgb(0xe5e7eb)),
    );

    let mut tabs = div().flex().flex_wrap().gap_1();
    for (label, path) in NAV_ROUTES.iter().copied() {
        let is_active = path == current;
        let base_bg = if is_active { ACTIVE_BG } else { BAR_BG };
        let handler = cx.listener(move |this: &mut AuraShell, _: &MouseDownEvent, _, cx| {
            this.navigate(path, cx);
        });

        let tab = div()
            .id(SharedString::from(format!("nav-{path}")))
            .px_3()
            .py_1()
            .rounded_md()
            .bg(rgb(base_bg))
            .text_sm()
            .text_color(if is_active {
                gpui::white()
            } else {
                rgb(0x9ca3af).into()
            })
            .on_mouse_down(MouseButton::Left, handler)
            .debug_selector(move || format!("nav-{path}"))
            .child(label);
        tabs = tabs.child(button_effect::apply(tab, base_bg));
    }

    div()
        .flex()
        .items_center()
        .gap_3()
        .p_3()
        .bg(rgb(BAR_BG))
        .border_b_1()
        .border_color(rgb(0x1f2937))
        .child(back)
        .child(tabs)
}
