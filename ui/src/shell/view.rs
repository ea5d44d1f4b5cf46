use aura_core::{DisplayConfig, Series, TitleResolver, resolve_title};
use gpui::{
    AnyElement, Context, Entity, Render, SharedString, Subscription, Window, div, prelude::*, rgb,
};

use super::ShellOptions;
use super::nav_bar::nav_bar;
use crate::components::{DisabledModuleView, bar_series};
use crate::navigator::{Navigator, PathChanged};
use crate::title::WindowTitle;

/// Application shell: navigation bar, route body, and the window title.
pub struct AuraShell {
    navigator: Entity<Navigator>,
    titles: TitleResolver,
    activity: Series,
    chart_config: DisplayConfig,
    disabled_module: Entity<DisabledModuleView>,
    title_writes: usize,
    _subscriptions: Vec<Subscription>,
}

impl AuraShell {
    pub fn new(options: ShellOptions, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let navigator = cx.new(|_| Navigator::new(options.initial_path));
        let disabled_module = cx.new(|_| DisabledModuleView);

        let on_path_changed = cx.subscribe_in(
            &navigator,
            window,
            |this: &mut Self, _, event: &PathChanged, window, cx| {
                this.apply_title(&event.path, window);
                cx.notify();
            },
        );

        let initial_path = navigator.read(cx).current().to_string();
        let mut shell = Self {
            navigator,
            titles: TitleResolver::new(),
            activity: options.activity,
            chart_config: options.chart_config,
            disabled_module,
            title_writes: 0,
            _subscriptions: vec![on_path_changed],
        };
        // Initial mount counts as a path change.
        shell.apply_title(&initial_path, window);
        shell
    }

    fn apply_title(&mut self, path: &str, window: &mut Window) {
        if self.titles.observe(path, WindowTitle(window)).is_some() {
            self.title_writes += 1;
        }
    }

    pub fn navigator(&self) -> &Entity<Navigator> {
        &self.navigator
    }

    pub(super) fn navigate(&mut self, path: &'static str, cx: &mut Context<Self>) {
        self.navigator.update(cx, |nav, cx| {
            nav.navigate(path, cx);
        });
    }

    pub(super) fn go_back(&mut self, cx: &mut Context<Self>) {
        self.navigator.update(cx, |nav, cx| {
            nav.back(cx);
        });
    }

    fn route_body(&self, path: &str) -> AnyElement {
        match path {
            "/ads" | "/ads/analytics" => self.disabled_module.clone().into_any_element(),
            "/data-aura" => div()
                .flex()
                .justify_center()
                .p_8()
                .child(bar_series(&self.activity, &self.chart_config))
                .into_any_element(),
            _ => placeholder(path).into_any_element(),
        }
    }
}

fn placeholder(path: &str) -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .items_center()
        .justify_center()
        .gap_2()
        .p_8()
        .w_full()
        .h_full()
        .child(div().text_lg().child(resolve_title(path)))
        .child(
            div()
                .text_sm()
                .text_color(rgb(0x9ca3af))
                .child(SharedString::from(path.to_string())),
        )
}

impl Render for AuraShell {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (current, can_go_back) = {
            let nav = self.navigator.read(cx);
            (nav.current().to_string(), nav.can_go_back())
        };

        div()
            .flex()
            .flex_col()
            .w_full()
            .h_full()
            .bg(rgb(0x0b1220))
            .text_color(gpui::white())
            .child(nav_bar(&current, can_go_back, cx))
            .child(div().flex_1().child(self.route_body(&current)))
    }
}
