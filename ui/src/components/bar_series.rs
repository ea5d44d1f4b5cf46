use aura_core::{Bar, DisplayConfig, Gradient, Series};
use gpui::{
    Div, SharedString, div, linear_color_stop, linear_gradient, prelude::*, px, relative, rgb,
};

const BAR_AREA_HEIGHT: f32 = 120.;

/// Activity chart: one gradient bar per sample, scaled to the largest sample.
pub fn bar_series(series: &Series, config: &DisplayConfig) -> Div {
    let gradient = config.gradient;
    let columns = series
        .bars()
        .into_iter()
        .map(move |bar| bar_column(bar, gradient));

    div()
        .flex()
        .flex_col()
        .gap_3()
        .p_4()
        .w(px(360.))
        .rounded_md()
        .bg(rgb(0x111827))
        .border_1()
        .border_color(rgb(0x1f2937))
        .child(
            div()
                .flex()
                .flex_col()
                .gap_1()
                .child(
                    div()
                        .text_sm()
                        .text_color(gpui::white())
                        .child(SharedString::from(config.label.clone())),
                )
                .child(
                    div()
                        .text_xs()
                        .text_color(rgb(0x9ca3af))
                        .child(SharedString::from(config.sublabel.clone())),
                ),
        )
        .child(
            div()
                .h(px(BAR_AREA_HEIGHT))
                .flex()
                .items_end()
                .gap_1()
                .children(columns),
        )
}

// gpui gradients take two stops, so the bar is split into an upper
// (mid -> end) and lower (start -> mid) half.
fn bar_column(bar: Bar, gradient: Gradient) -> Div {
    let fill = div()
        .w_full()
        .h(relative(f32::from(bar.height_pct) / 100.))
        .flex()
        .flex_col()
        .rounded_sm()
        .overflow_hidden()
        .child(
            div().w_full().flex_1().bg(linear_gradient(
                0.,
                linear_color_stop(rgb(gradient.mid.0), 0.),
                linear_color_stop(rgb(gradient.end.0), 1.),
            )),
        )
        .child(
            div().w_full().flex_1().bg(linear_gradient(
                0.,
                linear_color_stop(rgb(gradient.start.0), 0.),
                linear_color_stop(rgb(gradient.mid.0), 1.),
            )),
        );

    div()
        .flex_1()
        .h_full()
        .flex()
        .flex_col()
        .justify_end()
        .child(fill)
}
