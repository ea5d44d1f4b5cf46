use aura_core::Rgb;
use gpui::{Div, Stateful, prelude::*, rgb};

const WHITE: Rgb = Rgb(0xffffff);
const BLACK: Rgb = Rgb(0x000000);

/// Hover and press feedback for clickable surfaces on `base_bg`.
pub fn apply(button: Stateful<Div>, base_bg: u32) -> Stateful<Div> {
    let (hover_bg, active_bg) = hover_and_active_bg(Rgb(base_bg));
    button
        .cursor_pointer()
        .hover(move |s| s.bg(rgb(hover_bg.0)))
        .active(move |s| s.bg(rgb(active_bg.0)))
        .on_hover(|_, window, _| window.refresh())
}

fn hover_and_active_bg(base: Rgb) -> (Rgb, Rgb) {
    match base.0 {
        0x0b1220 => (Rgb(0x0f172a), Rgb(0x020617)),
        0x111827 => (Rgb(0x1f2937), Rgb(0x0f172a)),
        0x1f2937 => (Rgb(0x374151), Rgb(0x111827)),
        _ => (mix(base, WHITE, 0.18), mix(base, BLACK, 0.18)),
    }
}

/// Move each channel of `color` toward `target` by `amount` in `[0, 1]`.
fn mix(color: Rgb, target: Rgb, amount: f32) -> Rgb {
    let amount = amount.clamp(0.0, 1.0);
    let channel = |shift: u32| {
        let from = ((color.0 >> shift) & 0xff) as f32;
        let to = ((target.0 >> shift) & 0xff) as f32;
        let mixed = (from + (to - from) * amount).round().clamp(0.0, 255.0) as u32;
        mixed << shift
    };
    Rgb(channel(16) | channel(8) | channel(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_surfaces_use_palette_steps() {
        assert_eq!(
            hover_and_active_bg(Rgb(0x111827)),
            (Rgb(0x1f2937), Rgb(0x0f172a))
        );
    }

    #[test]
    fn other_surfaces_tint_and_shade() {
        let (hover, active) = hover_and_active_bg(Rgb(0x808080));
        assert_eq!(hover, Rgb(0x979797));
        assert_eq!(active, Rgb(0x696969));
    }

    #[test]
    fn mix_endpoints() {
        assert_eq!(mix(Rgb(0x123456), WHITE, 0.0), Rgb(0x123456));
        assert_eq!(mix(Rgb(0x123456), WHITE, 1.0), WHITE);
        assert_eq!(mix(Rgb(0x123456), BLACK, 2.0), BLACK);
    }
}
