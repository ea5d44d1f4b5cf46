use aura_core::TitleSink;
use gpui::Window;

/// Routes resolved titles to the native window title.
pub struct WindowTitle<'a>(pub &'a mut Window);

impl TitleSink for WindowTitle<'_> {
    fn set_title(&mut self, title: &str) {
        self.0.set_window_title(title);
    }
}
