use gpui::{Context, EventEmitter, SharedString};
use tracing::info;

/// Emitted whenever the current path changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathChanged {
    pub path: SharedString,
}

/// Current navigation path plus a back stack.
pub struct Navigator {
    current: SharedString,
    history: Vec<SharedString>,
}

impl EventEmitter<PathChanged> for Navigator {}

impl Navigator {
    pub fn new(initial: impl Into<SharedString>) -> Self {
        Self {
            current: initial.into(),
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Returns `false` without emitting when `path` is already current.
    pub fn navigate(&mut self, path: impl Into<SharedString>, cx: &mut Context<Self>) -> bool {
        let path = path.into();
        if path == self.current {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, path.clone());
        info!(from = %previous, to = %path, "navigate");
        self.history.push(previous);
        cx.emit(PathChanged { path });
        cx.notify();
        true
    }

    pub fn back(&mut self, cx: &mut Context<Self>) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        info!(from = %self.current, to = %previous, "navigate back");
        self.current = previous.clone();
        cx.emit(PathChanged { path: previous });
        cx.notify();
        true
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use gpui::{Entity, TestAppContext, prelude::*};

    use super::*;

    fn record_events(
        cx: &mut TestAppContext,
        navigator: &Entity<Navigator>,
    ) -> Rc<RefCell<Vec<SharedString>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        cx.update(|cx| {
            cx.subscribe(navigator, move |_, event: &PathChanged, _| {
                sink.borrow_mut().push(event.path.clone());
            })
            .detach();
        });
        events
    }

    #[gpui::test]
    fn navigate_emits_only_on_change(cx: &mut TestAppContext) {
        let navigator = cx.new(|_| Navigator::new("/feed"));
        let events = record_events(cx, &navigator);

        let changed = navigator.update(cx, |nav, cx| nav.navigate("/feed", cx));
        assert!(!changed);
        let changed = navigator.update(cx, |nav, cx| nav.navigate("/chat/99", cx));
        assert!(changed);
        cx.run_until_parked();

        assert_eq!(*events.borrow(), vec![SharedString::from("/chat/99")]);
        navigator.read_with(cx, |nav, _| {
            assert_eq!(nav.current(), "/chat/99");
            assert!(nav.can_go_back());
        });
    }

    #[gpui::test]
    fn back_restores_previous_path(cx: &mut TestAppContext) {
        let navigator = cx.new(|_| Navigator::new("/feed"));
        let events = record_events(cx, &navigator);

        navigator.update(cx, |nav, cx| {
            nav.navigate("/settings", cx);
            nav.navigate("/profile/42", cx);
        });
        assert!(navigator.update(cx, |nav, cx| nav.back(cx)));
        assert!(navigator.update(cx, |nav, cx| nav.back(cx)));
        assert!(!navigator.update(cx, |nav, cx| nav.back(cx)));
        cx.run_until_parked();

        let expected: Vec<SharedString> = ["/settings", "/profile/42", "/settings", "/feed"]
            .into_iter()
            .map(SharedString::from)
            .collect();
        assert_eq!(*events.borrow(), expected);
        navigator.read_with(cx, |nav, _| assert_eq!(nav.current(), "/feed"));
    }
}
