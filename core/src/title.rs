use tracing::debug;

pub const BASE_TITLE: &str = "Aura · Connect & Radiate";
pub const PROFILE_TITLE: &str = "Profile · Aura";
pub const MESSAGES_TITLE: &str = "Messages · Aura";

const PROFILE_PREFIX: &str = "/profile/";
const CHAT_PREFIX: &str = "/chat/";

/// Exact route paths and their window titles.
pub const ROUTE_TITLES: &[(&str, &str)] = &[
    ("/feed", "Feed · Aura"),
    ("/ads", "Ads · Aura"),
    ("/login", "Login · Aura"),
    ("/profile", PROFILE_TITLE),
    ("/settings", "Settings · Aura"),
    ("/messages", MESSAGES_TITLE),
    ("/chat", MESSAGES_TITLE),
    ("/notifications", "Notifications · Aura"),
    ("/acquaintances", "Acquaintances · Aura"),
    ("/data-aura", "Data Aura · Aura"),
    ("/ads/analytics", "Ad Manager · Aura"),
    ("/terms", "Terms · Aura"),
    ("/privacy", "Privacy · Aura"),
];

/// Map a navigation path to its title. Every path resolves.
pub fn resolve_title(path: &str) -> &'static str {
    if let Some((_, title)) = ROUTE_TITLES.iter().find(|(route, _)| *route == path) {
        return *title;
    }
    if path.starts_with(PROFILE_PREFIX) {
        PROFILE_TITLE
    } else if path.starts_with(CHAT_PREFIX) {
        MESSAGES_TITLE
    } else {
        BASE_TITLE
    }
}

/// Write target for the active title.
pub trait TitleSink {
    fn set_title(&mut self, title: &str);
}

impl<S: TitleSink + ?Sized> TitleSink for &mut S {
    fn set_title(&mut self, title: &str) {
        (**self).set_title(title);
    }
}

/// Applies the resolved title once per distinct path.
#[derive(Debug, Default)]
pub struct TitleResolver {
    last_path: Option<String>,
}

impl TitleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_path(&self) -> Option<&str> {
        self.last_path.as_deref()
    }

    /// Returns the title written to `sink`, or `None` when `path` is unchanged.
    pub fn observe(&mut self, path: &str, mut sink: impl TitleSink) -> Option<&'static str> {
        if self.last_path.as_deref() == Some(path) {
            return None;
        }

        let title = resolve_title(path);
        debug!(path, title, "applying window title");
        sink.set_title(title);
        self.last_path = Some(path.to_string());
        Some(title)
    }
}
