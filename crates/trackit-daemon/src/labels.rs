//! Display-name classification
//!
//! Deterministic host-to-label lookup applied on the way out to the
//! collector. The state machine keys sessions on the normalized host;
//! only the reported origin is relabeled, so classification can change
//! without affecting session identity.

use trackit_core::{EventSink, LifecycleEvent, Origin};

/// Well-known hosts and their display names. Unknown hosts pass through
/// unchanged.
const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("github.com", "GitHub"),
    ("gitlab.com", "GitLab"),
    ("stackoverflow.com", "Stack Overflow"),
    ("youtube.com", "YouTube"),
    ("youtu.be", "YouTube"),
    ("google.com", "Google"),
    ("mail.google.com", "Gmail"),
    ("docs.google.com", "Google Docs"),
    ("drive.google.com", "Google Drive"),
    ("duckduckgo.com", "DuckDuckGo"),
    ("bing.com", "Bing"),
    ("wikipedia.org", "Wikipedia"),
    ("en.wikipedia.org", "Wikipedia"),
    ("reddit.com", "Reddit"),
    ("old.reddit.com", "Reddit"),
    ("twitter.com", "Twitter"),
    ("x.com", "Twitter"),
    ("facebook.com", "Facebook"),
    ("instagram.com", "Instagram"),
    ("linkedin.com", "LinkedIn"),
    ("whatsapp.com", "WhatsApp Web"),
    ("web.whatsapp.com", "WhatsApp Web"),
    ("web.telegram.org", "Telegram Web"),
    ("discord.com", "Discord"),
    ("slack.com", "Slack"),
    ("teams.microsoft.com", "Microsoft Teams"),
    ("zoom.us", "Zoom"),
    ("netflix.com", "Netflix"),
    ("primevideo.com", "Prime Video"),
    ("twitch.tv", "Twitch"),
    ("open.spotify.com", "Spotify"),
    ("amazon.com", "Amazon"),
    ("chat.openai.com", "ChatGPT"),
    ("chatgpt.com", "ChatGPT"),
    ("claude.ai", "Claude"),
    ("news.ycombinator.com", "Hacker News"),
    ("medium.com", "Medium"),
    ("notion.so", "Notion"),
    ("figma.com", "Figma"),
    ("docs.rs", "docs.rs"),
    ("crates.io", "crates.io"),
];

/// Look up the display name for a normalized host.
pub fn display_name(host: &str) -> Option<&'static str> {
    DISPLAY_NAMES
        .iter()
        .find(|(h, _)| *h == host)
        .map(|(_, label)| *label)
}

/// Sink decorator that relabels origins before forwarding.
pub struct LabelingSink<S> {
    inner: S,
}

impl<S> LabelingSink<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: EventSink> EventSink for LabelingSink<S> {
    fn emit(&self, mut event: LifecycleEvent) {
        if let Some(label) = display_name(event.origin.as_str()) {
            event.origin = Origin::new(label);
        }
        self.inner.emit(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use parking_lot::Mutex;
    use trackit_core::EventKind;

    #[test]
    fn test_known_host_labeled() {
        assert_eq!(display_name("github.com"), Some("GitHub"));
        assert_eq!(display_name("news.ycombinator.com"), Some("Hacker News"));
    }

    #[test]
    fn test_unknown_host_passes_through() {
        assert_eq!(display_name("example.com"), None);
    }

    #[test]
    fn test_labeling_sink_relabels_only_known_hosts() {
        #[derive(Default)]
        struct Capture(Mutex<Vec<LifecycleEvent>>);
        impl EventSink for &Capture {
            fn emit(&self, event: LifecycleEvent) {
                self.0.lock().push(event);
            }
        }

        let capture = Capture::default();
        let sink = LabelingSink::new(&capture);

        sink.emit(LifecycleEvent::new(
            EventKind::Started,
            Origin::new("github.com"),
            Utc::now(),
        ));
        sink.emit(LifecycleEvent::new(
            EventKind::Heartbeat,
            Origin::new("example.com"),
            Utc::now(),
        ));

        let events = capture.0.lock();
        assert_eq!(events[0].origin.as_str(), "GitHub");
        assert_eq!(events[1].origin.as_str(), "example.com");
    }
}
