//! Channel markup capabilities: escaping, link rendering, and the dual
//! escaped/raw text representation used by the formatters.
//!
//! The integration does not know which chat channel it is writing for;
//! it is handed a `ChannelMarkup` implementation and builds all
//! human-visible text through it.

/// Rendering capabilities of the target chat channel.
pub trait ChannelMarkup: Send + Sync {
    /// Escapes raw text so it is safe for the channel's primary
    /// notification field.
    fn escape(&self, raw: &str) -> String;

    /// Renders a URL as channel link markup, optionally labeled.
    fn link(&self, url: &str, label: Option<&str>) -> String;
}

/// Slack mrkdwn: `<url>` / `<url|label>` links, entity escaping for the
/// three characters Slack reserves.
pub struct SlackMarkup;

impl ChannelMarkup for SlackMarkup {
    fn escape(&self, raw: &str) -> String {
        raw.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    fn link(&self, url: &str, label: Option<&str>) -> String {
        match label {
            Some(label) => format!("<{}|{}>", url, label),
            None => format!("<{}>", url),
        }
    }
}

/// One piece of display text in both forms the output contract needs:
/// escaped for the primary notification field, raw for the rich
/// attachment. Both come from a single evaluation of the producing
/// closure, so they can only differ in escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedText {
    sanitized: String,
    raw: String,
}

impl SanitizedText {
    /// Evaluates `produce` once and keeps the raw text alongside its
    /// escaped form.
    pub fn build<F>(markup: &dyn ChannelMarkup, produce: F) -> Self
    where
        F: FnOnce() -> String,
    {
        let raw = produce();
        Self {
            sanitized: markup.escape(&raw),
            raw,
        }
    }

    /// The escaped form, safe for the primary notification channel.
    pub fn sanitized(&self) -> &str {
        &self.sanitized
    }

    /// The raw form, for use inside rich attachments.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Consumes both forms at once.
    pub fn into_parts(self) -> (String, String) {
        (self.sanitized, self.raw)
    }
}

/// Uppercases the first ASCII letter of a word, leaving the rest as-is.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
