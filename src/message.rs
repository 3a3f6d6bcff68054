//! The normalized notification message handed to a delivery transport.
//!
//! This is the output contract of the integration, independent of the
//! originating service and of the chat channel that will carry it.

use crate::severity::Color;
use serde::Serialize;

/// An upstream record a message refers back to: the numeric id of the
/// triggering item, or a fixed tag for synthetic events.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reference {
    Id(u64),
    Tag(String),
}

/// A short key/value pair rendered inside the rich attachment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
    pub short: bool,
}

/// The rich portion of a notification: raw (unescaped) text, display
/// color, and optional short fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachment {
    pub text: String,
    pub color: Color,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<AttachmentField>,
}

/// A channel-agnostic notification produced from one inbound event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationMessage {
    /// Never empty for item-bearing events.
    pub references: Vec<Reference>,
    /// The unmodified item title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Escaped text for the primary notification field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}
