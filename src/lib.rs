//! rollbar-notify: turns Rollbar webhook events into normalized,
//! channel-agnostic notification messages.
//!
//! The library is a pure, synchronous transform: decode the inbound
//! payload into a typed event, route it to the formatter for its kind,
//! and return a [`message::NotificationMessage`] for a delivery
//! transport to carry. Ingestion and delivery live outside this crate.

pub mod config;
pub mod event;
pub mod integration;
pub mod links;
pub mod markup;
pub mod message;
pub mod severity;

pub use config::RollbarConfig;
pub use event::{EventData, EventKind, EventPayload, PayloadError};
pub use integration::RollbarIntegration;
pub use markup::{ChannelMarkup, SlackMarkup};
pub use message::{Attachment, AttachmentField, NotificationMessage, Reference};
pub use severity::{palette, Color, SeverityLevel};
