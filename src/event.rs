//! Typed model of the inbound webhook payload.
//!
//! The wire envelope is `{ "event_name": ..., "data": {...} }` with a
//! data shape that depends on the event name. Decoding happens in two
//! steps: the event name is matched against the closed [`EventKind`]
//! table (unknown names are dropped, not errors), then the data is
//! decoded into the variant for that kind. A formatter therefore never
//! sees a payload missing the fields it needs.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// The closed set of webhook event kinds this integration understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Test,
    Deploy,
    ExpRepeatItem,
    ItemVelocity,
    NewItem,
    Occurrence,
    ReactivatedItem,
    ReopenedItem,
    ResolvedItem,
}

impl EventKind {
    /// Parses the wire name of an event kind. Unknown names yield
    /// `None`; the caller drops the event.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "test" => Some(Self::Test),
            "deploy" => Some(Self::Deploy),
            "exp_repeat_item" => Some(Self::ExpRepeatItem),
            "item_velocity" => Some(Self::ItemVelocity),
            "new_item" => Some(Self::NewItem),
            "occurrence" => Some(Self::Occurrence),
            "reactivated_item" => Some(Self::ReactivatedItem),
            "reopened_item" => Some(Self::ReopenedItem),
            "resolved_item" => Some(Self::ResolvedItem),
            _ => None,
        }
    }

    /// The wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Deploy => "deploy",
            Self::ExpRepeatItem => "exp_repeat_item",
            Self::ItemVelocity => "item_velocity",
            Self::NewItem => "new_item",
            Self::Occurrence => "occurrence",
            Self::ReactivatedItem => "reactivated_item",
            Self::ReopenedItem => "reopened_item",
            Self::ResolvedItem => "resolved_item",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked issue in the originating service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub id: u64,
    /// May contain embedded newlines; display text turns them into
    /// spaces, the message subject keeps them.
    pub title: String,
    /// Project-scoped counter used in deep-link URLs.
    pub counter: u64,
    #[serde(default)]
    pub last_occurrence_id: Option<u64>,
}

/// The person an occurrence was attributed to, if any.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub email: Option<String>,
    /// Upstream sends either a string or a numeric id.
    #[serde(default)]
    pub id: Option<Value>,
}

impl Person {
    /// Email when present, otherwise the id; `None` when the person
    /// record carries neither.
    pub fn display(&self) -> Option<String> {
        if let Some(email) = &self.email {
            return Some(email.clone());
        }
        match &self.id {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        }
    }
}

/// One recorded instance of an item happening.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Occurrence {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub person: Option<Person>,
    #[serde(default)]
    pub client: Option<Value>,
    /// Kept as the raw wire string so unknown levels still format and
    /// fall back to the error color.
    pub level: String,
}

/// A velocity-alert rule that fired.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trigger {
    pub threshold: u64,
    pub window_size_description: String,
}

/// Data for events that carry only an item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemPayload {
    pub item: Item,
}

/// Data for the 10^nth-occurrence event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RepeatedItemPayload {
    pub item: Item,
    pub occurrences: u64,
}

/// Data for the velocity-alert event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VelocityPayload {
    pub item: Item,
    pub trigger: Trigger,
}

/// Data for a single recorded occurrence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OccurrencePayload {
    pub item: Item,
    pub occurrence: Occurrence,
}

/// The kind-specific payload, one variant per supported event kind.
#[derive(Debug, Clone, PartialEq)]
pub enum EventData {
    Test,
    Deploy,
    ExpRepeatItem(RepeatedItemPayload),
    ItemVelocity(VelocityPayload),
    NewItem(ItemPayload),
    Occurrence(OccurrencePayload),
    ReactivatedItem(ItemPayload),
    ReopenedItem(ItemPayload),
    ResolvedItem(ItemPayload),
}

/// A decoded inbound event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventPayload {
    pub event_kind: EventKind,
    pub data: EventData,
}

/// Failure to decode an inbound payload. Unknown event kinds are not
/// errors; these cover envelopes and known-kind data that do not match
/// the expected shape.
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("payload envelope is malformed: {0}")]
    Envelope(#[source] serde_json::Error),

    #[error("malformed `{kind}` payload: {source}")]
    Data {
        kind: EventKind,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct RawEnvelope {
    event_name: String,
    #[serde(default)]
    data: Value,
}

impl EventPayload {
    /// Decodes a raw webhook payload. Returns `Ok(None)` for event
    /// kinds outside the supported set; a known kind whose data does
    /// not match its expected shape is a [`PayloadError`].
    pub fn from_value(value: Value) -> Result<Option<Self>, PayloadError> {
        let envelope: RawEnvelope =
            serde_json::from_value(value).map_err(PayloadError::Envelope)?;
        let Some(kind) = EventKind::parse(&envelope.event_name) else {
            tracing::debug!(event_name = %envelope.event_name, "dropping unrecognized event kind");
            return Ok(None);
        };
        let data = EventData::decode(kind, envelope.data)?;
        Ok(Some(Self {
            event_kind: kind,
            data,
        }))
    }
}

impl EventData {
    fn decode(kind: EventKind, data: Value) -> Result<Self, PayloadError> {
        let decoded = match kind {
            EventKind::Test => Self::Test,
            EventKind::Deploy => Self::Deploy,
            EventKind::ExpRepeatItem => Self::ExpRepeatItem(decode_data(kind, data)?),
            EventKind::ItemVelocity => Self::ItemVelocity(decode_data(kind, data)?),
            EventKind::NewItem => Self::NewItem(decode_data(kind, data)?),
            EventKind::Occurrence => Self::Occurrence(decode_data(kind, data)?),
            EventKind::ReactivatedItem => Self::ReactivatedItem(decode_data(kind, data)?),
            EventKind::ReopenedItem => Self::ReopenedItem(decode_data(kind, data)?),
            EventKind::ResolvedItem => Self::ResolvedItem(decode_data(kind, data)?),
        };
        Ok(decoded)
    }
}

fn decode_data<T: serde::de::DeserializeOwned>(
    kind: EventKind,
    data: Value,
) -> Result<T, PayloadError> {
    serde_json::from_value(data).map_err(|source| PayloadError::Data { kind, source })
}
