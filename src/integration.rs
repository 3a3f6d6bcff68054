//! The Rollbar integration core: routes a decoded event to the
//! formatter for its kind and produces a [`NotificationMessage`].
//!
//! Every formatter is a pure transform from payload to message; the
//! integration holds no per-call state. Configuration is supplied per
//! invocation, so one instance can serve concurrent callers.

use crate::config::RollbarConfig;
use crate::event::{
    EventData, EventPayload, Item, ItemPayload, OccurrencePayload, PayloadError,
    RepeatedItemPayload, VelocityPayload,
};
use crate::links::LinkBuilder;
use crate::markup::{capitalize, ChannelMarkup, SanitizedText, SlackMarkup};
use crate::message::{Attachment, AttachmentField, NotificationMessage, Reference};
use crate::severity::{palette, Color};
use serde_json::Value;

/// Converts Rollbar webhook events into channel-agnostic notification
/// messages, rendering text through an injected [`ChannelMarkup`].
pub struct RollbarIntegration {
    markup: Box<dyn ChannelMarkup>,
}

impl RollbarIntegration {
    pub fn new(markup: Box<dyn ChannelMarkup>) -> Self {
        Self { markup }
    }

    /// An integration rendering Slack mrkdwn.
    pub fn slack() -> Self {
        Self::new(Box::new(SlackMarkup))
    }

    /// Decodes a raw webhook payload and dispatches it. Unknown event
    /// kinds yield `Ok(None)`; malformed data for a known kind is a
    /// recoverable [`PayloadError`] for the caller to report.
    pub fn process_value(
        &self,
        value: Value,
        config: &RollbarConfig,
    ) -> Result<Option<NotificationMessage>, PayloadError> {
        let Some(payload) = EventPayload::from_value(value)? else {
            return Ok(None);
        };
        Ok(self.process(&payload, config))
    }

    /// Dispatches a decoded event to the formatter for its kind.
    /// `Deploy` is a defined no-op.
    pub fn process(
        &self,
        payload: &EventPayload,
        config: &RollbarConfig,
    ) -> Option<NotificationMessage> {
        match &payload.data {
            EventData::Test => Some(self.test()),
            EventData::Deploy => None,
            EventData::ExpRepeatItem(data) => Some(self.exp_repeat_item(data, config)),
            EventData::ItemVelocity(data) => Some(self.item_velocity(data, config)),
            EventData::NewItem(data) => Some(self.new_item(data, config)),
            EventData::Occurrence(data) => Some(self.occurrence(data, config)),
            EventData::ReactivatedItem(data) => Some(self.reactivated_item(data, config)),
            EventData::ReopenedItem(data) => Some(self.reopened_item(data, config)),
            EventData::ResolvedItem(data) => Some(self.resolved_item(data, config)),
        }
    }

    fn test(&self) -> NotificationMessage {
        NotificationMessage {
            references: vec![Reference::Tag("test".to_string())],
            subject: None,
            color: None,
            notification: None,
            attachment: None,
        }
    }

    fn exp_repeat_item(
        &self,
        data: &RepeatedItemPayload,
        config: &RollbarConfig,
    ) -> NotificationMessage {
        self.item_message(
            &data.item,
            config,
            &format!("{}th occurrence", data.occurrences),
            palette().info(),
        )
    }

    fn item_velocity(&self, data: &VelocityPayload, config: &RollbarConfig) -> NotificationMessage {
        self.item_message(
            &data.item,
            config,
            &format!(
                "{} occurrences in {}",
                data.trigger.threshold, data.trigger.window_size_description
            ),
            palette().info(),
        )
    }

    fn new_item(&self, data: &ItemPayload, config: &RollbarConfig) -> NotificationMessage {
        self.item_message(&data.item, config, "New item", palette().info())
    }

    fn occurrence(&self, data: &OccurrencePayload, config: &RollbarConfig) -> NotificationMessage {
        let OccurrencePayload { item, occurrence } = data;
        let color = palette().color_for(&occurrence.level);

        let text = SanitizedText::build(self.markup.as_ref(), || {
            let links = LinkBuilder::new(config, self.markup.as_ref()).links_for_item(item, true);
            format!(
                "{} ({})\n{}",
                display_title(&item.title),
                capitalize(&occurrence.level),
                links
            )
        });
        let (sanitized, raw) = text.into_parts();

        let mut fields = Vec::new();
        if let Some(person) = &occurrence.person {
            if let Some(value) = person.display() {
                fields.push(AttachmentField {
                    title: "User".to_string(),
                    value,
                    short: true,
                });
            }
        }
        if let Some(version) = &occurrence.version {
            fields.push(AttachmentField {
                title: "Version".to_string(),
                value: version.clone(),
                short: true,
            });
        }

        NotificationMessage {
            references: vec![Reference::Id(item.id)],
            subject: Some(item.title.clone()),
            color: Some(color),
            notification: Some(sanitized),
            attachment: Some(Attachment {
                text: raw,
                color,
                fields,
            }),
        }
    }

    fn reactivated_item(&self, data: &ItemPayload, config: &RollbarConfig) -> NotificationMessage {
        self.item_message(&data.item, config, "Reactivated", palette().info())
    }

    fn reopened_item(&self, data: &ItemPayload, config: &RollbarConfig) -> NotificationMessage {
        self.item_message(&data.item, config, "Reopened", palette().info())
    }

    fn resolved_item(&self, data: &ItemPayload, config: &RollbarConfig) -> NotificationMessage {
        let resolved = palette().resolved;
        let mut message = self.item_message(&data.item, config, "Resolved", resolved);
        message.color = Some(resolved);
        message
    }

    /// The shared `"{headline}: {title}\n{item link}"` shape used by
    /// every item lifecycle event except `occurrence`.
    fn item_message(
        &self,
        item: &Item,
        config: &RollbarConfig,
        headline: &str,
        color: Color,
    ) -> NotificationMessage {
        let text = SanitizedText::build(self.markup.as_ref(), || {
            let links = LinkBuilder::new(config, self.markup.as_ref()).links_for_item(item, false);
            format!("{}: {}\n{}", headline, display_title(&item.title), links)
        });
        let (sanitized, raw) = text.into_parts();

        NotificationMessage {
            references: vec![Reference::Id(item.id)],
            subject: Some(item.title.clone()),
            color: None,
            notification: Some(sanitized),
            attachment: Some(Attachment {
                text: raw,
                color,
                fields: vec![],
            }),
        }
    }
}

/// Item titles may embed newlines; display text is single-line, with
/// each newline becoming a word separator.
fn display_title(title: &str) -> String {
    title.replace('\n', " ")
}
