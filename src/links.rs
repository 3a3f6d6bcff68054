//! Deep links back into the originating service.

use crate::config::RollbarConfig;
use crate::event::Item;
use crate::markup::ChannelMarkup;

const BASE_URL: &str = "https://rollbar.com";

/// Builds item and occurrence deep links for one invocation, rendering
/// them through the channel's link markup.
pub struct LinkBuilder<'a> {
    config: &'a RollbarConfig,
    markup: &'a dyn ChannelMarkup,
}

impl<'a> LinkBuilder<'a> {
    pub fn new(config: &'a RollbarConfig, markup: &'a dyn ChannelMarkup) -> Self {
        Self { config, markup }
    }

    /// `https://rollbar.com/{account}/{project}/items/{counter}`.
    /// Account and project are embedded verbatim.
    pub fn item_url(&self, item: &Item) -> String {
        format!(
            "{}/{}/{}/items/{}",
            BASE_URL, self.config.account, self.config.project, item.counter
        )
    }

    /// Rendered link markup for an item; with `with_occurrence`, the
    /// item link followed by a labeled link to its latest occurrence.
    /// Degrades to the plain item link when the occurrence id is absent.
    pub fn links_for_item(&self, item: &Item, with_occurrence: bool) -> String {
        let item_url = self.item_url(item);

        if with_occurrence {
            if let Some(occurrence_id) = item.last_occurrence_id {
                let occurrence_url = format!("{}/occurrences/{}", item_url, occurrence_id);
                return format!(
                    "{} ({})",
                    self.markup.link(&item_url, None),
                    self.markup.link(&occurrence_url, Some("Occurrence"))
                );
            }
        }
        self.markup.link(&item_url, None)
    }
}
