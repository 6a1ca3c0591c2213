// SPDX-License-Identifier: MPL-2.0
//! Inclusive (OR) tag filtering over gallery cards.

use super::tags::card_tags;
use crate::content::ChartId;
use std::collections::BTreeSet;

/// The set of tags the user has switched on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelection(BTreeSet<String>);

impl TagSelection {
    /// Adds `tag` if absent, removes it otherwise. Returns whether it is now
    /// selected.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if self.0.remove(tag) {
            false
        } else {
            self.0.insert(tag.to_string());
            true
        }
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// A card is shown when nothing is selected or when it carries any selected tag.
#[must_use]
pub fn card_visible(card_tags: &[&str], selection: &TagSelection) -> bool {
    selection.is_empty() || card_tags.iter().any(|tag| selection.contains(tag))
}

/// The ids from `ids` whose cards pass the filter, in the same order.
#[must_use]
pub fn visible_cards<'a>(ids: &'a [ChartId], selection: &TagSelection) -> Vec<&'a ChartId> {
    ids.iter()
        .filter(|id| card_visible(card_tags(id.as_str()), selection))
        .collect()
}
