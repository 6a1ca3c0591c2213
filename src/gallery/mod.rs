// SPDX-License-Identifier: MPL-2.0
//! Gallery data: sidebar categories, card tags, and the tag filter.

pub mod about;
pub mod filter;
pub mod tags;

pub use filter::{card_visible, visible_cards, TagSelection};
pub use tags::{card_tags, Category, CATEGORIES};
