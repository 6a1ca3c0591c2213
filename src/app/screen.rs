// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::content::ChartId;

/// Screens the user can navigate between.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Gallery,
    Chart(ChartId),
}
