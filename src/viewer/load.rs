// SPDX-License-Identifier: MPL-2.0
//! Source tagging for asynchronous image loads.
//!
//! Every source change issues a [`LoadTicket`]. A load result is applied only
//! when it carries the ticket that is still current, so a slow load for an
//! earlier source can never overwrite the fit of a newer one.

use std::fmt;

/// Identifies one load issued for one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    source: String,
    generation: u64,
}

impl LoadTicket {
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for LoadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.generation, self.source)
    }
}

/// Issues tickets and remembers which one is current.
#[derive(Debug, Default)]
pub struct LoadTracker {
    current: Option<LoadTicket>,
    issued: u64,
}

impl LoadTracker {
    /// Invalidates any outstanding ticket and issues a new one for `source`.
    pub fn issue(&mut self, source: &str) -> LoadTicket {
        self.issued += 1;
        let ticket = LoadTicket {
            source: source.to_string(),
            generation: self.issued,
        };
        self.current = Some(ticket.clone());
        ticket
    }

    #[must_use]
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.current.as_ref() == Some(ticket)
    }

    #[must_use]
    pub fn current_source(&self) -> Option<&str> {
        self.current.as_ref().map(LoadTicket::source)
    }
}
