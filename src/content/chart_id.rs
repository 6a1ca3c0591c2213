// SPDX-License-Identifier: MPL-2.0
use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Name of one chart, used as directory name, file stem, and route segment.
///
/// Never empty, never `.` or `..`, and free of path separators, so it can be
/// joined onto a content path safely.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChartId(String);

impl ChartId {
    pub fn new(name: impl Into<String>) -> Result<Self, Error> {
        let name = name.into();
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(Error::Content(format!("invalid chart id '{name}'")));
        }
        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ChartId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ChartId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
