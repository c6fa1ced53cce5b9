//! Include/exclude narrowing of a palette

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::palette::Palette;

/// How a [`FilterPolicy`] narrows the palette
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Remove the excluded slugs
    #[default]
    Exclude,
    /// Keep only the included slugs (falls back to exclude when the list is empty)
    Include,
}

impl FilterMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exclude => "exclude",
            Self::Include => "include",
        }
    }
}

impl FromStr for FilterMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exclude" => Ok(Self::Exclude),
            "include" => Ok(Self::Include),
            other => Err(Error::InvalidFilterMode(other.to_string())),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which palette slugs an editor is offered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPolicy {
    pub mode: FilterMode,
    pub exclude_slugs: BTreeSet<String>,
    pub include_slugs: BTreeSet<String>,
}

impl FilterPolicy {
    /// Policy that removes `slugs`
    pub fn exclude<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode: FilterMode::Exclude,
            exclude_slugs: slugs.into_iter().map(Into::into).collect(),
            include_slugs: BTreeSet::new(),
        }
    }

    /// Policy that keeps only `slugs`
    pub fn include<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode: FilterMode::Include,
            exclude_slugs: BTreeSet::new(),
            include_slugs: slugs.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether include semantics are in effect
    #[must_use]
    pub fn is_inclusive(&self) -> bool {
        self.mode == FilterMode::Include && !self.include_slugs.is_empty()
    }

    /// Whether `slug` survives this policy
    #[must_use]
    pub fn allows(&self, slug: &str) -> bool {
        if self.is_inclusive() {
            self.include_slugs.contains(slug)
        } else {
            !self.exclude_slugs.contains(slug)
        }
    }
}

/// Narrow `palette` by `policy`, preserving order.
///
/// Include slugs absent from the palette are ignored.
#[must_use]
pub fn filter(palette: Palette, policy: &FilterPolicy) -> Palette {
    palette.retain_by(|entry| policy.allows(entry.slug()))
}
