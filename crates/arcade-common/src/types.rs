//! Common type definitions and newtype wrappers for domain modeling.

use crate::error::ArcadeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Discord server (guild) ID. The tenant-scoping unit for all stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ServerId(pub u64);

impl fmt::Display for ServerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Discord channel ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChannelId(pub u64);

impl ChannelId {
    /// Renders the channel as a Discord mention (`<#id>`).
    #[must_use]
    pub fn mention(self) -> String {
        format!("<#{}>", self.0)
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Announcement topic a server can route to a dedicated channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    /// Free-to-keep game giveaways.
    Free,
    /// Discounted games.
    Deals,
    /// Game bundles.
    Bundles,
    /// Drops announcements for watched games.
    Drops,
    /// Game award news.
    Awards,
    /// Curated resources.
    Resources,
}

impl Topic {
    /// Every topic, sorted by name.
    pub const ALL: [Self; 6] = [
        Self::Awards,
        Self::Bundles,
        Self::Deals,
        Self::Drops,
        Self::Free,
        Self::Resources,
    ];

    /// Stable lowercase name, also the stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Deals => "deals",
            Self::Bundles => "bundles",
            Self::Drops => "drops",
            Self::Awards => "awards",
            Self::Resources => "resources",
        }
    }

    /// Comma-separated list of accepted topic names.
    #[must_use]
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(|topic| topic.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = ArcadeError;

    /// Parses user input: surrounding whitespace and case are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|topic| topic.as_str() == normalized)
            .ok_or_else(|| ArcadeError::validation("topic", format!("unknown topic '{normalized}'")))
    }
}

/// Category accepted by the resources lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    /// Game magazine archives.
    Magazines,
    /// Game history books.
    Books,
    /// Software and museum archives.
    Archives,
}

impl ResourceCategory {
    /// Every category in display order.
    pub const ALL: [Self; 3] = [Self::Magazines, Self::Books, Self::Archives];

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Magazines => "magazines",
            Self::Books => "books",
            Self::Archives => "archives",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceCategory {
    type Err = ArcadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| {
                ArcadeError::validation("category", format!("unknown category '{normalized}'"))
            })
    }
}
