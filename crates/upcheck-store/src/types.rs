use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Identifier of a catalog item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Expected a numeric item id, got: {input}")]
pub struct IdParseError {
    pub input: String,
}

impl FromStr for ItemId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(ItemId)
            .map_err(|_| IdParseError {
                input: s.to_string(),
            })
    }
}

/// Release track of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Stable,
    Beta,
}

impl Channel {
    #[must_use]
    pub fn is_beta(self) -> bool {
        matches!(self, Channel::Beta)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Stable => write!(f, "stable"),
            Channel::Beta => write!(f, "beta"),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown release channel: {input}")]
pub struct ChannelParseError {
    pub input: String,
}

impl FromStr for Channel {
    type Err = ChannelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stable" => Ok(Channel::Stable),
            "beta" => Ok(Channel::Beta),
            _ => Err(ChannelParseError {
                input: s.to_string(),
            }),
        }
    }
}

/// One downloadable file record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub url: String,
}

/// File records for one release channel, keyed by numeric file key, with one
/// key designated as the current download.
///
/// Lookups are total: an absent key, a mismatched selected key, or an empty
/// table all yield `None`, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTable {
    files: BTreeMap<u32, FileEntry>,
    selected: u32,
}

impl FileTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_file(mut self, key: u32, url: impl Into<String>) -> Self {
        self.files.insert(key, FileEntry { url: url.into() });
        self
    }

    /// Designate `key` as the current download. The key does not have to
    /// resolve; lookups through a dangling selected key yield `None`.
    #[must_use]
    pub fn with_selected(mut self, key: u32) -> Self {
        self.selected = key;
        self
    }

    #[must_use]
    pub fn selected_key(&self) -> u32 {
        self.selected
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[must_use]
    pub fn url(&self, key: u32) -> Option<&str> {
        self.files.get(&key).map(|entry| entry.url.as_str())
    }

    /// URL of the currently selected file, if the selected key resolves.
    #[must_use]
    pub fn selected_url(&self) -> Option<&str> {
        self.url(self.selected)
    }
}

/// Banner image URLs shown alongside release metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banners {
    pub high: String,
    pub low: String,
}

/// A catalog item ("download") as the store describes it.
///
/// Items are read-only within a single request evaluation; nothing in this
/// crate mutates the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub slug: String,
    pub permalink: String,
    pub excerpt: String,
    pub content: String,
    pub last_modified: DateTime<Utc>,
    pub stable_version: String,
    pub beta_version: String,
    pub beta_enabled: bool,
    pub stable_changelog: String,
    pub beta_changelog: String,
    pub stable_files: FileTable,
    pub beta_files: FileTable,
    pub banners: Banners,
}

impl Item {
    #[must_use]
    pub fn new(id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            slug: String::new(),
            permalink: String::new(),
            excerpt: String::new(),
            content: String::new(),
            last_modified: Utc::now(),
            stable_version: String::new(),
            beta_version: String::new(),
            beta_enabled: false,
            stable_changelog: String::new(),
            beta_changelog: String::new(),
            stable_files: FileTable::new(),
            beta_files: FileTable::new(),
            banners: Banners::default(),
        }
    }

    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    #[must_use]
    pub fn with_permalink(mut self, permalink: impl Into<String>) -> Self {
        self.permalink = permalink.into();
        self
    }

    #[must_use]
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    #[must_use]
    pub fn with_last_modified(mut self, at: DateTime<Utc>) -> Self {
        self.last_modified = at;
        self
    }

    #[must_use]
    pub fn with_stable_version(mut self, version: impl Into<String>) -> Self {
        self.stable_version = version.into();
        self
    }

    #[must_use]
    pub fn with_beta_version(mut self, version: impl Into<String>) -> Self {
        self.beta_version = version.into();
        self
    }

    #[must_use]
    pub fn with_beta_enabled(mut self, enabled: bool) -> Self {
        self.beta_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_stable_changelog(mut self, changelog: impl Into<String>) -> Self {
        self.stable_changelog = changelog.into();
        self
    }

    #[must_use]
    pub fn with_beta_changelog(mut self, changelog: impl Into<String>) -> Self {
        self.beta_changelog = changelog.into();
        self
    }

    #[must_use]
    pub fn with_stable_files(mut self, files: FileTable) -> Self {
        self.stable_files = files;
        self
    }

    #[must_use]
    pub fn with_beta_files(mut self, files: FileTable) -> Self {
        self.beta_files = files;
        self
    }

    #[must_use]
    pub fn with_banners(mut self, banners: Banners) -> Self {
        self.banners = banners;
        self
    }

    /// Description text: the excerpt when present, otherwise the full
    /// content.
    #[must_use]
    pub fn description(&self) -> &str {
        if self.excerpt.is_empty() {
            &self.content
        } else {
            &self.excerpt
        }
    }

    #[must_use]
    pub fn version(&self, channel: Channel) -> &str {
        match channel {
            Channel::Stable => &self.stable_version,
            Channel::Beta => &self.beta_version,
        }
    }

    #[must_use]
    pub fn changelog(&self, channel: Channel) -> &str {
        match channel {
            Channel::Stable => &self.stable_changelog,
            Channel::Beta => &self.beta_changelog,
        }
    }

    #[must_use]
    pub fn files(&self, channel: Channel) -> &FileTable {
        match channel {
            Channel::Stable => &self.stable_files,
            Channel::Beta => &self.beta_files,
        }
    }
}
