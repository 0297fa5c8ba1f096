use serde::{Deserialize, Serialize};
use upcheck_store::Banners;

/// Body sections of the response document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sections {
    pub description: String,
    pub changelog: String,
}

/// The release-metadata document emitted for an eligible update check.
///
/// `package` and `download_link` always carry the same URL; both names are
/// kept because consumers of the wire format read one or the other.
/// `is_free` is `true` on every document this crate produces — requests for
/// non-free items never get a document at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionCheckResponse {
    pub new_version: String,
    pub stable_version: String,
    pub name: String,
    pub slug: String,
    pub url: String,
    pub last_updated: String,
    pub homepage: String,
    pub package: String,
    pub download_link: String,
    pub sections: Sections,
    pub banners: Banners,
    pub is_free: bool,
}

impl VersionCheckResponse {
    /// Serialize the document for the wire.
    ///
    /// # Errors
    /// Returns an error if JSON serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
