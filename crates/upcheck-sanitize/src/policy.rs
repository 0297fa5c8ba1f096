use std::collections::BTreeMap;

/// Where a piece of untrusted text is being sanitized.
///
/// The changelog policy only narrows behavior for [`Changelog`]; every other
/// context keeps whatever allow-list the host passed in.
///
/// [`Changelog`]: SanitizeContext::Changelog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizeContext {
    /// Release changelog and description bodies on update-check responses.
    Changelog,
    /// Any other host-defined sanitization site.
    General,
}

/// Tag and attribute allow-list consumed by [`sanitize`](crate::sanitize).
///
/// A tag that is not listed is stripped entirely; a listed tag keeps only
/// its listed attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    tags: BTreeMap<String, Vec<String>>,
}

impl AllowList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tag(mut self, tag: &str, attributes: &[&str]) -> Self {
        self.tags.insert(
            tag.to_ascii_lowercase(),
            attributes.iter().map(|a| a.to_ascii_lowercase()).collect(),
        );
        self
    }

    #[must_use]
    pub fn allows_tag(&self, tag: &str) -> bool {
        self.tags.contains_key(tag)
    }

    #[must_use]
    pub fn allows_attribute(&self, tag: &str, attribute: &str) -> bool {
        self.tags
            .get(tag)
            .is_some_and(|attributes| attributes.iter().any(|a| a == attribute))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }
}

/// Allow-list policy for changelog sanitization.
///
/// For any context other than [`SanitizeContext::Changelog`] the input list
/// passes through untouched; this policy never widens another context.
#[must_use]
pub fn changelog_allowed_html(allowed: AllowList, context: SanitizeContext) -> AllowList {
    if context != SanitizeContext::Changelog {
        return allowed;
    }

    changelog_allow_list()
}

/// The fixed allow-list for changelog and description bodies.
#[must_use]
pub fn changelog_allow_list() -> AllowList {
    AllowList::new()
        .with_tag("a", &["href", "title", "target"])
        .with_tag("abbr", &["title"])
        .with_tag("acronym", &["title"])
        .with_tag("code", &[])
        .with_tag("pre", &[])
        .with_tag("em", &[])
        .with_tag("strong", &[])
        .with_tag("div", &["class"])
        .with_tag("span", &["class"])
        .with_tag("p", &[])
        .with_tag("ul", &[])
        .with_tag("ol", &[])
        .with_tag("li", &[])
        .with_tag("h1", &[])
        .with_tag("h2", &[])
        .with_tag("h3", &[])
        .with_tag("h4", &[])
        .with_tag("h5", &[])
        .with_tag("h6", &[])
        .with_tag("img", &["src", "class", "alt"])
}
