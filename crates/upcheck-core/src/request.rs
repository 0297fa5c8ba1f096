use upcheck_store::ItemId;

/// Parameters of one update-check request, as the transport hands them
/// over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionCheckRequest {
    pub item_id: Option<ItemId>,
    /// Caller-preferred slug, still URL-encoded. Decoded and key-sanitized
    /// during resolution.
    pub slug: Option<String>,
    pub beta: bool,
}

impl VersionCheckRequest {
    #[must_use]
    pub fn new(item_id: ItemId) -> Self {
        Self {
            item_id: Some(item_id),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    #[must_use]
    pub fn with_beta(mut self, beta: bool) -> Self {
        self.beta = beta;
        self
    }

    /// Build a request from raw query parameters.
    ///
    /// Values arrive as untyped strings: a non-numeric `item_id` counts as
    /// absent, an empty `slug` as missing, and `beta` follows the loose
    /// truthiness clients send: empty and `"0"` are false, anything else
    /// is true.
    #[must_use]
    pub fn from_query_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut request = Self::default();
        for (key, value) in pairs {
            match key {
                "item_id" => request.item_id = value.parse().ok(),
                "slug" if !value.is_empty() => request.slug = Some(value.to_string()),
                "beta" => request.beta = is_truthy(value),
                _ => {}
            }
        }
        request
    }
}

fn is_truthy(value: &str) -> bool {
    !value.is_empty() && value != "0"
}
