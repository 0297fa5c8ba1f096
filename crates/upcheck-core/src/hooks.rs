use std::fmt;

use upcheck_store::{FileTable, Item, ItemId};

use crate::response::VersionCheckResponse;

type RequestedFileFilter = dyn Fn(String, &FileTable, u32) -> String + Send + Sync;
type PackageUrlFilter = dyn Fn(String, ItemId) -> String + Send + Sync;
type ResponseFilter = dyn Fn(VersionCheckResponse, &Item, bool) -> VersionCheckResponse + Send + Sync;

/// Extension points applied at fixed positions in the resolution pipeline.
///
/// Each hook is a pure value transform with an identity default. The
/// package locator runs `requested_file` first and `package_url` second;
/// the endpoint runs `response` over the assembled document last. Hosts use
/// these to redirect download URLs through tracking endpoints or to enrich
/// the emitted document without touching the core.
pub struct Hooks {
    requested_file: Box<RequestedFileFilter>,
    package_url: Box<PackageUrlFilter>,
    response: Box<ResponseFilter>,
}

impl Default for Hooks {
    fn default() -> Self {
        Self::new()
    }
}

impl Hooks {
    #[must_use]
    pub fn new() -> Self {
        Self {
            requested_file: Box::new(|url, _, _| url),
            package_url: Box::new(|url, _| url),
            response: Box::new(|response, _, _| response),
        }
    }

    /// Replace the requested-file hook. It receives the raw URL straight
    /// from the file-table lookup, plus the table and selected key that
    /// produced it.
    #[must_use]
    pub fn with_requested_file<F>(mut self, filter: F) -> Self
    where
        F: Fn(String, &FileTable, u32) -> String + Send + Sync + 'static,
    {
        self.requested_file = Box::new(filter);
        self
    }

    /// Replace the package-URL hook, the last word on the URL the locator
    /// returns.
    #[must_use]
    pub fn with_package_url<F>(mut self, filter: F) -> Self
    where
        F: Fn(String, ItemId) -> String + Send + Sync + 'static,
    {
        self.package_url = Box::new(filter);
        self
    }

    /// Replace the response hook. It receives the assembled document, the
    /// item it describes, and whether the beta channel was selected.
    #[must_use]
    pub fn with_response<F>(mut self, filter: F) -> Self
    where
        F: Fn(VersionCheckResponse, &Item, bool) -> VersionCheckResponse + Send + Sync + 'static,
    {
        self.response = Box::new(filter);
        self
    }

    pub(crate) fn filter_requested_file(&self, url: String, files: &FileTable, key: u32) -> String {
        (self.requested_file)(url, files, key)
    }

    pub(crate) fn filter_package_url(&self, url: String, item_id: ItemId) -> String {
        (self.package_url)(url, item_id)
    }

    pub(crate) fn filter_response(
        &self,
        response: VersionCheckResponse,
        item: &Item,
        is_beta: bool,
    ) -> VersionCheckResponse {
        (self.response)(response, item, is_beta)
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks").finish_non_exhaustive()
    }
}
