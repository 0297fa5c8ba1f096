//! Update-check protocol core: version resolution and release-metadata
//! response assembly.
//!
//! Given an item identifier and optional request flags, this crate decides
//! which release of the item is current (stable, or beta when explicitly
//! requested, enabled, and strictly newer), resolves the download package
//! for that release, and assembles the sanitized metadata document that
//! answers the update check:
//! - Strict semantic-version comparison with lenient normalization.
//! - The package locator with its two URL extension points.
//! - The endpoint state machine with its final response extension point.
//!
//! Requests for items that are unknown or not free produce no document at
//! all; those belong to a separate, licensed update path.

mod check;
mod hooks;
mod package;
mod request;
mod response;
mod slug;
mod version;

/// Endpoint entry point.
pub use check::handle_version_check;
/// Extension-point container with identity defaults.
pub use hooks::Hooks;
/// Package locator for one release channel of an item.
pub use package::resolve_package;
pub use request::VersionCheckRequest;
pub use response::{Sections, VersionCheckResponse};
pub use slug::{append_query_arg, percent_decode, sanitize_key};
/// Strictly-newer semantic-version comparison.
pub use version::is_newer;
