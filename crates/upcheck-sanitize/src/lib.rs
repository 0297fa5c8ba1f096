//! HTML sanitization for release changelogs and descriptions.
//!
//! Three pieces, applied in order by the protocol core:
//! - An allow-list policy ([`changelog_allowed_html`]) that swaps in the
//!   fixed changelog tag set for exactly one context and passes every other
//!   context through untouched.
//! - An allow-list driven sanitizer ([`sanitize`]) that strips everything
//!   the list does not cover while keeping text content.
//! - A deterministic paragraph transform ([`autop`]) that wraps bare text
//!   blocks after sanitization.

mod autop;
mod kses;
mod policy;

pub use autop::autop;
pub use kses::sanitize;
pub use policy::{AllowList, SanitizeContext, changelog_allow_list, changelog_allowed_html};
