use log::{debug, trace};
use upcheck_sanitize::{AllowList, SanitizeContext, autop, changelog_allowed_html, sanitize};
use upcheck_store::{Channel, ItemStore};

use crate::hooks::Hooks;
use crate::package::resolve_package;
use crate::request::VersionCheckRequest;
use crate::response::{Sections, VersionCheckResponse};
use crate::slug::{append_query_arg, percent_decode, sanitize_key};
use crate::version::is_newer;

const LAST_UPDATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Answer an update-check request for a free item.
///
/// Returns `None` when the request names no item, the item is unknown, or
/// the item is not free — those requests belong to the separate, licensed
/// update path and must pass through untouched. Everything else degrades
/// gracefully: missing files, changelogs, or banners produce empty fields,
/// never a failure.
#[must_use]
pub fn handle_version_check(
    store: &dyn ItemStore,
    hooks: &Hooks,
    request: &VersionCheckRequest,
) -> Option<VersionCheckResponse> {
    let item_id = request.item_id?;

    if !store.is_free(item_id) {
        trace!("item {item_id} is not free, leaving the request to the licensed path");
        return None;
    }
    let item = store.get_item(item_id)?;

    let slug = match &request.slug {
        Some(raw) => sanitize_key(&percent_decode(raw)),
        None => item.slug.clone(),
    };

    let mut channel = Channel::Stable;
    if request.beta && item.beta_enabled && is_newer(&item.beta_version, &item.stable_version) {
        channel = Channel::Beta;
    }
    let new_version = item.version(channel).to_string();
    debug!("resolved item {item_id} to {channel} version {new_version}");

    let package = resolve_package(store, hooks, item_id, channel);

    let allowed = changelog_allowed_html(AllowList::new(), SanitizeContext::Changelog);
    let sections = Sections {
        description: autop(&sanitize(item.description(), &allowed)),
        changelog: autop(&sanitize(item.changelog(channel), &allowed)),
    };

    let response = VersionCheckResponse {
        new_version,
        stable_version: item.stable_version.clone(),
        name: item.title.clone(),
        slug,
        url: append_query_arg(&item.permalink, "changelog", "1"),
        last_updated: item.last_modified.format(LAST_UPDATED_FORMAT).to_string(),
        homepage: item.permalink.clone(),
        download_link: package.clone(),
        package,
        sections,
        banners: item.banners.clone(),
        is_free: true,
    };

    Some(hooks.filter_response(response, &item, channel.is_beta()))
}
