//! Release checks for the publishing workflow.
//!
//! The build pipeline stamps package metadata with the newest changelog
//! release and refuses to publish while that release's date is still the
//! `PENDING` placeholder.

use crate::model::Release;
use anyhow::{bail, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Date placeholder used in the changelog until a version ships.
pub const PENDING_DATE: &str = "PENDING";

static RE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").unwrap());

/// The newest release. Changelogs list releases newest-first, so this is
/// the first entry in document order.
pub fn latest(releases: &[Release]) -> Option<&Release> {
    releases.first()
}

/// Whether a version string has the expected `major.minor.patch` shape.
pub fn is_semverish(version: &str) -> bool {
    RE_VERSION.is_match(version)
}

/// Resolve the release the package may be published as. Fails when the
/// changelog has no releases or the newest one is still pending.
pub fn check_publishable(releases: &[Release]) -> Result<&Release> {
    let Some(release) = latest(releases) else {
        bail!("changelog contains no releases");
    };
    if release.date == PENDING_DATE {
        bail!(
            "release {} is still pending, refusing to publish",
            release.version
        );
    }
    Ok(release)
}
