//! Advisory update check against the crates.io registry.
//!
//! Runs once per invocation, after generation finishes.  Any failure
//! (offline, timeout, malformed response, unparsable version) is logged at
//! debug level and otherwise ignored.  An update hint must never break or
//! slow down a successful run, so the request carries a short timeout.

use std::time::Duration;

use semver::Version;
use serde::Deserialize;
use tracing::debug;

const CRATES_IO_API: &str = "https://crates.io/api/v1/crates/crcf";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Deserialize)]
struct CratesIoResponse {
    #[serde(rename = "crate")]
    crate_info: CrateInfo,
}

#[derive(Debug, Deserialize)]
struct CrateInfo {
    newest_version: String,
}

/// Query crates.io for the newest published version.
///
/// Returns `Some(message)` when a newer version exists, `None` otherwise
/// (including on any failure).
pub async fn newer_version_hint() -> Option<String> {
    let current = env!("CARGO_PKG_VERSION");
    match fetch_newest_version().await {
        Ok(newest) => compare_versions(current, &newest),
        Err(e) => {
            debug!("update check skipped: {e}");
            None
        }
    }
}

async fn fetch_newest_version() -> anyhow::Result<String> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("crcf/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let response: CratesIoResponse = client
        .get(CRATES_IO_API)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(response.crate_info.newest_version)
}

/// Pure comparison half of the check, kept separate so it is testable
/// without the network.
fn compare_versions(current: &str, newest: &str) -> Option<String> {
    let current = Version::parse(current).ok()?;
    let newest = Version::parse(newest).ok()?;

    if newest > current {
        Some(format!(
            "A new version of crcf is available: {newest} (you have {current}). \
             Update with: cargo install crcf"
        ))
    } else {
        None
    }
}
