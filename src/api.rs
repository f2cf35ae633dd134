use serde::de::DeserializeOwned;

use crate::consts::{ApiConfig, listing_uri};
use crate::games::Game;
use crate::json_schemas::chunk::ChunkData;
use crate::json_schemas::versions::{ChunkInfo, VersionData};
use crate::pkg_version::{self, GAME_LISTING};
use crate::tree::FileRecord;
use crate::voice_data::locale::VoiceLocale;

fn get(uri: &str) -> anyhow::Result<minreq::Response> {
    let response = minreq::get(uri)
        .with_timeout(*crate::REQUESTS_TIMEOUT)
        .send()?;

    if !(200..300).contains(&response.status_code) {
        anyhow::bail!("Request to {uri} failed: {} {}", response.status_code, response.reason_phrase);
    }

    Ok(response)
}

fn get_json<T: DeserializeOwned>(uri: &str) -> anyhow::Result<T> {
    Ok(get(uri)?.json()?)
}

/// Try every configured API base until one of them succeeds
fn with_fallback<T>(config: &ApiConfig, request: impl Fn(&str) -> anyhow::Result<T>) -> anyhow::Result<T> {
    let mut errors = Vec::new();

    for (i, base) in config.bases().enumerate() {
        match request(base) {
            Ok(value) => {
                if i > 0 {
                    tracing::warn!(base, "Primary API base failed, fallback is used");
                }

                return Ok(value);
            }

            Err(err) => {
                tracing::debug!(base, error = %err, "API request failed");

                errors.push(format!("{base}: {err}"));
            }
        }
    }

    anyhow::bail!("Failed to request files API: {}", errors.join("; "))
}

#[cached::proc_macro::cached(result)]
#[tracing::instrument(level = "trace")]
fn request_version_data(uri: String) -> anyhow::Result<VersionData> {
    tracing::trace!("Fetching version data");

    get_json(&uri)
}

#[cached::proc_macro::cached(result)]
#[tracing::instrument(level = "trace")]
fn request_chunk_data(uri: String) -> anyhow::Result<ChunkData> {
    tracing::trace!("Fetching chunk data");

    get_json(&uri)
}

#[cached::proc_macro::cached(result)]
#[tracing::instrument(level = "trace")]
fn request_listing(uri: String) -> anyhow::Result<Vec<FileRecord>> {
    tracing::trace!("Fetching files listing");

    let response = get(&uri)?;

    Ok(pkg_version::parse(response.as_str()?)?)
}

/// Fetch version line manifest of the game
#[tracing::instrument(level = "debug", skip(config))]
pub fn version_data(config: &ApiConfig, game: Game, version: &str) -> anyhow::Result<VersionData> {
    with_fallback(config, |base| {
        request_version_data(ApiConfig::version_data_uri(base, game, version))
    })
}

/// Fetch chunk catalog the manifest points to
#[tracing::instrument(level = "debug", skip(config))]
pub fn chunk_data(config: &ApiConfig, game: Game, chunk: &ChunkInfo) -> anyhow::Result<ChunkData> {
    with_fallback(config, |base| {
        request_chunk_data(ApiConfig::chunk_data_uri(base, game, chunk))
    })
}

/// Fetch `pkg_version`-like files listing from the decompressed package location
#[tracing::instrument(level = "debug")]
pub fn pkg_version(decompressed_path: &str, listing: &str) -> anyhow::Result<Vec<FileRecord>> {
    request_listing(listing_uri(decompressed_path, listing))
}

/// Fetch listings of the base package and all the given voice packages
///
/// Manifest must have `decompressed_path` set
#[tracing::instrument(level = "debug", skip(data))]
pub fn file_records(data: &VersionData, locales: &[VoiceLocale]) -> anyhow::Result<Vec<FileRecord>> {
    let Some(decompressed_path) = &data.decompressed_path else {
        anyhow::bail!("Manifest has no decompressed package");
    };

    let mut records = pkg_version(decompressed_path, GAME_LISTING)?;

    for locale in locales {
        records.extend(pkg_version(decompressed_path, locale.to_listing())?);
    }

    Ok(records)
}
