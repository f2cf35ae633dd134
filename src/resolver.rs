use serde::{Serialize, Deserialize};

use crate::json_schemas::versions::{Base, FileInfo, VersionData};
use crate::version::{self, Version};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    /// Version is not listed in the manifest or can't be parsed
    #[error("Unknown version: {0}")]
    UnknownVersion(String),

    /// Manifest lists an update for the version which can't be parsed
    #[error("Manifest has invalid update version {version}: {error}")]
    InvalidVersion {
        version: String,
        error: version::Error
    },

    /// Update packages can't be stitched together so only
    /// updates to the next version are supported
    #[error("Unsupported update chain: {from} -> {to} requires {hops} updates")]
    UnsupportedChainLength {
        from: String,
        to: String,
        hops: usize
    },

    /// Manifest lists two updates for the same version, e.g. `1.0` and `1.0.0`
    #[error("Manifest lists update {version} more than once (as {other})")]
    DuplicateVersion {
        version: String,
        other: String
    },

    #[error("Can't update from {from} to the older version {to}")]
    Downgrade {
        from: String,
        to: String
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackageKind {
    /// Complete base package
    Full,

    /// Part of the base package, counting from 1
    Segment(usize),

    /// Full voice package of the given language
    Voice(String),

    /// Game update package
    UpdateGame,

    /// Voice update package of the given language
    UpdateVoice(String)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabeledFileInfo {
    pub kind: PackageKind,
    pub info: FileInfo
}

/// Versions chain of the manifest, from the oldest update to the head
struct Chain {
    versions: Vec<(Version, String)>,

    /// Version described by the base and voice packages
    head: Option<Version>
}

impl Chain {
    fn new(data: &VersionData, target: Version, target_str: &str) -> Result<Self, Error> {
        let mut versions = Vec::with_capacity(data.update.len() + 1);

        for key in data.update.keys() {
            match key.parse::<Version>() {
                Ok(version) => versions.push((version, key.clone())),

                Err(error) => return Err(Error::InvalidVersion {
                    version: key.clone(),
                    error
                })
            }
        }

        versions.sort_by_key(|(version, _)| *version);

        if let Some(pair) = versions.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(Error::DuplicateVersion {
                version: pair[0].1.clone(),
                other: pair[1].1.clone()
            });
        }

        let mut head = None;

        // Manifest describes the version next to its newest update
        if versions.last().map(|(latest, _)| target > *latest).unwrap_or(true) {
            versions.push((target, target_str.to_string()));

            head = Some(target);
        }

        Ok(Self { versions, head })
    }

    #[inline]
    fn position(&self, version: Version) -> Option<usize> {
        self.versions.iter()
            .position(|(chain_version, _)| *chain_version == version)
    }

    #[inline]
    fn update_key(&self, index: usize) -> &str {
        &self.versions[index].1
    }
}

fn parse_version(version: &str) -> Result<Version, Error> {
    version.parse()
        .map_err(|_| Error::UnknownVersion(version.to_string()))
}

/// Push voice packages of requested languages
///
/// Languages without packages are skipped, it means the game
/// has no voiceover for them
fn push_voices<'a>(
    result: &mut Vec<LabeledFileInfo>,
    packages: &std::collections::BTreeMap<String, FileInfo>,
    languages: impl IntoIterator<Item = &'a str>,
    kind: impl Fn(String) -> PackageKind
) {
    let mut seen = Vec::new();

    for language in languages {
        if seen.contains(&language) {
            continue;
        }

        seen.push(language);

        match packages.get(language) {
            Some(info) => result.push(LabeledFileInfo {
                kind: kind(language.to_string()),
                info: info.clone()
            }),

            None => tracing::trace!(language, "No voice package available")
        }
    }
}

/// Resolve list of packages needed to get `target` version of the game
/// with the given voiceover languages
///
/// - `from = None` means fresh installation of the newest version
///   described by the manifest
/// - `from = Some(target)` means the game is already up to date
/// - otherwise a single update from `from` to `target` is resolved.
///   Update packages can't be combined, so longer chains are rejected
///
/// The manifest doesn't name the version it describes, so `target` must be
/// the version the manifest was fetched for. Any target newer than every
/// listed update is taken as that version: its base and voice packages
/// are returned for fresh installations, and the newest update leads to it
#[tracing::instrument(level = "debug", skip(data, languages), ret, err)]
pub fn resolve_labeled<'a>(
    data: &VersionData,
    target: &str,
    from: Option<&str>,
    languages: impl IntoIterator<Item = &'a str>
) -> Result<Vec<LabeledFileInfo>, Error> {
    let target_version = parse_version(target)?;
    let chain = Chain::new(data, target_version, target)?;

    let Some(target_index) = chain.position(target_version) else {
        return Err(Error::UnknownVersion(target.to_string()));
    };

    let mut result = Vec::new();

    match from {
        None => {
            if chain.head != Some(target_version) {
                return Err(Error::UnknownVersion(target.to_string()));
            }

            match data.base() {
                Base::Full(full) => {
                    tracing::debug!("Using full base package");

                    result.push(LabeledFileInfo {
                        kind: PackageKind::Full,
                        info: full
                    });
                }

                Base::Segmented(segments) => {
                    tracing::debug!(segments = segments.len(), "Using segmented base package");

                    result.extend(segments.into_iter().enumerate().map(|(i, info)| LabeledFileInfo {
                        kind: PackageKind::Segment(i + 1),
                        info
                    }));
                }
            }

            push_voices(&mut result, &data.voice, languages, PackageKind::Voice);
        }

        Some(from) => {
            let from_version = parse_version(from)?;

            if from_version == target_version {
                return Ok(result);
            }

            let Some(from_index) = chain.position(from_version) else {
                return Err(Error::UnknownVersion(from.to_string()));
            };

            if target_index < from_index {
                return Err(Error::Downgrade {
                    from: from.to_string(),
                    to: target.to_string()
                });
            }

            let hops = target_index - from_index;

            if hops > 1 {
                return Err(Error::UnsupportedChainLength {
                    from: from.to_string(),
                    to: target.to_string(),
                    hops
                });
            }

            // Only update keys are followed by another chain entry
            let update = &data.update[chain.update_key(from_index)];

            result.push(LabeledFileInfo {
                kind: PackageKind::UpdateGame,
                info: update.game.clone()
            });

            push_voices(&mut result, &update.voice, languages, PackageKind::UpdateVoice);
        }
    }

    Ok(result)
}

/// Same as `resolve_labeled` but without packages kinds
///
/// ```
/// use hoyo_game_files::json_schemas::versions::VersionData;
/// use hoyo_game_files::resolver::resolve;
///
/// let data: VersionData = serde_json::from_str(r#"{
///     "game": { "full": { "name": "game.zip", "url": "https://example.com/game.zip", "checksum": "aa", "size": 1 } },
///     "voice": { "en-us": { "name": "en.zip", "url": "https://example.com/en.zip", "checksum": "bb", "size": 2 } }
/// }"#).unwrap();
///
/// let files = resolve(&data, "5.7.0", None, ["en-us", "ja-jp"]).unwrap();
///
/// assert_eq!(files.len(), 2);
/// ```
pub fn resolve<'a>(
    data: &VersionData,
    target: &str,
    from: Option<&str>,
    languages: impl IntoIterator<Item = &'a str>
) -> Result<Vec<FileInfo>, Error> {
    Ok(resolve_labeled(data, target, from, languages)?
        .into_iter()
        .map(|file| file.info)
        .collect())
}
