use serde::{Serialize, Deserialize};

use crate::games::Game;
use crate::json_schemas::versions::ChunkInfo;

pub const API_BASE_ENV: &str = "HOYO_GAME_FILES_API_BASE";
pub const API_BASE_FALLBACK_ENV: &str = "HOYO_GAME_FILES_API_BASE_FALLBACK";
pub const REQUESTS_TIMEOUT_ENV: &str = "HOYO_GAME_FILES_REQUESTS_TIMEOUT";

pub const DEFAULT_API_BASE: &str = ".";

/// Seconds
pub const DEFAULT_REQUESTS_TIMEOUT: u64 = 8;

/// Files API location
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base: String,

    /// Used when requests to the `base` fail
    pub fallback: Option<String>
}

impl Default for ApiConfig {
    #[inline]
    fn default() -> Self {
        Self {
            base: String::from(DEFAULT_API_BASE),
            fallback: None
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl ApiConfig {
    /// Read config from `HOYO_GAME_FILES_API_BASE` and
    /// `HOYO_GAME_FILES_API_BASE_FALLBACK` variables
    ///
    /// Empty values are treated as unset
    pub fn from_env() -> Self {
        Self {
            base: non_empty_var(API_BASE_ENV).unwrap_or_else(|| String::from(DEFAULT_API_BASE)),
            fallback: non_empty_var(API_BASE_FALLBACK_ENV)
        }
    }

    /// API bases in order they should be tried
    pub fn bases(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.base.as_str())
            .chain(self.fallback.as_deref())
    }

    /// `{base}/{game}/{version}.json`
    #[inline]
    pub fn version_data_uri(base: &str, game: Game, version: &str) -> String {
        format!("{}/{}/{version}.json", base.trim_end_matches('/'), game.key())
    }

    /// `{base}/{game}/chunk/{tag}.json`
    #[inline]
    pub fn chunk_data_uri(base: &str, game: Game, chunk: &ChunkInfo) -> String {
        format!("{}/{}/chunk/{}.json", base.trim_end_matches('/'), game.key(), chunk.tag)
    }
}

/// `{decompressed_path}/{listing}`
#[inline]
pub fn listing_uri(decompressed_path: &str, listing: &str) -> String {
    format!("{}/{listing}", decompressed_path.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uris() {
        assert_eq!(
            ApiConfig::version_data_uri("https://example.com/api/", Game::Genshin, "5.7.0"),
            "https://example.com/api/hk4e/5.7.0.json"
        );

        let chunk = ChunkInfo {
            branch: String::from("main"),
            package_id: String::from("id"),
            password: String::from("pass"),
            tag: String::from("5.7.0")
        };

        assert_eq!(
            ApiConfig::chunk_data_uri(".", Game::Zzz, &chunk),
            "./nap/chunk/5.7.0.json"
        );

        assert_eq!(
            listing_uri("https://cdn.example.com/unpacked/", "pkg_version"),
            "https://cdn.example.com/unpacked/pkg_version"
        );
    }

    #[test]
    fn bases_order() {
        let config = ApiConfig {
            base: String::from("primary"),
            fallback: Some(String::from("fallback"))
        };

        assert_eq!(config.bases().collect::<Vec<_>>(), ["primary", "fallback"]);
        assert_eq!(ApiConfig::default().bases().collect::<Vec<_>>(), ["."]);
    }
}
