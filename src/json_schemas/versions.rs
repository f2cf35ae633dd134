use std::collections::BTreeMap;

use serde::{Serialize, Deserialize};

/// Single downloadable package
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    pub url: String,

    /// Hex md5 of the package
    pub checksum: String,

    pub size: u64
}

impl FileInfo {
    /// Name of the file from its downloading URL
    ///
    /// - `https://example.com/game.zip` -> `game.zip`
    /// - `https://example.com/` -> `None`
    pub fn url_file_name(&self) -> Option<&str> {
        self.url.rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
    }
}

/// Version line manifest
///
/// Describes base and voice packages of the newest version on the line
/// and incremental updates leading to it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionData {
    pub game: GamePackages,

    #[serde(default)]
    pub voice: BTreeMap<String, FileInfo>,

    /// Map of `version -> update from this version to the next one`
    ///
    /// Iteration order means nothing here, versions must be parsed
    #[serde(default)]
    pub update: BTreeMap<String, UpdatePackages>,

    /// Set when the base package is already decompressed on the server
    #[serde(default)]
    pub decompressed_path: Option<String>,

    #[serde(default)]
    pub chunk: Option<ChunkInfo>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GamePackages {
    #[serde(default)]
    pub full: Option<FileInfo>,

    #[serde(default)]
    pub segments: Vec<FileInfo>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdatePackages {
    pub game: FileInfo,

    #[serde(default)]
    pub voice: BTreeMap<String, FileInfo>
}

/// Pointer to the chunk-based delta catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkInfo {
    pub branch: String,
    pub package_id: String,
    pub password: String,
    pub tag: String
}

/// Base package representation picked from the manifest
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base {
    Full(FileInfo),
    Segmented(Vec<FileInfo>)
}

impl Base {
    pub fn files(&self) -> &[FileInfo] {
        match self {
            Self::Full(file) => std::slice::from_ref(file),
            Self::Segmented(segments) => segments
        }
    }

    /// Sum of all the package sizes, saturated at `u64::MAX`
    pub fn size(&self) -> u64 {
        self.files().iter()
            .map(|file| file.size)
            .fold(0, u64::saturating_add)
    }
}

impl VersionData {
    /// Get base package representation
    ///
    /// `full` is used only when the package isn't pre-decompressed
    /// on the server, otherwise `segments` are used even if `full` exists
    pub fn base(&self) -> Base {
        match (&self.decompressed_path, &self.game.full) {
            (None, Some(full)) => Base::Full(full.clone()),
            _ => Base::Segmented(self.game.segments.clone())
        }
    }

    /// Whether downloaded base package should be decompressed after downloading
    #[inline]
    pub fn needs_decompression(&self) -> bool {
        self.decompressed_path.is_none()
    }
}
