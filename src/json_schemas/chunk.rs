use serde::{Deserialize, Serialize};

/// Chunk-based delta catalog
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkData {
    pub build_id: String,
    pub tag: String,
    pub manifests: Vec<ChunkManifest>
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkManifest {
    pub category_id: String,
    pub category_name: String,

    pub manifest: Manifest,
    pub chunk_download: DownloadInfo,
    pub manifest_download: DownloadInfo,
    pub stats: ManifestStats
}

impl ChunkManifest {
    /// URL of the protobuf manifest file
    pub fn manifest_url(&self) -> String {
        format!("{}{}/{}", self.manifest_download.url_prefix, self.manifest_download.url_suffix, self.manifest.id)
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub id: String,
    pub checksum: String,
    pub compressed_size: String,
    pub uncompressed_size: String
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadInfo {
    #[serde(default)]
    pub encryption: u8,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub compression: u8,

    pub url_prefix: String,

    #[serde(default)]
    pub url_suffix: String
}

/// Sizes and counts are decimal strings in the API responses
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestStats {
    pub compressed_size: String,
    pub uncompressed_size: String,
    pub file_count: String,
    pub chunk_count: String
}
