use serde::{Serialize, Deserialize};

use crate::json_schemas::chunk::{ChunkData, ChunkManifest, ManifestStats};
use crate::prettify_bytes::prettify_bytes;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    /// Chunk statistic is not an unsigned decimal number
    /// or the total can't fit `u64`
    #[error("Malformed stat {field} of category {category}: {value:?}")]
    MalformedStat {
        category: String,
        field: String,
        value: String
    }
}

/// Parsed chunk statistics
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkStats {
    pub compressed_size: u64,
    pub uncompressed_size: u64,
    pub file_count: u64,
    pub chunk_count: u64
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category_id: String,
    pub category_name: String,

    pub manifest_id: String,
    pub manifest_checksum: String,
    pub manifest_compressed_size: u64,
    pub manifest_uncompressed_size: u64,

    pub chunk_url_prefix: String,
    pub manifest_url_prefix: String,

    pub stats: ChunkStats
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkSummary {
    pub total_compressed: u64,
    pub total_uncompressed: u64,
    pub total_files: u64,
    pub total_chunks: u64,

    pub categories: Vec<CategorySummary>
}

impl std::fmt::Display for ChunkSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} categories, {} files in {} chunks, {} to download ({} unpacked)",
            self.categories.len(),
            self.total_files,
            self.total_chunks,
            prettify_bytes(self.total_compressed),
            prettify_bytes(self.total_uncompressed)
        )
    }
}

fn parse_stat(category: &ChunkManifest, field: &'static str, value: &str) -> Result<u64, Error> {
    value.trim().parse::<u64>().map_err(|_| Error::MalformedStat {
        category: category.category_id.clone(),
        field: field.to_string(),
        value: value.to_string()
    })
}

fn parse_stats(category: &ChunkManifest, stats: &ManifestStats) -> Result<ChunkStats, Error> {
    Ok(ChunkStats {
        compressed_size: parse_stat(category, "stats.compressed_size", &stats.compressed_size)?,
        uncompressed_size: parse_stat(category, "stats.uncompressed_size", &stats.uncompressed_size)?,
        file_count: parse_stat(category, "stats.file_count", &stats.file_count)?,
        chunk_count: parse_stat(category, "stats.chunk_count", &stats.chunk_count)?
    })
}

fn add(total: u64, value: u64, category: &ChunkManifest, field: &'static str) -> Result<u64, Error> {
    total.checked_add(value).ok_or_else(|| Error::MalformedStat {
        category: category.category_id.clone(),
        field: field.to_string(),
        value: value.to_string()
    })
}

/// Summarize chunk catalog statistics
///
/// Stats of every category are parsed and summed. Manifest sizes
/// are parsed for display only and not included in totals
#[tracing::instrument(level = "debug", skip(chunk), fields(build_id = %chunk.build_id, tag = %chunk.tag), err)]
pub fn summarize(chunk: &ChunkData) -> Result<ChunkSummary, Error> {
    let mut summary = ChunkSummary::default();

    for category in &chunk.manifests {
        let stats = parse_stats(category, &category.stats)?;

        summary.total_compressed = add(summary.total_compressed, stats.compressed_size, category, "stats.compressed_size")?;
        summary.total_uncompressed = add(summary.total_uncompressed, stats.uncompressed_size, category, "stats.uncompressed_size")?;
        summary.total_files = add(summary.total_files, stats.file_count, category, "stats.file_count")?;
        summary.total_chunks = add(summary.total_chunks, stats.chunk_count, category, "stats.chunk_count")?;

        summary.categories.push(CategorySummary {
            category_id: category.category_id.clone(),
            category_name: category.category_name.clone(),

            manifest_id: category.manifest.id.clone(),
            manifest_checksum: category.manifest.checksum.clone(),
            manifest_compressed_size: parse_stat(category, "manifest.compressed_size", &category.manifest.compressed_size)?,
            manifest_uncompressed_size: parse_stat(category, "manifest.uncompressed_size", &category.manifest.uncompressed_size)?,

            chunk_url_prefix: category.chunk_download.url_prefix.clone(),
            manifest_url_prefix: category.manifest_download.url_prefix.clone(),

            stats
        });
    }

    tracing::debug!(categories = summary.categories.len(), "Chunk catalog summarized");

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, compressed: &str, files: &str) -> String {
        format!(r#"{{
            "category_id": "{id}",
            "category_name": "category {id}",
            "manifest": {{ "id": "manifest_{id}", "checksum": "ff", "compressed_size": "10", "uncompressed_size": "20" }},
            "chunk_download": {{ "url_prefix": "https://cdn.example.com/chunks" }},
            "manifest_download": {{ "url_prefix": "https://cdn.example.com/manifests" }},
            "stats": {{ "compressed_size": "{compressed}", "uncompressed_size": "1000", "file_count": "{files}", "chunk_count": "7" }}
        }}"#)
    }

    fn chunk_data(categories: &[String]) -> ChunkData {
        let json = format!(r#"{{ "build_id": "build", "tag": "5.7.0", "manifests": [{}] }}"#, categories.join(","));

        serde_json::from_str(&json).expect("valid chunk data")
    }

    #[test]
    fn totals() -> Result<(), Error> {
        let data = chunk_data(&[category("1", "100", "3"), category("2", "200", "4")]);
        let summary = summarize(&data)?;

        assert_eq!(summary.total_compressed, 300);
        assert_eq!(summary.total_uncompressed, 2000);
        assert_eq!(summary.total_files, 7);
        assert_eq!(summary.total_chunks, 14);

        assert_eq!(summary.categories.len(), 2);
        assert_eq!(summary.categories[1].category_name, "category 2");
        assert_eq!(summary.categories[1].stats.compressed_size, 200);
        assert_eq!(summary.categories[1].manifest_uncompressed_size, 20);
        assert_eq!(summary.categories[0].chunk_url_prefix, "https://cdn.example.com/chunks");

        Ok(())
    }

    #[test]
    fn empty_catalog() -> Result<(), Error> {
        assert_eq!(summarize(&chunk_data(&[]))?, ChunkSummary::default());

        Ok(())
    }

    #[test]
    fn malformed_stat() {
        let data = chunk_data(&[category("1", "100", "3"), category("2", "12a", "4")]);

        assert_eq!(summarize(&data), Err(Error::MalformedStat {
            category: String::from("2"),
            field: String::from("stats.compressed_size"),
            value: String::from("12a")
        }));

        let data = chunk_data(&[category("1", "100", "-3")]);

        assert!(matches!(
            summarize(&data),
            Err(Error::MalformedStat { field, .. }) if field == "stats.file_count"
        ));
    }

    #[test]
    fn overflow() {
        let data = chunk_data(&[
            category("1", &u64::MAX.to_string(), "1"),
            category("2", "1", "1")
        ]);

        assert!(matches!(summarize(&data), Err(Error::MalformedStat { .. })));
    }

    #[test]
    fn input_is_not_changed() -> Result<(), Error> {
        let data = chunk_data(&[category("1", "100", "3")]);
        let copy = data.clone();

        summarize(&data)?;

        assert_eq!(data, copy);

        Ok(())
    }

    #[test]
    fn manifest_url() {
        let data = chunk_data(&[category("1", "100", "3")]);

        assert_eq!(data.manifests[0].manifest_url(), "https://cdn.example.com/manifests/manifest_1");
        assert_eq!(data.manifests[0].chunk_download.compression, 0);
    }

    #[test]
    fn display() -> Result<(), Error> {
        let summary = summarize(&chunk_data(&[category("1", "1536", "3")]))?;

        assert_eq!(summary.to_string(), "1 categories, 3 files in 7 chunks, 1.50 KB to download (1000.00 B unpacked)");

        Ok(())
    }
}
