use crate::prelude::*;

const CHUNK_DATA: &str = r#"{
    "build_id": "ycMbVSYbDJY1",
    "tag": "5.7.0",
    "manifests": [
        {
            "category_id": "10",
            "category_name": "Game",
            "matching_field": "game",
            "manifest": { "id": "manifest_game", "checksum": "aa", "compressed_size": "2048", "uncompressed_size": "4096" },
            "chunk_download": { "encryption": 0, "password": "", "compression": 1, "url_prefix": "https://cdn.example.com/chunks/game", "url_suffix": "" },
            "manifest_download": { "encryption": 0, "password": "", "compression": 1, "url_prefix": "https://cdn.example.com/manifests", "url_suffix": "" },
            "stats": { "compressed_size": "100", "uncompressed_size": "150", "file_count": "10", "chunk_count": "20" },
            "deduplicated_stats": { "compressed_size": "90", "uncompressed_size": "140", "file_count": "10", "chunk_count": "18" }
        },
        {
            "category_id": "11",
            "category_name": "English(US)",
            "manifest": { "id": "manifest_en", "checksum": "bb", "compressed_size": "1024", "uncompressed_size": "2048" },
            "chunk_download": { "url_prefix": "https://cdn.example.com/chunks/en" },
            "manifest_download": { "url_prefix": "https://cdn.example.com/manifests" },
            "stats": { "compressed_size": "200", "uncompressed_size": "250", "file_count": "5", "chunk_count": "7" }
        }
    ]
}"#;

#[test]
fn summary_totals() -> Result<(), crate::Error> {
    let data = serde_json::from_str::<ChunkData>(CHUNK_DATA).expect("valid chunk data");
    let summary = summarize(&data)?;

    assert_eq!(summary.total_compressed, 300);
    assert_eq!(summary.total_uncompressed, 400);
    assert_eq!(summary.total_files, 15);
    assert_eq!(summary.total_chunks, 27);

    let names = summary.categories.iter()
        .map(|category| category.category_name.as_str())
        .collect::<Vec<_>>();

    assert_eq!(names, ["Game", "English(US)"]);

    // Stats describe the package, not the manifest file
    assert_eq!(summary.categories[0].manifest_compressed_size, 2048);
    assert_eq!(summary.categories[0].stats.compressed_size, 100);

    assert_eq!(data.manifests[0].manifest_url(), "https://cdn.example.com/manifests/manifest_game");

    Ok(())
}

#[test]
fn malformed_stat_kind() {
    let data = serde_json::from_str::<ChunkData>(&CHUNK_DATA.replace(r#""chunk_count": "7""#, r#""chunk_count": "seven""#))
        .expect("valid chunk data");

    let err = crate::Error::from(summarize(&data).unwrap_err());

    assert_eq!(err.kind(), ErrorKind::MalformedStat);
    assert_eq!(err.to_string(), r#"Malformed stat stats.chunk_count of category 11: "seven""#);
}
