use crate::tree::FileRecord;

/// Name of the base package files listing
pub const GAME_LISTING: &str = "pkg_version";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse pkg_version line {line}: {source}")]
    Parse {
        line: usize,

        #[source]
        source: serde_json::Error
    }
}

impl Error {
    /// 1-based number of the malformed line
    #[inline]
    pub fn line(&self) -> usize {
        match self {
            Self::Parse { line, .. } => *line
        }
    }
}

/// Parse `pkg_version` listing
///
/// Every non-empty line is a JSON object with `remoteName`, `md5`,
/// `fileSize` and optional `hash` fields
pub fn parse(listing: &str) -> Result<Vec<FileRecord>, Error> {
    let mut records = Vec::new();

    for (i, line) in listing.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        let record = serde_json::from_str::<FileRecord>(line)
            .map_err(|source| Error::Parse {
                line: i + 1,
                source
            })?;

        records.push(record);
    }

    tracing::trace!(records = records.len(), "pkg_version parsed");

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"{"remoteName": "GenshinImpact.exe", "md5": "4b3ba56a9d5a4a0c2f8b8e1d3cd07b5e", "fileSize": 132768}
{"remoteName": "GenshinImpact_Data/Persistent/base_res_version_hash", "md5": "11", "hash": "a1b2c3", "fileSize": 32}

{"remoteName": "GenshinImpact_Data/StreamingAssets/AudioAssets/banks0.pck", "md5": "22", "fileSize": 1024}
"#;

    #[test]
    fn parse_listing() -> Result<(), Error> {
        let records = parse(LISTING)?;

        assert_eq!(records.len(), 3);
        assert_eq!(records[1].hash.as_deref(), Some("a1b2c3"));
        assert_eq!(records[2].remote_name, "GenshinImpact_Data/StreamingAssets/AudioAssets/banks0.pck");

        Ok(())
    }

    #[test]
    fn malformed_line() {
        let listing = format!("{LISTING}{{\"remoteName\": \"broken\"}}\n");

        let error = parse(&listing).unwrap_err();

        assert_eq!(error.line(), 5);
    }

    #[test]
    fn empty_listing() -> Result<(), Error> {
        assert!(parse("")?.is_empty());
        assert!(parse("\n  \n")?.is_empty());

        Ok(())
    }
}
