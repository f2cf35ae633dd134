pub mod consts;
pub mod version;
pub mod games;
pub mod voice_data;
pub mod json_schemas;
pub mod prettify_bytes;
pub mod tree;
pub mod resolver;
pub mod chunk;
pub mod pkg_version;
pub mod file_list;
pub mod error;

#[cfg(feature = "fetch")]
pub mod api;

#[cfg(test)]
mod tests;

pub use error::{Error, ErrorKind};

pub mod prelude {
    pub use super::consts::*;
    pub use super::version::Version;
    pub use super::games::Game;
    pub use super::voice_data::prelude::*;
    pub use super::json_schemas::versions::*;
    pub use super::json_schemas::chunk::ChunkData;
    pub use super::prettify_bytes::prettify_bytes;
    pub use super::tree::{FileNode, FileRecord, FileData, Digest, build, finalize, finalized};
    pub use super::resolver::{resolve, resolve_labeled, PackageKind, LabeledFileInfo};
    pub use super::chunk::{summarize, ChunkSummary, CategorySummary};
    pub use super::file_list::FileList;
    pub use super::error::{Error, ErrorKind};

    #[cfg(feature = "fetch")]
    pub use super::api;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

lazy_static::lazy_static! {
    /// Timeout of the API requests in seconds
    ///
    /// Can be changed by the `HOYO_GAME_FILES_REQUESTS_TIMEOUT` variable
    pub static ref REQUESTS_TIMEOUT: u64 = std::env::var(consts::REQUESTS_TIMEOUT_ENV).ok()
        .and_then(|timeout| timeout.parse().ok())
        .unwrap_or(consts::DEFAULT_REQUESTS_TIMEOUT);
}
