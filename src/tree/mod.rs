use serde::{Serialize, Deserialize};

use crate::json_schemas::versions::FileInfo;
use crate::prettify_bytes::prettify_bytes;

pub mod builder;
pub mod sort;

pub use builder::build;
pub use sort::{finalize, finalized, compare_names};

/// Name of the tree root node
pub const ROOT_NAME: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    #[error("Remote file path is empty")]
    EmptyPath,

    #[error("Remote file path {path:?} has invalid segment {segment:?}")]
    InvalidSegment {
        path: String,
        segment: String
    },

    /// File is expected where a directory exists or vice versa
    #[error("Remote file path {path:?} conflicts with another file or directory")]
    Conflict {
        path: String
    },

    #[error("Remote file path {path:?} is listed more than once")]
    Duplicate {
        path: String
    }
}

impl Error {
    /// Remote path this error was caused by
    pub fn path(&self) -> &str {
        match self {
            Self::EmptyPath => "",

            Self::InvalidSegment { path, .. } |
            Self::Conflict { path } |
            Self::Duplicate { path } => path
        }
    }
}

/// Remote file record, the same format `pkg_version` files use
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub remote_name: String,
    pub md5: String,

    /// Alternative digest, e.g. xxhash of chunked assets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    pub file_size: u64
}

impl FileRecord {
    pub fn digest(&self) -> Digest {
        match &self.hash {
            Some(hash) => Digest::Md5AndAlt(self.md5.clone(), hash.clone()),
            None => Digest::Md5Only(self.md5.clone())
        }
    }
}

impl From<&FileInfo> for FileRecord {
    fn from(info: &FileInfo) -> Self {
        let remote_name = if info.name.is_empty() {
            info.url_file_name().unwrap_or_default().to_string()
        }

        else {
            info.name.clone()
        };

        Self {
            remote_name,
            md5: info.checksum.clone(),
            hash: None,
            file_size: info.size
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Digest {
    Md5Only(String),
    Md5AndAlt(String, String)
}

impl Digest {
    #[inline]
    pub fn md5(&self) -> &str {
        match self {
            Self::Md5Only(md5) |
            Self::Md5AndAlt(md5, _) => md5
        }
    }

    #[inline]
    pub fn alt(&self) -> Option<&str> {
        match self {
            Self::Md5Only(_) => None,
            Self::Md5AndAlt(_, alt) => Some(alt)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileData {
    /// Full original path of the file
    pub remote_name: String,
    pub digest: Digest,
    pub file_size: u64
}

impl From<FileRecord> for FileData {
    fn from(record: FileRecord) -> Self {
        Self {
            digest: record.digest(),
            remote_name: record.remote_name,
            file_size: record.file_size
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub data: FileData
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Directory {
    pub name: String,

    /// Sum of all the nested files sizes
    ///
    /// Computed by `finalize`, zero until then
    pub size: u64,

    pub children: Vec<FileNode>
}

impl Directory {
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: 0,
            children: Vec::new()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileNode {
    File(FileEntry),
    Directory(Directory)
}

impl FileNode {
    /// Empty root directory
    #[inline]
    pub fn root() -> Self {
        Self::Directory(Directory::new(ROOT_NAME))
    }

    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Self::File(file) => &file.name,
            Self::Directory(dir) => &dir.name
        }
    }

    #[inline]
    pub fn size(&self) -> u64 {
        match self {
            Self::File(file) => file.data.file_size,
            Self::Directory(dir) => dir.size
        }
    }

    #[inline]
    pub fn display_size(&self) -> String {
        prettify_bytes(self.size())
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    /// Empty for files
    #[inline]
    pub fn children(&self) -> &[FileNode] {
        match self {
            Self::File(_) => &[],
            Self::Directory(dir) => &dir.children
        }
    }

    #[inline]
    pub fn file_data(&self) -> Option<&FileData> {
        match self {
            Self::File(file) => Some(&file.data),
            Self::Directory(_) => None
        }
    }

    /// Amount of files in this node, recursively
    pub fn file_count(&self) -> u64 {
        match self {
            Self::File(_) => 1,
            Self::Directory(dir) => dir.children.iter()
                .map(FileNode::file_count)
                .sum()
        }
    }

    /// Find nested node by slash-separated path relative to this node
    ///
    /// Empty path and `/` return the node itself
    pub fn find(&self, path: &str) -> Option<&FileNode> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |node, segment| {
                node.children().iter().find(|child| child.name() == segment)
            })
    }
}
