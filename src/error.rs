use serde::{Serialize, Deserialize};

use crate::{chunk, file_list, pkg_version, resolver, tree};

/// Kind of the error, used to pick a message for users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidPath,
    UnknownVersion,
    UnsupportedChainLength,
    Downgrade,
    MalformedStat,
    MalformedListing
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Tree(#[from] tree::Error),

    #[error(transparent)]
    Resolver(#[from] resolver::Error),

    #[error(transparent)]
    Chunk(#[from] chunk::Error),

    #[error(transparent)]
    Listing(#[from] pkg_version::Error),

    #[error(transparent)]
    FileList(#[from] file_list::Error)
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Tree(_) => ErrorKind::InvalidPath,

            Self::Resolver(err) => match err {
                resolver::Error::UnknownVersion(_) |
                resolver::Error::InvalidVersion { .. } |
                resolver::Error::DuplicateVersion { .. } => ErrorKind::UnknownVersion,

                resolver::Error::UnsupportedChainLength { .. } => ErrorKind::UnsupportedChainLength,
                resolver::Error::Downgrade { .. } => ErrorKind::Downgrade
            },

            Self::Chunk(chunk::Error::MalformedStat { .. }) => ErrorKind::MalformedStat,
            Self::Listing(_) => ErrorKind::MalformedListing,

            // Browsing errors are about the path as well
            Self::FileList(_) => ErrorKind::InvalidPath
        }
    }
}
