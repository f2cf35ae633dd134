use serde::{Serialize, Deserialize};

use crate::games::Game;
use crate::tree::{self, FileNode, FileRecord, ROOT_NAME};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Tree(#[from] tree::Error),

    #[error("Directory {0:?} doesn't exist")]
    NotFound(String),

    #[error("{0:?} is not a directory")]
    NotDirectory(String)
}

/// Browsable files tree of the selected game version and voiceovers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileList {
    pub game: Game,
    pub version: String,
    pub voice: Vec<String>,
    pub decompressed_path: Option<String>,

    tree: FileNode,

    /// Always points to an existing directory, `/` is the root
    current_path: String,

    count: u64,
    size: u64
}

fn join_path(parent: &str, name: &str) -> String {
    if parent == ROOT_NAME {
        format!("/{name}")
    }

    else {
        format!("{parent}/{name}")
    }
}

impl FileList {
    /// Build and finalize files tree for the given selection
    ///
    /// Any selection change requires a new list
    #[tracing::instrument(level = "debug", skip(records))]
    pub fn new(
        game: Game,
        version: String,
        voice: Vec<String>,
        decompressed_path: Option<String>,
        records: impl IntoIterator<Item = FileRecord>
    ) -> Result<Self, Error> {
        let mut tree = tree::build(records)?;

        let size = tree::finalize(&mut tree);
        let count = tree.file_count();

        tracing::debug!(count, size, "Files list built");

        Ok(Self {
            game,
            version,
            voice,
            decompressed_path,
            tree,
            current_path: String::from(ROOT_NAME),
            count,
            size
        })
    }

    #[inline]
    pub fn tree(&self) -> &FileNode {
        &self.tree
    }

    /// Total amount of files
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Total size of files
    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Directory at the current path
    pub fn current(&self) -> &FileNode {
        // Only existing directories are stored in `current_path`
        self.tree.find(&self.current_path)
            .unwrap_or(&self.tree)
    }

    /// Change current path to the given one, relative to the root
    pub fn set_path(&mut self, path: &str) -> Result<(), Error> {
        let node = self.tree.find(path)
            .ok_or_else(|| Error::NotFound(path.to_string()))?;

        if !node.is_dir() {
            return Err(Error::NotDirectory(path.to_string()));
        }

        let segments = path.split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>();

        self.current_path = format!("/{}", segments.join("/"));

        Ok(())
    }

    /// Enter child directory of the current one
    pub fn open(&mut self, name: &str) -> Result<(), Error> {
        let path = join_path(&self.current_path, name);

        let is_dir = self.current().children().iter()
            .find(|child| child.name() == name)
            .map(FileNode::is_dir);

        match is_dir {
            Some(true) => {
                self.current_path = path;

                Ok(())
            }

            Some(false) => Err(Error::NotDirectory(path)),
            None => Err(Error::NotFound(path))
        }
    }

    /// Go to the parent directory
    ///
    /// Return `false` if the current directory is the root
    pub fn up(&mut self) -> bool {
        match self.current_path.rfind('/') {
            Some(0) if self.current_path == ROOT_NAME => false,

            Some(0) => {
                self.current_path = String::from(ROOT_NAME);

                true
            }

            Some(index) => {
                self.current_path.truncate(index);

                true
            }

            None => false
        }
    }
}
