use std::collections::HashMap;

use super::*;

enum PendingNode {
    File(FileEntry),
    Directory(PendingDirectory)
}

/// Directory under construction with an index of its children names
#[derive(Default)]
struct PendingDirectory {
    name: String,
    children: Vec<PendingNode>,
    index: HashMap<String, usize>
}

impl PendingDirectory {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Get child directory with given name, creating it if needed
    fn directory(&mut self, name: &str, path: &str) -> Result<&mut PendingDirectory, Error> {
        let index = match self.index.get(name) {
            Some(index) => *index,

            None => {
                self.children.push(PendingNode::Directory(PendingDirectory::new(name)));
                self.index.insert(name.to_string(), self.children.len() - 1);

                self.children.len() - 1
            }
        };

        match &mut self.children[index] {
            PendingNode::Directory(dir) => Ok(dir),

            PendingNode::File(_) => Err(Error::Conflict {
                path: path.to_string()
            })
        }
    }

    fn insert_file(&mut self, entry: FileEntry) -> Result<(), Error> {
        match self.index.get(&entry.name) {
            Some(index) => match &self.children[*index] {
                PendingNode::File(_) => Err(Error::Duplicate {
                    path: entry.data.remote_name
                }),

                PendingNode::Directory(_) => Err(Error::Conflict {
                    path: entry.data.remote_name
                })
            },

            None => {
                self.index.insert(entry.name.clone(), self.children.len());
                self.children.push(PendingNode::File(entry));

                Ok(())
            }
        }
    }

    fn into_node(self) -> FileNode {
        FileNode::Directory(Directory {
            name: self.name,
            size: 0,
            children: self.children.into_iter()
                .map(|child| match child {
                    PendingNode::File(file) => FileNode::File(file),
                    PendingNode::Directory(dir) => dir.into_node()
                })
                .collect()
        })
    }
}

/// Build files tree from the flat list of remote file records
///
/// Directories' sizes are left zeroed and children are kept in insertion
/// order. Use `finalize` to compute sizes and sort the tree
///
/// ```
/// use hoyo_game_files::tree::{build, finalize, FileRecord};
///
/// let mut tree = build([
///     FileRecord { remote_name: "data/a.pck".into(), md5: "aa".into(), hash: None, file_size: 3 },
///     FileRecord { remote_name: "data/b.pck".into(), md5: "bb".into(), hash: None, file_size: 4 }
/// ]).unwrap();
///
/// assert_eq!(finalize(&mut tree), 7);
/// assert_eq!(tree.children().len(), 1);
/// ```
#[tracing::instrument(level = "trace", skip(records))]
pub fn build(records: impl IntoIterator<Item = FileRecord>) -> Result<FileNode, Error> {
    let mut root = PendingDirectory::new(ROOT_NAME);
    let mut total = 0;

    for record in records {
        if record.remote_name.is_empty() {
            return Err(Error::EmptyPath);
        }

        let segments = record.remote_name.split('/').collect::<Vec<_>>();

        if let Some(segment) = segments.iter().find(|segment| matches!(**segment, "" | "." | "..")) {
            return Err(Error::InvalidSegment {
                path: record.remote_name.clone(),
                segment: segment.to_string()
            });
        }

        let (file_name, parents) = match segments.split_last() {
            Some(split) => split,
            None => return Err(Error::EmptyPath)
        };

        let mut dir = &mut root;

        for parent in parents {
            dir = dir.directory(parent, &record.remote_name)?;
        }

        let name = file_name.to_string();

        dir.insert_file(FileEntry {
            name,
            data: FileData::from(record)
        })?;

        total += 1;
    }

    tracing::trace!(files = total, "Files tree built");

    Ok(root.into_node())
}
