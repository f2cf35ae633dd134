use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::*;

/// Recompute directories sizes and sort their children, recursively
///
/// Directories go before files on every level, names of the same
/// node type are ordered by `compare_names`. Running it more than
/// once changes nothing
///
/// Sizes are added with saturation, so a directory which can't fit
/// `u64` reports `u64::MAX`
///
/// Return size of the given node
pub fn finalize(node: &mut FileNode) -> u64 {
    match node {
        FileNode::File(file) => file.data.file_size,

        FileNode::Directory(dir) => {
            dir.size = dir.children.iter_mut()
                .map(finalize)
                .fold(0, u64::saturating_add);

            dir.children.sort_by(compare_nodes);

            dir.size
        }
    }
}

/// Owned version of `finalize`
#[inline]
pub fn finalized(mut node: FileNode) -> FileNode {
    finalize(&mut node);

    node
}

fn compare_nodes(a: &FileNode, b: &FileNode) -> Ordering {
    b.is_dir().cmp(&a.is_dir())
        .then_with(|| compare_names(a.name(), b.name()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Punctuation,
    Digit,
    Letter
}

impl From<char> for CharClass {
    fn from(c: char) -> Self {
        if c.is_numeric() {
            Self::Digit
        }

        else if c.is_alphabetic() {
            Self::Letter
        }

        else {
            Self::Punctuation
        }
    }
}

/// Base letters: decomposed, lowercased, without accents
fn primary_key(name: &str) -> impl Iterator<Item = (CharClass, char)> + '_ {
    name.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| (CharClass::from(c), c))
}

/// Same as the primary key but with accents kept
fn secondary_key(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfkd().flat_map(char::to_lowercase)
}

/// Lowercase letters go before uppercase ones
fn tertiary_key(name: &str) -> impl Iterator<Item = bool> + '_ {
    name.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}

/// Compare file names the way humans expect them to be ordered
///
/// Names are compared by their base letters first (case and accents
/// are ignored, punctuation goes before digits and digits before letters),
/// then by accents, then by case with lowercase first. Names that are
/// still equal are compared bytewise so the order is always total
pub fn compare_names(a: &str, b: &str) -> Ordering {
    primary_key(a).cmp(primary_key(b))
        .then_with(|| secondary_key(a).cmp(secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(tertiary_key(b)))
        .then_with(|| a.cmp(b))
}
