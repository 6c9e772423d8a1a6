//! `lexicon` — Module to decode and query the binary DAWG dictionary.
//!
//! The lexicon arrives as a pre-compiled binary blob (the output of an
//! offline dictionary compiler, which is not part of this crate):
//!
//! ```text
//! offset 0:  i32  nodeCount          (little-endian)
//! offset 4:  u32[nodeCount] nodes    (little-endian, packed)
//!   each packed node, LSB first:
//!     bits 0-7:   letter code
//!     bit  8:     end-of-list flag
//!     bit  9:     end-of-word flag
//!     bits 10-31: child index (0 means "no children")
//! ```
//!
//! Index 0 is a reserved sentinel and never a real letter. The compiler
//! places the root-level node for letter `c` at the fixed offset
//! `(c - 'A') + 1`, so root lookup is an offset computation rather than a
//! search. [`LexiconGraph::from_bytes`] verifies that convention (and that
//! every child pointer stays inside the table) at load time, so a blob
//! produced by an incompatible encoder fails loudly instead of silently
//! returning wrong results.
//!
//! The public API provides:
//! - `from_bytes(...)` — decode an in-memory blob; works everywhere.
//! - `load_from_path(...)` — convenience method to read from a file path.
//!
//! After loading, a `LexiconGraph` is immutable. It can safely back any
//! number of concurrent independent searches.

use std::path::Path;

use log::debug;

use crate::errors::LexiconError;

const LETTER_MASK: u32 = 0x0000_00FF;
const END_OF_LIST_MASK: u32 = 0x0000_0100;
const END_OF_WORD_MASK: u32 = 0x0000_0200;
const CHILD_INDEX_SHIFT: u32 = 10;

/// Number of root slots reserved directly after the sentinel.
const ROOT_SLOTS: usize = 26;

/// An immutable table of packed DAWG nodes plus the queries the search
/// engine needs: letter, end-of-word, first child, next sibling.
#[derive(Debug, Clone)]
pub struct LexiconGraph {
    /// Packed nodes, index 0 reserved as sentinel.
    nodes: Vec<u32>,
}

impl LexiconGraph {
    /// Decode a lexicon from raw bytes.
    ///
    /// Parses the 4-byte little-endian node count, then that many packed
    /// 4-byte nodes. Trailing bytes beyond the declared table are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`LexiconError`] if the header is truncated, the declared
    /// node count is zero or negative, the payload holds fewer nodes than
    /// declared, a root slot carries the wrong letter, or a child index
    /// points past the table.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LexiconError> {
        let Some(header) = bytes.get(..4) else {
            return Err(LexiconError::TruncatedHeader { len: bytes.len() });
        };
        // 4-byte slice into a 4-byte array cannot fail
        let count = i32::from_le_bytes(header.try_into().expect("header is 4 bytes"));
        if count <= 0 {
            return Err(LexiconError::InvalidNodeCount { count });
        }

        let declared = count as usize;
        let payload = &bytes[4..];
        if payload.len() < declared * 4 {
            return Err(LexiconError::TruncatedNodeTable {
                declared,
                actual: payload.len() / 4,
            });
        }

        let nodes: Vec<u32> = payload
            .chunks_exact(4)
            .take(declared)
            .map(|chunk| u32::from_le_bytes(chunk.try_into().expect("chunk is 4 bytes")))
            .collect();

        let graph = Self { nodes };
        graph.validate()?;

        debug!("decoded lexicon: {} nodes", graph.node_count());
        Ok(graph)
    }

    /// Convenience method: read the blob from a file path and decode it.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Io`] if the file cannot be read, or any
    /// decoding error from [`Self::from_bytes`].
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let path_ref = path.as_ref();

        let data = std::fs::read(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read lexicon from '{}': {}", path_ref.display(), e),
            )
        })?;

        Self::from_bytes(&data)
    }

    /// Check the fixed root layout and child-pointer bounds.
    fn validate(&self) -> Result<(), LexiconError> {
        for i in 0..ROOT_SLOTS {
            let index = i + 1;
            if index >= self.nodes.len() {
                // A tiny table simply has no roots for the remaining letters;
                // those starting letters yield no words.
                break;
            }
            let expected = (b'A' + i as u8) as char;
            let found = self.letter_at(index);
            if found != expected {
                return Err(LexiconError::RootLetterMismatch { index, expected, found });
            }
        }

        for (node, &word) in self.nodes.iter().enumerate() {
            let child = (word >> CHILD_INDEX_SHIFT) as usize;
            if child >= self.nodes.len() {
                return Err(LexiconError::ChildIndexOutOfRange {
                    node,
                    child,
                    len: self.nodes.len(),
                });
            }
        }

        Ok(())
    }

    /// Total number of nodes in the table, sentinel included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Index of the root-level node for `letter` — a pure offset
    /// computation relying on the fixed root layout, not a search.
    ///
    /// The returned index may lie past the end of a very small table; the
    /// caller treats that as "no words start with this letter".
    #[must_use]
    pub fn root_index_for(letter: char) -> usize {
        debug_assert!(letter.is_ascii_uppercase(), "root lookup requires A-Z, got '{letter}'");
        (letter as u8 - b'A') as usize + 1
    }

    /// The letter this node represents.
    #[must_use]
    pub fn letter_at(&self, index: usize) -> char {
        (self.nodes[index] & LETTER_MASK) as u8 as char
    }

    /// True if the prefix ending at this node is a complete word.
    #[must_use]
    pub fn is_end_of_word(&self, index: usize) -> bool {
        self.nodes[index] & END_OF_WORD_MASK != 0
    }

    fn is_end_of_list(&self, index: usize) -> bool {
        self.nodes[index] & END_OF_LIST_MASK != 0
    }

    /// Index of this node's first child, or 0 meaning "no children".
    #[must_use]
    pub fn first_child(&self, index: usize) -> usize {
        (self.nodes[index] >> CHILD_INDEX_SHIFT) as usize
    }

    /// The next node in this node's sibling list, or `None` at the end of
    /// the list. The table edge counts as end-of-list so a truncated
    /// sibling chain cannot walk out of bounds.
    #[must_use]
    pub fn next_sibling(&self, index: usize) -> Option<usize> {
        if self.is_end_of_list(index) || index + 1 >= self.nodes.len() {
            None
        } else {
            Some(index + 1)
        }
    }

    /// Walk `parent`'s child sibling chain looking for `letter`.
    ///
    /// This is the single prefix-extension primitive the search engine
    /// uses; every pruning decision reduces to this lookup failing.
    #[must_use]
    pub fn find_child_with_letter(&self, parent: usize, letter: char) -> Option<usize> {
        let mut index = self.first_child(parent);
        while index != 0 {
            if self.letter_at(index) == letter {
                return Some(index);
            }
            match self.next_sibling(index) {
                Some(next) => index = next,
                None => break,
            }
        }
        None
    }
}
