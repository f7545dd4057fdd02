//! Comparisons between cursors.
//!
//! Cursors compare by their full buffers. The position is ignored.

use std::cmp::Ordering;

use crate::io::Cursor;

impl Cursor {
    /// Lexicographically compares the full buffers of both cursors.
    #[inline]
    pub fn compare(&self, other: &Cursor) -> Ordering {
        self.get_ref().cmp(other.get_ref())
    }

    /// Returns whether both buffers are identical.
    #[inline]
    pub fn equal(&self, other: &Cursor) -> bool {
        self.get_ref() == other.get_ref()
    }

    /// Returns whether both buffers are equal, ignoring case.
    ///
    /// Buffers are equal if they match byte for byte when ignoring ASCII
    /// case. Otherwise, if both are valid UTF-8, they're equal if their
    /// lowercase forms (per [`char::to_lowercase`]) match. Buffers that aren't
    /// UTF-8 only get the ASCII comparison.
    pub fn equal_fold(&self, other: &Cursor) -> bool {
        equal_fold(self.get_ref(), other.get_ref())
    }
}

fn equal_fold(a: &[u8], b: &[u8]) -> bool {
    if a.eq_ignore_ascii_case(b) {
        return true;
    }

    match (std::str::from_utf8(a), std::str::from_utf8(b)) {
        (Ok(a), Ok(b)) => {
            a.chars()
                .flat_map(char::to_lowercase)
                .eq(b.chars().flat_map(char::to_lowercase))
        }
        _ => false,
    }
}

impl PartialEq for Cursor {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for Cursor {}

impl PartialOrd for Cursor {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for Cursor {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl std::hash::Hash for Cursor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.get_ref().hash(state);
    }
}
