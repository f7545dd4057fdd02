mod cursor;

use std::{
    collections::TryReserveError,
    io::SeekFrom,
};

pub use self::cursor::Cursor;

/// There are no bytes left to read.
///
/// This is how reads signal end-of-data. It's an expected condition, not a
/// failure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("End of data")]
pub struct End;

impl From<End> for std::io::ErrorKind {
    #[inline]
    fn from(_: End) -> Self {
        std::io::ErrorKind::UnexpectedEof
    }
}

impl From<End> for std::io::Error {
    #[inline]
    fn from(_: End) -> Self {
        std::io::ErrorKind::UnexpectedEof.into()
    }
}

/// A seek would have moved the position below zero or past what a position
/// can represent.
///
/// The cursor's position is left untouched when this is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Invalid seek to negative or overflowing position: {from:?} from position {position}")]
pub struct InvalidSeek {
    /// The requested seek.
    pub from: SeekFrom,

    /// The position at the time of the seek.
    pub position: usize,
}

impl From<InvalidSeek> for std::io::Error {
    #[inline]
    fn from(value: InvalidSeek) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, value)
    }
}

/// The buffer could not be grown.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Buffer is full: could not grow it by {additional} bytes")]
pub struct Full {
    /// How many bytes past the current length were requested.
    pub additional: usize,

    /// Why the allocator refused.
    #[source]
    pub source: TryReserveError,
}

impl From<Full> for std::io::Error {
    #[inline]
    fn from(value: Full) -> Self {
        std::io::Error::new(std::io::ErrorKind::OutOfMemory, value)
    }
}

/// Any error a cursor operation can return, plus I/O errors from a reader
/// being drained into one.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    End(#[from] End),

    #[error(transparent)]
    InvalidSeek(#[from] InvalidSeek),

    #[error(transparent)]
    Full(#[from] Full),

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

impl From<Error> for std::io::Error {
    fn from(value: Error) -> Self {
        match value {
            Error::End(e) => e.into(),
            Error::InvalidSeek(e) => e.into(),
            Error::Full(e) => e.into(),
            Error::Io(e) => e,
        }
    }
}
