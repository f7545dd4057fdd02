use std::io::{
    BufRead,
    Read,
    Seek,
    SeekFrom,
    Write,
};

use super::{
    End,
    Error,
    Full,
    InvalidSeek,
};
use crate::hexdump::Hexdump;

/// A reader, writer and seeker over an owned, growable byte buffer.
///
/// The position may point past the end of the buffer. Reads from there
/// return [`End`], and writes land at the end of the buffer.
#[derive(Debug, Default)]
pub struct Cursor {
    buf: Vec<u8>,
    position: usize,
}

impl Cursor {
    /// Creates a cursor over an empty buffer.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cursor over `buf`, positioned at its start.
    #[inline]
    pub fn from_vec(buf: Vec<u8>) -> Self {
        Self::with_position(buf, 0)
    }

    /// Creates a cursor over `buf` at `position`, which may lie past its end.
    #[inline]
    pub fn with_position(buf: Vec<u8>, position: usize) -> Self {
        Self { buf, position }
    }

    /// Reads `reader` until it's exhausted and creates a cursor over
    /// everything it produced.
    ///
    /// Errors from `reader` are returned as [`Error::Io`].
    pub fn from_reader(mut reader: impl Read) -> Result<Self, Error> {
        let mut buf = Vec::new();
        let n = reader.read_to_end(&mut buf)?;
        tracing::trace!(bytes = n, "drained reader into cursor");
        Ok(Self::from_vec(buf))
    }

    /// The full buffer, regardless of the position.
    #[inline]
    pub fn get_ref(&self) -> &[u8] {
        &self.buf
    }

    /// The bytes from the position to the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> &[u8] {
        let start = std::cmp::min(self.position, self.buf.len());
        &self.buf[start..]
    }

    /// Returns whether there are no bytes left to read.
    ///
    /// Note that this is about [`remaining`](Self::remaining), not the buffer:
    /// a cursor over a non-empty buffer is empty once its position reaches the
    /// end.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.position >= self.buf.len()
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Sets the position.
    ///
    /// Any position is accepted. Positions past the end of the buffer read
    /// nothing.
    #[inline]
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Takes the buffer out of the cursor.
    ///
    /// The cursor is left empty with its position reset to 0, and can be used
    /// again.
    #[inline]
    pub fn take_buf(&mut self) -> Vec<u8> {
        self.position = 0;
        std::mem::take(&mut self.buf)
    }

    /// Consumes the cursor and returns its buffer.
    #[inline]
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    /// Reserves capacity for at least `additional` more bytes.
    pub fn reserve(&mut self, additional: usize) -> Result<(), Full> {
        self.buf.try_reserve(additional).map_err(|source| {
            tracing::error!(additional, "could not grow buffer");
            Full { additional, source }
        })
    }

    /// Grows the buffer to `new_len`, filling new bytes with `value`.
    ///
    /// Does nothing if the buffer is already at least `new_len` long. The
    /// position is not changed.
    pub fn grow(&mut self, new_len: usize, value: u8) -> Result<(), Full> {
        if new_len > self.buf.len() {
            self.reserve(new_len - self.buf.len())?;
            self.buf.resize(new_len, value);
        }
        Ok(())
    }

    /// Reads bytes into `dest` and advances the position by the number of
    /// bytes read.
    ///
    /// Returns [`End`] if the position is at or past the end of the buffer.
    /// An empty `dest` reads 0 bytes otherwise.
    pub fn read(&mut self, dest: &mut [u8]) -> Result<usize, End> {
        if self.is_empty() {
            return Err(End);
        }

        let source = &self.buf[self.position..];
        let n = std::cmp::min(dest.len(), source.len());
        dest[..n].copy_from_slice(&source[..n]);
        self.position += n;
        Ok(n)
    }

    /// Writes all of `data` and advances the position by its length.
    ///
    /// The write starts at the position, or at the end of the buffer if the
    /// position is past it. The buffer grows as needed, so the only way this
    /// fails is if that allocation fails.
    ///
    /// The position saturates at `usize::MAX` instead of wrapping.
    pub fn write(&mut self, data: &[u8]) -> Result<usize, Full> {
        if data.is_empty() {
            return Ok(0);
        }

        let start = std::cmp::min(self.position, self.buf.len());
        let end = start + data.len();
        if end > self.buf.len() {
            self.reserve(end - self.buf.len())?;
        }

        let overwrite = std::cmp::min(end, self.buf.len()) - start;
        let (head, tail) = data.split_at(overwrite);
        self.buf[start..start + overwrite].copy_from_slice(head);
        self.buf.extend_from_slice(tail);

        self.position = self.position.saturating_add(data.len());
        Ok(data.len())
    }

    /// Moves the position and returns the new one.
    ///
    /// The new position may lie past the end of the buffer. Seeking to a
    /// negative position, or one that overflows, fails with [`InvalidSeek`] and
    /// leaves the position as it was.
    pub fn seek(&mut self, from: SeekFrom) -> Result<u64, InvalidSeek> {
        let position = match from {
            SeekFrom::Start(offset) => Some(offset),
            SeekFrom::End(offset) => checked_offset(self.buf.len() as u64, offset),
            SeekFrom::Current(offset) => checked_offset(self.position as u64, offset),
        }
        .and_then(|position| usize::try_from(position).ok());

        match position {
            Some(position) => {
                self.position = position;
                Ok(position as u64)
            }
            None => {
                tracing::debug!(?from, position = self.position, "rejected seek");
                Err(InvalidSeek {
                    from,
                    position: self.position,
                })
            }
        }
    }

    #[inline]
    pub fn hexdump(&self) -> Hexdump<'_> {
        Hexdump::new(&self.buf)
    }
}

fn checked_offset(base: u64, offset: i64) -> Option<u64> {
    if offset >= 0 {
        base.checked_add(offset as u64)
    }
    else {
        base.checked_sub(offset.unsigned_abs())
    }
}

impl Clone for Cursor {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
            position: self.position,
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.buf.clone_from(&source.buf);
        self.position = source.position;
    }
}

impl Read for Cursor {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match Cursor::read(self, buf) {
            Ok(n) => Ok(n),
            Err(End) => Ok(0),
        }
    }
}

impl BufRead for Cursor {
    #[inline]
    fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
        Ok(self.remaining())
    }

    /// Advances the position by `amt`, saturating at `usize::MAX`.
    #[inline]
    fn consume(&mut self, amt: usize) {
        self.position = self.position.saturating_add(amt);
    }
}

impl Write for Cursor {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(Cursor::write(self, buf)?)
    }

    #[inline]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Seek for Cursor {
    #[inline]
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        Ok(Cursor::seek(self, pos)?)
    }

    #[inline]
    fn stream_position(&mut self) -> std::io::Result<u64> {
        Ok(self.position as u64)
    }
}

impl AsRef<[u8]> for Cursor {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.buf
    }
}

impl From<Vec<u8>> for Cursor {
    #[inline]
    fn from(value: Vec<u8>) -> Self {
        Self::from_vec(value)
    }
}

impl<'a> From<&'a [u8]> for Cursor {
    #[inline]
    fn from(value: &'a [u8]) -> Self {
        Self::from_vec(value.to_vec())
    }
}

impl From<Cursor> for Vec<u8> {
    #[inline]
    fn from(value: Cursor) -> Self {
        value.into_inner()
    }
}
