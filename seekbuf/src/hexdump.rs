//! Canonical hex+ASCII rendering of a byte slice, as `hexdump -C` prints it.

use std::fmt::{
    Display,
    Write as _,
};

const LINE_LENGTH: usize = 16;

/// Formats bytes as 16-byte lines of hex with an ASCII column, followed by a
/// line holding the offset just past the last byte.
#[derive(Clone, Copy, Debug)]
pub struct Hexdump<'b> {
    bytes: &'b [u8],
    offset: usize,
}

impl<'b> Hexdump<'b> {
    #[inline]
    pub fn new(bytes: &'b [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Number the lines as if `bytes` started at `offset`, e.g. where a cursor
    /// was positioned when they were read.
    #[inline]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

impl<'b> Display for Hexdump<'b> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut offset = self.offset;

        for line in self.bytes.chunks(LINE_LENGTH) {
            write!(f, "{offset:08x} ")?;
            for i in 0..LINE_LENGTH {
                // extra gap between the two halves
                if i % 8 == 0 {
                    f.write_char(' ')?;
                }
                match line.get(i) {
                    Some(b) => write!(f, "{b:02x} ")?,
                    None => f.write_str("   ")?,
                }
            }

            f.write_str(" |")?;
            for &b in line {
                let c = if b.is_ascii_graphic() || b == b' ' {
                    char::from(b)
                }
                else {
                    '.'
                };
                f.write_char(c)?;
            }
            f.write_str("|\n")?;

            offset = offset.saturating_add(line.len());
        }

        writeln!(f, "{offset:08x}")
    }
}
