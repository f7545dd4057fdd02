//! A byte buffer you can seek in.
//!
//! [`Cursor`] owns a growable `Vec<u8>` and a position into it, and reads,
//! writes and seeks like any other stream.
//!
//! ```
//! use std::io::SeekFrom;
//!
//! use seekbuf::Cursor;
//!
//! let mut cursor = Cursor::from_vec(vec![0; 15]);
//! cursor.seek(SeekFrom::End(-10)).unwrap();
//! cursor.write(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
//! assert_eq!(&cursor.get_ref()[5..15], &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
//! ```

mod cmp;
pub mod hexdump;
pub mod io;

pub use self::{
    hexdump::Hexdump,
    io::{
        Cursor,
        End,
        Error,
        Full,
        InvalidSeek,
    },
};
