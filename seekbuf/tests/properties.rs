//! Property tests for the cursor's position arithmetic.

use std::io::SeekFrom;

use proptest::prelude::*;
use seekbuf::{
    Cursor,
    End,
};

fn arb_bytes() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..=256)
}

proptest! {
    #[test]
    fn remaining_is_suffix_from_position(bytes in arb_bytes(), position in 0usize..512) {
        let mut cursor = Cursor::from_vec(bytes.clone());
        cursor.set_position(position);
        if position <= bytes.len() {
            prop_assert_eq!(cursor.remaining(), &bytes[position..]);
        }
        else {
            prop_assert!(cursor.remaining().is_empty());
        }
    }

    #[test]
    fn is_empty_iff_position_at_or_past_end(bytes in arb_bytes(), position in 0usize..512) {
        let mut cursor = Cursor::from_vec(bytes.clone());
        cursor.set_position(position);
        prop_assert_eq!(cursor.is_empty(), position >= bytes.len());
    }

    #[test]
    fn write_then_bytes_round_trips(bytes in arb_bytes(), split in any::<prop::sample::Index>()) {
        let mut whole = Cursor::new();
        prop_assert_eq!(whole.write(&bytes), Ok(bytes.len()));
        prop_assert_eq!(whole.get_ref(), &bytes[..]);

        let (head, tail) = bytes.split_at(split.index(bytes.len() + 1));
        let mut chunked = Cursor::new();
        chunked.write(head).unwrap();
        chunked.write(tail).unwrap();
        prop_assert_eq!(chunked.get_ref(), &bytes[..]);
        prop_assert_eq!(chunked.position(), bytes.len());
    }

    #[test]
    fn seek_start_then_current_returns_start(x in any::<usize>()) {
        let x = x as u64;
        let mut cursor = Cursor::new();
        prop_assert_eq!(cursor.seek(SeekFrom::Start(x)), Ok(x));
        prop_assert_eq!(cursor.seek(SeekFrom::Current(0)), Ok(x));
    }

    #[test]
    fn negative_seek_is_rejected(position in 0usize..1024, extra in 1i64..1024) {
        let mut cursor = Cursor::new();
        cursor.set_position(position);
        let offset = -(position as i64) - extra;
        prop_assert!(cursor.seek(SeekFrom::Current(offset)).is_err());
        prop_assert_eq!(cursor.position(), position);
    }

    #[test]
    fn overflowing_seek_is_rejected(below_max in 0usize..1024) {
        let mut cursor = Cursor::new();
        let position = usize::MAX - below_max;
        cursor.set_position(position);
        prop_assert!(cursor.seek(SeekFrom::Current(i64::MAX)).is_err());
        prop_assert_eq!(cursor.position(), position);
    }

    #[test]
    fn reading_everything_yields_buffer(bytes in arb_bytes(), chunk in 1usize..32) {
        let mut cursor = Cursor::from_vec(bytes.clone());
        let mut read = Vec::new();
        let mut buf = vec![0; chunk];
        loop {
            match cursor.read(&mut buf) {
                Ok(n) => read.extend_from_slice(&buf[..n]),
                Err(End) => break,
            }
        }
        prop_assert_eq!(read, bytes);
    }

    #[test]
    fn clone_is_independent(bytes in arb_bytes(), data in arb_bytes()) {
        let original = Cursor::from_vec(bytes.clone());
        let mut clone = original.clone();
        clone.write(&data).unwrap();
        prop_assert_eq!(original.get_ref(), &bytes[..]);
        prop_assert_eq!(original.position(), 0);
    }
}
