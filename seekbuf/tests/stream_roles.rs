//! The cursor used by code that only knows about `std::io` traits.

use std::io::{
    BufRead,
    Read,
    Seek,
    SeekFrom,
    Write,
};

use seekbuf::Cursor;

fn write_ten_bytes_at_end<W: Write + Seek>(mut writer: W) -> std::io::Result<()> {
    writer.seek(SeekFrom::End(-10))?;
    writer.write_all(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9])?;
    Ok(())
}

#[test]
fn write_ten_bytes_at_end_through_write_seek() {
    let mut cursor = Cursor::from_vec(vec![0; 15]);
    write_ten_bytes_at_end(&mut cursor).unwrap();
    assert_eq!(&cursor.get_ref()[5..15], &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn write_ten_bytes_at_end_of_short_buffer_fails() {
    let mut cursor = Cursor::from_vec(vec![0; 5]);
    let e = write_ten_bytes_at_end(&mut cursor).unwrap_err();
    assert_eq!(e.kind(), std::io::ErrorKind::InvalidInput);
    assert_eq!(cursor.get_ref(), &[0; 5]);
    assert_eq!(cursor.position(), 0);
}

#[test]
fn read_to_end_drains_cursor() {
    let bytes = vec![0, 1, 2, 3, 4, 5, 6, 7];
    let mut cursor = Cursor::from_vec(bytes.clone());
    let mut drained = Vec::new();
    assert_eq!(cursor.read_to_end(&mut drained).unwrap(), 8);
    assert_eq!(drained, bytes);
    assert!(cursor.is_empty());
}

#[test]
fn read_exact_past_end_is_unexpected_eof() {
    let mut cursor = Cursor::from_vec(vec![1, 2, 3]);
    let mut buf = [0; 4];
    let e = cursor.read_exact(&mut buf).unwrap_err();
    assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof);
}

#[test]
fn copy_between_cursors() {
    let mut source = Cursor::from_vec(b"hello world".to_vec());
    source.set_position(6);
    let mut destination = Cursor::from_vec(b"hi ".to_vec());
    destination.seek(SeekFrom::End(0)).unwrap();

    let n = std::io::copy(&mut source, &mut destination).unwrap();
    assert_eq!(n, 5);
    assert_eq!(destination.get_ref(), b"hi world");
}

#[test]
fn buf_read_lines() {
    let cursor = Cursor::from_vec(b"one\ntwo\nthree".to_vec());
    let lines = cursor.lines().collect::<Result<Vec<_>, _>>().unwrap();
    assert_eq!(lines, ["one", "two", "three"]);
}

#[test]
fn buf_read_consume_advances_position() {
    let mut cursor = Cursor::from_vec(b"abcdef".to_vec());
    assert_eq!(cursor.fill_buf().unwrap(), b"abcdef");
    cursor.consume(4);
    assert_eq!(cursor.position(), 4);
    assert_eq!(cursor.fill_buf().unwrap(), b"ef");
}

#[test]
fn stream_position_reports_position_past_end() {
    let mut cursor = Cursor::from_vec(vec![1, 2]);
    cursor.set_position(7);
    assert_eq!(cursor.stream_position().unwrap(), 7);
}

#[test]
fn drained_cursor_replays_bytes() {
    let mut produced = Cursor::new();
    write!(produced, "{}-{}", 12, 34).unwrap();
    produced.set_position(0);

    let mut replay = Cursor::from_reader(&mut produced).unwrap();
    let mut s = String::new();
    replay.read_to_string(&mut s).unwrap();
    assert_eq!(s, "12-34");
}

#[test]
fn whole_buffer_stays_reachable_with_read_in_scope() {
    let mut cursor = Cursor::from_vec(vec![1, 2, 3, 4]);
    cursor.set_position(2);
    assert_eq!(cursor.get_ref(), &[1, 2, 3, 4]);
    assert_eq!(cursor.remaining(), &[3, 4]);

    assert_eq!(cursor.take_buf(), vec![1, 2, 3, 4]);
    assert!(cursor.get_ref().is_empty());
    assert_eq!(cursor.position(), 0);
}
