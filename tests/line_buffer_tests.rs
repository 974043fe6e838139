//! Line buffer tests

use serial_console::line_buffer::LineBuffer;

#[test]
fn test_line_buffer_push() {
    let mut buf = LineBuffer::<64>::new();

    assert!(buf.push(b'h'));
    assert!(buf.push(b'e'));
    assert!(buf.push(b'l'));
    assert!(buf.push(b'p'));

    assert_eq!(buf.as_str(), "help");
    assert_eq!(buf.len(), 4);
}

#[test]
fn test_line_buffer_backspace() {
    let mut buf = LineBuffer::<64>::new();

    buf.push(b'h');
    buf.push(b'e');
    buf.push(b'l');
    buf.push(b'p');
    buf.backspace();
    buf.backspace();

    assert_eq!(buf.as_str(), "he");
}

#[test]
fn test_line_buffer_backspace_empty() {
    let mut buf = LineBuffer::<64>::new();

    buf.backspace(); // should not panic
    assert_eq!(buf.as_str(), "");
}

#[test]
fn test_line_buffer_clear() {
    let mut buf = LineBuffer::<64>::new();

    buf.push(b'h');
    buf.push(b'i');
    buf.clear();

    assert_eq!(buf.as_str(), "");
    assert!(buf.is_empty());
}

#[test]
fn test_line_buffer_reserves_terminator_slot() {
    let mut buf = LineBuffer::<8>::new();

    // Accepts exactly 7 bytes, then rejects without corruption.
    for i in 0..7u8 {
        assert!(buf.push(b'a' + i));
    }
    assert!(!buf.push(b'z'));
    assert!(!buf.push(b'z'));

    assert_eq!(buf.as_str(), "abcdefg");
    assert_eq!(buf.len(), 7);
    assert_eq!(buf.remaining(), 0);
}

#[test]
fn test_line_buffer_push_str() {
    let mut buf = LineBuffer::<16>::new();

    assert!(buf.push_str("show"));
    assert!(buf.push_str(" wpm"));
    assert_eq!(buf.as_str(), "show wpm");
}

#[test]
fn test_line_buffer_push_str_all_or_nothing() {
    let mut buf = LineBuffer::<8>::new();

    assert!(buf.push_str("abc"));
    // 5 more bytes do not fit in the 4 remaining slots.
    assert!(!buf.push_str("defgh"));
    assert_eq!(buf.as_str(), "abc");

    // But 4 exactly fill it.
    assert!(buf.push_str("defg"));
    assert_eq!(buf.as_str(), "abcdefg");
    assert!(!buf.push(b'h'));
}

#[test]
fn test_line_buffer_as_bytes() {
    let mut buf = LineBuffer::<16>::new();

    buf.push_str("run");
    assert_eq!(buf.as_bytes(), b"run");
}
