#![cfg(test)]

use std::ffi::{CStr, c_char};
use std::ptr;
use std::thread;

use super::*;

fn both(text: *const c_char) -> (usize, usize) {
    // SAFETY: Only called with null or with pointers from CStr literals / terminated buffers.
    unsafe { (length(text), length_by_offset(text)) }
}

#[test]
fn test_scenarios() {
    assert_eq!(both(c"hello".as_ptr()), (5, 5), "Should count every byte before the terminator.");
    assert_eq!(both(c"".as_ptr()), (0, 0), "A lone terminator should have length 0.");
    assert_eq!(both(ptr::null()), (0, 0), "A null pointer should be treated as empty.");
    assert_eq!(both(c"a".as_ptr()), (1, 1), "A single byte should have length 1.");
}

#[test]
fn test_stops_at_first_terminator() {
    let buffer = b"ab\0cd\0";
    assert_eq!(
        both(buffer.as_ptr().cast()),
        (2, 2),
        "Bytes after the first terminator should be ignored."
    );
    assert_eq!(bytes_length(Some(&buffer[..])), Ok(2));
}

#[test]
fn test_variants_agree() {
    let mut buffer = [b'x'; 300];
    for end in 0..buffer.len() {
        buffer[end] = 0;
        assert_eq!(
            both(buffer.as_ptr().cast()),
            (end, end),
            "Both scans should report the terminator's offset."
        );
        buffer[end] = b'x';
    }
}

#[test]
fn test_non_ascii_bytes() {
    let text = CStr::from_bytes_with_nul("héllo wörld\0".as_bytes())
        .expect("literal has exactly one terminator");
    assert_eq!(cstr_length(Some(text)), 13, "Length should be counted in bytes, not chars.");
    assert_eq!(both(text.as_ptr()), (13, 13));
}

#[test]
fn test_idempotent() {
    let text = c"repeatable";
    let first = cstr_length(Some(text));
    for _ in 0..10 {
        assert_eq!(cstr_length(Some(text)), first, "Repeated calls should agree.");
    }
    assert_eq!(first, text.count_bytes());
}

#[test]
fn test_cstr_length() {
    assert_eq!(cstr_length(None), 0, "An absent sequence should have length 0.");
    assert_eq!(cstr_length(Some(c"")), 0);
    assert_eq!(cstr_length(Some(c"hello")), 5);
}

#[test]
fn test_bytes_length() {
    assert_eq!(bytes_length(None), Ok(0), "An absent buffer should have length 0.");
    assert_eq!(bytes_length(Some(&b"\0"[..])), Ok(0));
    assert_eq!(bytes_length(Some(&b"hello\0"[..])), Ok(5));
    assert_eq!(
        bytes_length(Some(&b"hello"[..])),
        Err(MissingSentinelError),
        "A buffer without a terminator shouldn't be read past its end."
    );
    assert_eq!(bytes_length(Some(&b""[..])), Err(MissingSentinelError));
}

#[test]
fn test_concurrent_reads() {
    let texts: [&CStr; 4] = [c"hello", c"", c"a", c"concurrent"];
    thread::scope(|s| {
        let handles: [_; 4] = texts.map(|text| s.spawn(move || cstr_length(Some(text))));
        let lengths = handles.map(|h| h.join().expect("counting thread panicked"));
        assert_eq!(lengths, [5, 0, 1, 10], "Independent sequences should be counted independently.");
    });
}
