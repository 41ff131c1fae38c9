use libfree::Error;
use libfree::string::{append_string, copy_string, length, try_append_string, try_copy_string};

#[test]
fn test_copy_string_preserves_length() {
    let sources: [&[u8]; 4] = [b"\0", b"a\0", b"boot.cfg\0", b"no terminator"];
    for src in sources {
        let mut dest = [0xFFu8; 32];
        copy_string(&mut dest, src);
        assert_eq!(length(&dest), length(src));
    }
}

#[test]
fn test_append_builds_path() {
    let mut path = [0u8; 32];
    copy_string(&mut path, b"/boot\0");
    let end = append_string(&mut path, b"/\0");
    assert_eq!(end, 6);
    let end = append_string(&mut path, b"kernel.img\0");
    assert_eq!(end, 16);
    assert_eq!(path[end], 0);
    assert_eq!(&path[..end], b"/boot/kernel.img");
}

#[test]
fn test_checked_variants() {
    let mut small = [0u8; 4];
    assert_eq!(
        try_copy_string(&mut small, b"toolong\0").err(),
        Some(Error::InsufficientCapacity)
    );
    assert_eq!(try_append_string(&mut small, b"abc"), Ok(3));
    assert_eq!(
        try_append_string(&mut small, b"d"),
        Err(Error::InsufficientCapacity)
    );
}
