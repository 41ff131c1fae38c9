use libfree::mem::{copy, fill, move_within, try_move_within};
use rand::Rng;

/// Move through an intermediate copy, the behaviour `move_within` must match.
fn reference_move(buf: &mut [u8], src: usize, dest: usize, n: usize) {
    let tmp = buf[src..src + n].to_vec();
    buf[dest..dest + n].copy_from_slice(&tmp);
}

#[test]
fn test_overlapping_move_matches_reference() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let len = rng.gen_range(1..64);
        let n = rng.gen_range(0..=len);
        let src = rng.gen_range(0..=len - n);
        let dest = rng.gen_range(0..=len - n);

        let original: Vec<u8> = (0..len).map(|_| rng.r#gen()).collect();
        let mut expected = original.clone();
        reference_move(&mut expected, src, dest, n);

        let mut actual = original.clone();
        assert_eq!(move_within(&mut actual, src, dest, n), dest);
        assert_eq!(actual, expected, "src={} dest={} n={}", src, dest, n);
    }
}

#[test]
fn test_forward_overlap_inside_source() {
    let mut buf: Vec<u8> = (0..16).collect();
    let mut expected = buf.clone();
    reference_move(&mut expected, 2, 5, 10);
    move_within(&mut buf, 2, 5, 10);
    assert_eq!(buf, expected);
}

#[test]
fn test_try_move_rejects_out_of_range() {
    let mut buf = [0u8; 8];
    assert!(try_move_within(&mut buf, 4, 0, 5).is_err());
    assert!(try_move_within(&mut buf, 0, 4, 5).is_err());
}

#[test]
fn test_copy_then_fill() {
    let mut buf = [0u8; 8];
    copy(&mut buf, b"abcdefgh", 8);
    fill(&mut buf[2..], i32::from(b'.'), 4);
    assert_eq!(&buf, b"ab....gh");
}
