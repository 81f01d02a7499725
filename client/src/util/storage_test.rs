use super::*;

#[test]
fn decode_flag_accepts_only_true() {
    assert!(decode_flag(Some("true")));
    assert!(!decode_flag(Some("false")));
    assert!(!decode_flag(Some("TRUE")));
    assert!(!decode_flag(Some("")));
    assert!(!decode_flag(None));
}

#[test]
fn encode_flag_round_values() {
    assert_eq!(encode_flag(true), "true");
    assert_eq!(encode_flag(false), "false");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn native_store_reads_unset_and_drops_writes() {
    let flags = LocalStorageFlags;
    flags.write_flag("pawsquare-test-flag", true);
    assert!(!flags.read_flag("pawsquare-test-flag"));
}
