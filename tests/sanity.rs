use pretty_assertions::assert_eq;

use qsn::{encode, maybe_encode, maybe_shell_encode, DisplayMode};

// Concrete scenarios covering each outer-quoting decision.

#[test]
fn sanity_plain_word_stays_bare() {
    assert_eq!(maybe_shell_encode(b"hello", 0), "hello");
}

#[test]
fn sanity_empty_string() {
    assert_eq!(maybe_shell_encode(b"", 0), "''");
}

#[test]
fn sanity_space_needs_single_quote() {
    assert_eq!(maybe_shell_encode(b"a b", 0), "'a b'");
}

#[test]
fn sanity_newline_needs_dollar_single_quote() {
    assert_eq!(maybe_shell_encode(b"a\nb", 0), "$'a\\nb'");
}

#[test]
fn sanity_valid_utf8_is_literal_under_single_quote() {
    assert_eq!(maybe_shell_encode("µ".as_bytes(), 0), "'µ'");
}

#[test]
fn sanity_u_escape_mode() {
    assert_eq!(maybe_shell_encode("µ".as_bytes(), 1), "'\\u{3bc}'");
}

#[test]
fn sanity_invalid_byte_forces_dollar_single_quote() {
    assert_eq!(maybe_shell_encode(&[0xff], 0), "$'\\xff'");
}

#[test]
fn sanity_stray_lead_byte_then_valid_sequence() {
    assert_eq!(maybe_shell_encode(&[0xce, 0xce, 0xbc], 0), "$'\\xceµ'");
}

#[test]
fn sanity_lone_single_quote() {
    assert_eq!(maybe_shell_encode(b"'", 0), "$'\\''");
}

#[test]
fn sanity_plus_is_not_plain() {
    assert_eq!(maybe_shell_encode(b"+", 0), "'+'");
}

// maybe_encode: never emits `$'...'`, ignores valid_utf8 for form selection.

#[test]
fn maybe_encode_bare_word() {
    assert_eq!(maybe_encode(b"hello", DisplayMode::Utf8), "hello");
}

#[test]
fn maybe_encode_empty_string() {
    assert_eq!(maybe_encode(b"", DisplayMode::Utf8), "''");
}

#[test]
fn maybe_encode_never_upgrades_to_dollar_form() {
    assert_eq!(maybe_encode(&[0xff], DisplayMode::Utf8), "'\\xff'");
    assert_eq!(maybe_encode(b"a\nb", DisplayMode::Utf8), "'a\\nb'");
}

// encode: always wraps in `'...'`.

#[test]
fn encode_always_wraps() {
    assert_eq!(encode(b"hello", DisplayMode::Utf8), "'hello'");
    assert_eq!(encode(b"", DisplayMode::Utf8), "''");
    assert_eq!(encode(b"'", DisplayMode::Utf8), "'\\''");
}

// X_ESCAPE: pure ASCII output, never decodes multibyte sequences.

#[test]
fn x_escape_never_decodes() {
    // X_ESCAPE always reports valid_utf8 = true, so the outer form is
    // whatever the pre-scan alone decided (Single here: µ's bytes aren't
    // plain, but they're not quote-unsafe either).
    assert_eq!(maybe_shell_encode("µ".as_bytes(), 2), "'\\xce\\xbc'");
}

#[test]
fn x_escape_low_control_is_x_escaped_not_u_escaped() {
    assert_eq!(maybe_shell_encode(&[0x01], 2), "$'\\x01'");
}

// Typed flags API.

#[test]
fn typed_flags_reject_reserved_bits() {
    assert!(qsn::EncodeFlags::try_from(0b1000).is_err());
}

#[test]
fn typed_flags_round_trip_through_maybe_shell_encode_with() {
    let flags = qsn::EncodeFlags::try_from(0b101).unwrap();
    assert_eq!(
        qsn::maybe_shell_encode_with("µ".as_bytes(), flags),
        "'\\u{3bc}'"
    );
}
