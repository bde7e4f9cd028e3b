/* Copyright (c) 2018 Garrett Berg, vitiral@gmail.com
 *
 * Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
 * http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
 * http://opensource.org/licenses/MIT>, at your option. This file may not be
 * copied, modified, or distributed except according to those terms.
 */
//! # QSN: Quoted String Notation
//!
//! QSN encodes an arbitrary byte string into a single-quoted, printable,
//! 7-bit-safe-or-UTF-8-safe literal suitable for shell transcripts,
//! pretty-printed structured data, and cross-language interchange. It's a
//! strict superset of a common subset of shell `$'...'` strings, and a
//! variant of Rust string literals using `'` as the delimiter.
//!
//! ```rust
//! assert_eq!(qsn::maybe_shell_encode(b"hello", Default::default()), "hello");
//! assert_eq!(qsn::maybe_shell_encode(b"a b", Default::default()), "'a b'");
//! assert_eq!(qsn::maybe_shell_encode(b"a\nb", Default::default()), "$'a\\nb'");
//! ```
//!
//! Three entry points, differing only in policy (see [`maybe_shell_encode`],
//! [`maybe_encode`], [`encode`]) share one encoder: a byte-driven state
//! machine (see [`engine`]) that decodes UTF-8 in an error-tolerant
//! fashion and escapes whatever it can't represent literally.
//!
//! This crate only encodes. Decoding QSN back into bytes, the surrounding
//! shell, and any CLI surface are out of scope — see the crate's design
//! notes.

mod classify;
mod engine;
mod error;
mod helpers;
mod policy;
mod xescape;

pub use error::InvalidFlags;

/// Governs how non-ASCII input is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Emit valid UTF-8 byte sequences literally; escape only invalid
    /// bytes, control bytes, and quote-unsafe bytes.
    #[default]
    Utf8,
    /// Emit `\u{HEX}` for every decoded code point `>= 0x7F`; `\xHH` for
    /// invalid bytes and low control bytes. Output is pure ASCII.
    UEscape,
    /// Never attempt UTF-8 decoding; every high byte becomes `\xHH`.
    /// Output is pure ASCII.
    XEscape,
}

impl DisplayMode {
    fn from_bits(bits: u32) -> DisplayMode {
        match bits {
            0 => DisplayMode::Utf8,
            1 => DisplayMode::UEscape,
            2 => DisplayMode::XEscape,
            // `EncodeFlags::try_from` only ever constructs this from two
            // bits (`flags & 0b11`), so 3 is the only other reachable
            // value, and it's QSN's own reserved combination.
            _ => DisplayMode::Utf8,
        }
    }
}

/// The typed form of `maybe_shell_encode`'s `flags: u32`: display mode
/// plus the must-quote bit, validated up front instead of masked silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeFlags {
    pub mode: DisplayMode,
    pub must_quote: bool,
}

impl TryFrom<u32> for EncodeFlags {
    type Error = InvalidFlags;

    fn try_from(flags: u32) -> Result<Self, Self::Error> {
        if flags & !0b111 != 0 {
            return Err(InvalidFlags(flags));
        }
        Ok(EncodeFlags {
            mode: DisplayMode::from_bits(flags & 0b11),
            must_quote: flags & 0b100 != 0,
        })
    }
}

/// Encode `bytes` to a shell-compatible QSN literal: bare, `'...'`, or
/// `$'...'`, whichever is shortest while still round-tripping.
///
/// `flags`' low two bits select [`DisplayMode`] (0 = `Utf8`, 1 = `UEscape`,
/// 2 = `XEscape`); bit 2 (`0b100`) is must-quote. This is the raw,
/// wire-compatible entry point — it masks unknown bits rather than
/// rejecting them. Prefer [`maybe_shell_encode_with`] if you want reserved
/// bits validated.
///
/// ```rust
/// assert_eq!(qsn::maybe_shell_encode(b"hi", 0), "hi");
/// assert_eq!(qsn::maybe_shell_encode(b"", 0), "''");
/// ```
pub fn maybe_shell_encode(bytes: &[u8], flags: u32) -> String {
    debug_assert_eq!(
        flags & !0b111,
        0,
        "reserved QSN flag bits must be zero (got {flags:#x})"
    );
    let flags = EncodeFlags {
        mode: DisplayMode::from_bits(flags & 0b11),
        must_quote: flags & 0b100 != 0,
    };
    policy::maybe_shell_encode(bytes, flags)
}

/// Typed equivalent of [`maybe_shell_encode`], taking a validated
/// [`EncodeFlags`] instead of a raw `u32`.
pub fn maybe_shell_encode_with(bytes: &[u8], flags: EncodeFlags) -> String {
    policy::maybe_shell_encode(bytes, flags)
}

/// Encode simple strings to a bare word and complex ones to a QSN literal.
/// Never emits `$'...'` — used where shell-round-trip validity doesn't
/// matter, e.g. pretty-printing structured data.
pub fn maybe_encode(bytes: &[u8], mode: DisplayMode) -> String {
    policy::maybe_encode(bytes, mode)
}

/// Like [`maybe_encode`], defaulting `mode` to [`DisplayMode::Utf8`].
pub fn maybe_encode_default(bytes: &[u8]) -> String {
    maybe_encode(bytes, DisplayMode::default())
}

/// Always wrap `bytes` in `'...'`, regardless of content.
pub fn encode(bytes: &[u8], mode: DisplayMode) -> String {
    policy::encode(bytes, mode)
}

/// Like [`encode`], defaulting `mode` to [`DisplayMode::Utf8`].
pub fn encode_default(bytes: &[u8]) -> String {
    encode(bytes, DisplayMode::default())
}
