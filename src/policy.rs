/* Copyright (c) 2018 Garrett Berg, vitiral@gmail.com
 *
 * Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
 * http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
 * http://opensource.org/licenses/MIT>, at your option. This file may not be
 * copied, modified, or distributed except according to those terms.
 */
//! The policy layer: decides whether a whole string stays bare, gets
//! wrapped in `'...'`, or needs the shell-compatible `$'...'` form. Three
//! entry points share the encode engine but differ in policy; see
//! [`crate::maybe_shell_encode`], [`crate::maybe_encode`],
//! [`crate::encode`].

use crate::classify::{is_plain, is_quote_unsafe};
use crate::{engine, xescape, DisplayMode, EncodeFlags};

/// How much quoting a string needs. Declared in increasing strength so the
/// pre-scan can only ever move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum QuoteLevel {
    Bare,
    Single,
    DollarSingle,
}

/// Run the escape engine for `mode` and return its body plus whether the
/// input was valid UTF-8 (`X_ESCAPE` never decodes, so it always reports
/// `true`).
fn encode_body(bytes: &[u8], mode: DisplayMode) -> (String, bool) {
    match mode {
        DisplayMode::XEscape => (xescape::encode(bytes), true),
        _ => engine::encode(bytes, mode),
    }
}

/// Scan for whether *any* quoting is needed, and whether the strongest
/// form (`$'...'`) is already forced without needing to look at the
/// encode engine's output.
fn prescan(bytes: &[u8], must_quote: bool) -> QuoteLevel {
    if bytes.is_empty() {
        // Empty string must be `''`, not bare.
        return QuoteLevel::Single;
    }

    let mut quote = QuoteLevel::Bare;
    for &b in bytes {
        if !must_quote && quote == QuoteLevel::Bare && is_plain(b) {
            continue;
        }
        quote = QuoteLevel::Single;

        if is_quote_unsafe(b) {
            // Maximum reached; the rest of the string doesn't change the
            // outer form (it's still fully scanned by the encode pass,
            // just not by this pre-scan).
            return QuoteLevel::DollarSingle;
        }
    }
    quote
}

/// Encode `bytes` to a shell-compatible QSN literal, choosing the shortest
/// of bare, `'...'`, or `$'...'`.
pub(crate) fn maybe_shell_encode(bytes: &[u8], flags: EncodeFlags) -> String {
    let mut quote = prescan(bytes, flags.must_quote);

    if quote == QuoteLevel::Bare {
        return String::from_utf8(bytes.to_vec())
            .expect("prescan only returns Bare when every byte is_plain, i.e. ASCII");
    }

    let (body, valid_utf8) = encode_body(bytes, flags.mode);
    if !valid_utf8 {
        quote = QuoteLevel::DollarSingle;
    }

    let prefix = match quote {
        QuoteLevel::Bare => unreachable!("handled above"),
        QuoteLevel::Single => "'",
        QuoteLevel::DollarSingle => "$'",
    };

    let mut out = String::with_capacity(prefix.len() + body.len() + 1);
    out.push_str(prefix);
    out.push_str(&body);
    out.push('\'');
    out
}

/// Encode simple strings to a bare word and complex ones to `'...'`. Never
/// emits `$'...'`, and ignores the encode engine's `valid_utf8` signal for
/// form selection.
pub(crate) fn maybe_encode(bytes: &[u8], mode: DisplayMode) -> String {
    let quote = if bytes.is_empty() {
        QuoteLevel::Single
    } else if bytes.iter().all(|&b| is_plain(b)) {
        QuoteLevel::Bare
    } else {
        QuoteLevel::Single
    };

    if quote == QuoteLevel::Bare {
        return String::from_utf8(bytes.to_vec())
            .expect("every byte is_plain, i.e. ASCII");
    }

    let (body, _valid_utf8) = encode_body(bytes, mode);
    wrap_single(&body)
}

/// Always wrap in `'...'`, regardless of content.
pub(crate) fn encode(bytes: &[u8], mode: DisplayMode) -> String {
    let (body, _valid_utf8) = encode_body(bytes, mode);
    wrap_single(&body)
}

fn wrap_single(body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 2);
    out.push('\'');
    out.push_str(body);
    out.push('\'');
    out
}
