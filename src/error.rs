/* Copyright (c) 2018 Garrett Berg, vitiral@gmail.com
 *
 * Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
 * http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
 * http://opensource.org/licenses/MIT>, at your option. This file may not be
 * copied, modified, or distributed except according to those terms.
 */
//! The encoder never fails over content: invalid UTF-8 becomes `\xHH`
//! escapes, not errors (see [`crate::engine`]). The one place a genuine
//! caller error can occur is constructing [`crate::EncodeFlags`] from a raw
//! `u32` with reserved bits set.

use thiserror::Error;

/// `flags` had bits set outside the low three (display mode + must-quote).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid QSN flags {0:#x}: bits outside 0b111 are reserved and must be zero")]
pub struct InvalidFlags(pub u32);
