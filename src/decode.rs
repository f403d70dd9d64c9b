// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of projgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Decoding of backslash-escaped project names.
//!
//! Some imports store names with their non-ASCII characters escaped (`\uc548\ub155`). Only
//! the numeric escapes `\uXXXX`, `\UXXXXXXXX` and `\xHH` are interpreted; any other
//! backslash is ordinary text, so a name like `R&D\Ops` comes back unchanged.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodingError {
    #[error("expected {expected} hex digits at byte {offset}")]
    InvalidHex { offset: usize, expected: usize },
    #[error("escape does not name a character: U+{0:04X}")]
    InvalidCodePoint(u32),
}

/// Decodes `\uXXXX`, `\UXXXXXXXX` and `\xHH` escapes.
///
/// UTF-16 surrogate pairs written as two `\u` escapes are combined.
pub fn decode_name(raw: &str) -> Result<String, DecodingError> {
    if !raw.contains('\\') {
        return Ok(raw.to_owned());
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.char_indices();

    while let Some((_, ch)) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        let Some((offset, escape @ ('u' | 'U' | 'x'))) = chars.clone().next() else {
            out.push('\\');
            continue;
        };
        chars.next();
        let decoded = match escape {
            'x' => code_point(read_hex(raw, &mut chars, offset + 1, 2)?)?,
            'U' => code_point(read_hex(raw, &mut chars, offset + 1, 8)?)?,
            _ => {
                let high = read_hex(raw, &mut chars, offset + 1, 4)?;
                if (0xD800..0xDC00).contains(&high) {
                    let low = read_low_surrogate(raw, &mut chars, offset + 5)?;
                    code_point(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))?
                } else {
                    code_point(high)?
                }
            }
        };
        out.push(decoded);
    }

    Ok(out)
}

fn read_hex(
    raw: &str,
    chars: &mut std::str::CharIndices<'_>,
    offset: usize,
    expected: usize,
) -> Result<u32, DecodingError> {
    let digits = raw
        .get(offset..offset + expected)
        .filter(|digits| digits.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or(DecodingError::InvalidHex { offset, expected })?;
    let value =
        u32::from_str_radix(digits, 16).map_err(|_| DecodingError::InvalidHex { offset, expected })?;
    for _ in 0..expected {
        chars.next();
    }
    Ok(value)
}

fn read_low_surrogate(
    raw: &str,
    chars: &mut std::str::CharIndices<'_>,
    offset: usize,
) -> Result<u32, DecodingError> {
    if raw.get(offset..offset + 2) != Some("\\u") {
        return Err(DecodingError::InvalidCodePoint(0xD800));
    }
    chars.next();
    chars.next();
    let low = read_hex(raw, chars, offset + 2, 4)?;
    if !(0xDC00..0xE000).contains(&low) {
        return Err(DecodingError::InvalidCodePoint(low));
    }
    Ok(low)
}

fn code_point(value: u32) -> Result<char, DecodingError> {
    char::from_u32(value).ok_or(DecodingError::InvalidCodePoint(value))
}
