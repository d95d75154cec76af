//! WhatsApp deep-link construction.
//!
//! `wa.me` expects the phone number as bare digits — no `+`, spaces,
//! hyphens, or parentheses. The optional pre-filled message rides in the
//! `text` query parameter, percent-encoded with the `encodeURIComponent`
//! escape set (space → `%20`, not `+`).

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// `encodeURIComponent` leaves `- _ . ! ~ * ' ( )` unescaped.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Strip the characters `wa.me` rejects: whitespace, `+`, `-`, `(`, `)`.
pub fn sanitize_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '+' | '-' | '(' | ')'))
        .collect()
}

/// Build the deep-link URL for a raw phone number and optional message.
pub fn wa_link(phone: &str, message: Option<&str>) -> String {
    let digits = sanitize_phone(phone);
    match message {
        Some(msg) if !msg.is_empty() => {
            format!("https://wa.me/{digits}?text={}", utf8_percent_encode(msg, QUERY))
        }
        _ => format!("https://wa.me/{digits}"),
    }
}

// ============================================================================
// Tests
// ============================================================================
