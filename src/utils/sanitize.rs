//! Text cleanup for extracted values and logged error messages.

use crate::config::MAX_ERROR_MESSAGE_LENGTH;

/// Invisible characters product pages wrap around labels and values.
const INVISIBLE_MARKS: &[char] = &['\u{200e}', '\u{200f}', '\u{feff}'];

/// Trims whitespace and invisible directional marks from both ends of `text`.
///
/// Detail lists commonly render as `"Brand\n\u{200f}:\u{200e} Acme"`; plain
/// `trim()` leaves the marks in place and breaks the emptiness check.
pub fn clean_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || INVISIBLE_MARKS.contains(&c))
}

/// Sanitizes an error message by removing control characters.
///
/// Control characters (0x00-0x1F, except newline/tab/carriage return) are
/// stripped before upstream error text reaches the log.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
        })
        .collect()
}

/// Sanitizes and truncates an error message to `MAX_ERROR_MESSAGE_LENGTH`.
///
/// Truncation happens on a character boundary and appends the original length.
pub fn sanitize_and_truncate_error_message(message: &str) -> String {
    let sanitized = sanitize_error_message(message);

    if sanitized.len() > MAX_ERROR_MESSAGE_LENGTH {
        let mut truncate_len = MAX_ERROR_MESSAGE_LENGTH.saturating_sub(50);
        while !sanitized.is_char_boundary(truncate_len) {
            truncate_len -= 1;
        }
        format!(
            "{}... (truncated, original length: {} chars)",
            &sanitized[..truncate_len],
            sanitized.len()
        )
    } else {
        sanitized
    }
}
