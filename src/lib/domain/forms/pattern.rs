//! ICU date pattern formatting (`yyyy-MM-dd HH:mm:ss` and friends)

use chrono::{Datelike, NaiveDateTime, Timelike};

use super::errors::FormError;

/// Formats `value` using an ICU date pattern.
///
/// Runs of pattern letters select a field and its width, text between single
/// quotes is copied verbatim (`''` is a literal quote) and anything that is
/// not an ASCII letter is copied as-is.
///
/// # Errors
/// [`FormError::UnsupportedPattern`] when the pattern uses a field other than
/// year, month, day, weekday, hour, minute, second or AM/PM marker.
pub fn format_pattern(value: &NaiveDateTime, pattern: &str) -> Result<String, FormError> {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
                out.push('\'');
                continue;
            }

            while let Some(q) = chars.next() {
                if q != '\'' {
                    out.push(q);
                } else if chars.peek() == Some(&'\'') {
                    chars.next();
                    out.push('\'');
                } else {
                    break;
                }
            }

            continue;
        }

        if !c.is_ascii_alphabetic() {
            out.push(c);
            continue;
        }

        let mut width = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            width += 1;
        }

        out.push_str(&format_field(value, c, width)?);
    }

    Ok(out)
}

fn format_field(value: &NaiveDateTime, field: char, width: usize) -> Result<String, FormError> {
    let text = match (field, width) {
        ('y', 2) => pad(value.year().rem_euclid(100), 2),
        ('y', _) => pad(value.year(), width),
        ('M', 3) => value.format("%b").to_string(),
        ('M', 4..) => value.format("%B").to_string(),
        ('M', _) => pad(value.month(), width),
        ('d', _) => pad(value.day(), width),
        ('E', 1..=3) => value.format("%a").to_string(),
        ('E', _) => value.format("%A").to_string(),
        ('H', _) => pad(value.hour(), width),
        ('h', _) => pad(value.hour12().1, width),
        ('m', _) => pad(value.minute(), width),
        ('s', _) => pad(value.second(), width),
        ('a', _) => value.format("%p").to_string(),
        _ => return Err(FormError::UnsupportedPattern(field.to_string().repeat(width))),
    };

    Ok(text)
}

fn pad(value: impl std::fmt::Display, width: usize) -> String {
    format!("{value:0>width$}")
}
