//! Compact duration grammar used for free-text duration input.
//!
//! A duration is a sequence of `<digits><unit>` tokens, unit one of
//! `d`/`h`/`m` (case-insensitive), optionally separated by whitespace:
//! `"3d2h30m"` is 3 days, 2 hours and 30 minutes, i.e. 4530 minutes.
//! An empty string parses to zero. Digits that are not immediately
//! followed by a unit are rejected, as is any other character, so the
//! caller can re-prompt instead of guessing what the user meant.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("number is missing a unit suffix (d, h or m)")]
    MissingUnit,
    #[error("unit '{0}' is missing a leading number")]
    MissingNumber(char),
    #[error("unexpected character '{0}' in duration")]
    UnexpectedChar(char),
}

/// Parses a compact duration string into total minutes.
///
/// Units accumulate additively: `d` × 1440, `h` × 60, `m` × 1. Returns
/// an error for a dangling digit run (`"30"`), a bare unit (`"h"`), or
/// any character outside digits, units and whitespace (`"5x"`).
pub fn parse_duration(input: &str) -> Result<i32, DurationParseError> {
    let mut total: i32 = 0;
    let mut num: Option<i32> = None;

    for ch in input.chars() {
        match ch {
            '0'..='9' => {
                num = Some(num.unwrap_or(0) * 10 + (ch as i32 - '0' as i32));
            }
            'd' | 'D' | 'h' | 'H' | 'm' | 'M' => {
                let value = num.take().ok_or(DurationParseError::MissingNumber(ch))?;
                let factor = match ch {
                    'd' | 'D' => 24 * 60,
                    'h' | 'H' => 60,
                    _ => 1,
                };
                total += value * factor;
            }
            c if c.is_whitespace() => {
                // Whitespace may separate tokens but not split one
                if num.is_some() {
                    return Err(DurationParseError::MissingUnit);
                }
            }
            other => return Err(DurationParseError::UnexpectedChar(other)),
        }
    }

    if num.is_some() {
        return Err(DurationParseError::MissingUnit);
    }

    Ok(total)
}

/// Formats minutes in the same compact `XdYhZm` grammar the parser
/// accepts, omitting zero components. Zero minutes renders as `"0m"`.
pub fn format_duration_compact(total_minutes: i32) -> String {
    if total_minutes <= 0 {
        return "0m".to_string();
    }

    let days = total_minutes / (24 * 60);
    let remaining = total_minutes % (24 * 60);
    let hours = remaining / 60;
    let minutes = remaining % 60;

    let mut out = String::new();
    if days > 0 {
        out.push_str(&format!("{}d", days));
    }
    if hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }

    out
}
