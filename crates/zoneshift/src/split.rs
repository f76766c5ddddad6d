//! Raw command-text splitting.

use crate::error::{ConvertError, Result};

const SEPARATOR: &str = "to";

/// Split `<date-time expression> to <target zone token>` at the standalone
/// separator token, trimming both segments.
///
/// The separator must be whitespace-delimited on both sides, so a `to`
/// embedded in a word (`October`, `history`) never splits. Exactly one
/// standalone `to` is required.
///
/// # Errors
///
/// [`ConvertError::MalformedInput`] when the input is blank, has no
/// standalone separator, has more than one, or either segment is empty.
pub fn split(raw: &str) -> Result<(&str, &str)> {
    if raw.trim().is_empty() {
        return Err(ConvertError::MalformedInput);
    }

    let mut separators = raw
        .match_indices(SEPARATOR)
        .filter(|(idx, _)| is_standalone(raw, *idx));
    let (idx, _) = separators.next().ok_or(ConvertError::MalformedInput)?;
    if separators.next().is_some() {
        return Err(ConvertError::MalformedInput);
    }

    let date_time = raw[..idx].trim();
    let zone_token = raw[idx + SEPARATOR.len()..].trim();
    if date_time.is_empty() || zone_token.is_empty() {
        return Err(ConvertError::MalformedInput);
    }
    Ok((date_time, zone_token))
}

/// Whether the separator occurrence at `idx` is its own word.
fn is_standalone(raw: &str, idx: usize) -> bool {
    let before = raw[..idx].chars().next_back();
    let after = raw[idx + SEPARATOR.len()..].chars().next();
    before.is_none_or(char::is_whitespace) && after.is_none_or(char::is_whitespace)
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_and_trims() {
        assert_eq!(
            split("2010-02-04T14:39:28 PST to EST").unwrap(),
            ("2010-02-04T14:39:28 PST", "EST")
        );
        assert_eq!(split("  a b  to  c  ").unwrap(), ("a b", "c"));
    }

    #[test]
    fn test_blank_input_is_malformed() {
        assert_eq!(split(""), Err(ConvertError::MalformedInput));
        assert_eq!(split("   "), Err(ConvertError::MalformedInput));
    }

    #[test]
    fn test_missing_separator_is_malformed() {
        assert_eq!(split("garbage text"), Err(ConvertError::MalformedInput));
        assert_eq!(split("adadadsaddsa"), Err(ConvertError::MalformedInput));
    }

    #[test]
    fn test_embedded_to_does_not_split() {
        // "October" and "history" both contain the letters "to".
        assert_eq!(
            split("October 31, 2010 5:00 PM EST"),
            Err(ConvertError::MalformedInput)
        );
        assert_eq!(
            split("October 31, 2010 5:00 PM EST to PST").unwrap(),
            ("October 31, 2010 5:00 PM EST", "PST")
        );
        assert_eq!(split("history lesson"), Err(ConvertError::MalformedInput));
    }

    #[test]
    fn test_multiple_separators_are_malformed() {
        assert_eq!(split("a to b to c"), Err(ConvertError::MalformedInput));
    }

    #[test]
    fn test_empty_segment_is_malformed() {
        assert_eq!(split("to EST"), Err(ConvertError::MalformedInput));
        assert_eq!(
            split("2010-02-04T14:39:28 PST to"),
            Err(ConvertError::MalformedInput)
        );
        assert_eq!(split("to"), Err(ConvertError::MalformedInput));
    }
}
