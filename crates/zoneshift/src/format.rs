//! Fixed output rendering and reply composition.

use crate::error::Result;
use crate::stamp::ZonedStamp;

/// Layout for the converted instant: month abbreviation, zero-padded day,
/// full year, zero-suppressed 12-hour clock, AM/PM. E.g. `Feb 04, 2010 5:39 PM`.
pub const OUTPUT_FORMAT: &str = "%b %d, %Y %-I:%M %p";

/// Render the instant in its display zone using [`OUTPUT_FORMAT`].
pub fn format_stamp(stamp: &ZonedStamp) -> Result<String> {
    Ok(stamp.local()?.format(OUTPUT_FORMAT).to_string())
}

/// Compose the reply, echoing the raw input and the target token exactly as
/// the user typed them. The token is deliberately not replaced by the
/// canonical resolved zone name.
pub fn compose_reply(
    stamp: &ZonedStamp,
    original_input: &str,
    target_token: &str,
) -> Result<String> {
    Ok(format!(
        "{original_input} is *{} {target_token}*.",
        format_stamp(stamp)?
    ))
}

// ── Tests ───────────────────────────────────────────────────────────────────
