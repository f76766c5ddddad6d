//! Date-time-segment parsing against the fixed, ordered pattern list.
//!
//! ISO-8601 is always tried first; the fallback patterns follow in the
//! exact order of [`PATTERNS`]. A pattern matches only if it consumes the
//! entire segment. Per-pattern failures are logged at `debug!` level as
//! diagnostics only — the contract is the first success or the aggregate
//! [`ConvertError::UnparseableDateTime`].

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use log::debug;

use crate::error::{ConvertError, Result};
use crate::stamp::ZonedStamp;
use crate::zone::{self, Zone};

/// How one fallback pattern arranges the date-time text and its zone
/// designator.
#[derive(Debug, Clone, Copy)]
pub enum FormatPattern {
    /// `<layout> <zone-name>` — a naive layout followed by a zone token
    /// resolved by name (region, abbreviation, or offset id).
    LocalWithZoneName { layout: &'static str },
    /// `<layout> <±offset>` — a layout whose trailing `%z` is a numeric
    /// offset.
    LocalWithOffset { layout: &'static str },
    /// RFC 1123, e.g. `Thu, 04 Feb 2010 14:39:28 GMT`.
    Rfc1123,
    /// `yyyy.MM.dd <era> at HH:mm:ss <zone-name>` with era tokens
    /// AD/CE/BC/BCE; BC years map to proleptic ISO years.
    EraWithZoneName { layout: &'static str },
}

/// The fallback patterns, tried in this exact order after ISO-8601.
pub const PATTERNS: &[FormatPattern] = &[
    FormatPattern::LocalWithZoneName {
        layout: "%Y-%m-%d %H:%M:%S",
    },
    FormatPattern::LocalWithOffset {
        layout: "%Y-%m-%d %H:%M:%S %z",
    },
    FormatPattern::Rfc1123,
    FormatPattern::LocalWithZoneName {
        layout: "%a, %b %d, %Y %I:%M %p",
    },
    FormatPattern::LocalWithZoneName {
        layout: "%B %d, %Y %I:%M %p",
    },
    FormatPattern::EraWithZoneName {
        layout: "%Y.%m.%d at %H:%M:%S",
    },
    FormatPattern::LocalWithZoneName {
        layout: "%b %d, %Y %I:%M %p",
    },
    FormatPattern::LocalWithZoneName {
        layout: "%Y-%m-%dT%H:%M:%S",
    },
];

/// Parse a date-time-with-zone segment into a [`ZonedStamp`].
///
/// # Errors
///
/// [`ConvertError::UnparseableDateTime`] carrying the segment text when no
/// pattern — ISO-8601 or fallback — matches the whole segment.
pub fn parse_zoned(segment: &str) -> Result<ZonedStamp> {
    let segment = segment.trim();

    match parse_iso8601(segment) {
        Some(stamp) => return Ok(stamp),
        None => debug!("ISO-8601 parse failed for {segment:?}"),
    }

    PATTERNS
        .iter()
        .find_map(|pattern| {
            let parsed = pattern.attempt(segment);
            if parsed.is_none() {
                debug!("pattern {pattern:?} failed for {segment:?}");
            }
            parsed
        })
        .ok_or_else(|| ConvertError::UnparseableDateTime(segment.to_string()))
}

/// Strict ISO-8601 offset form, with an optional trailing `[Zone]`
/// annotation naming the display zone, e.g.
/// `2007-12-03T10:15:30+01:00[Europe/Paris]`.
fn parse_iso8601(segment: &str) -> Option<ZonedStamp> {
    let (text, bracket) = match (segment.find('['), segment.ends_with(']')) {
        (Some(open), true) => (
            &segment[..open],
            Some(&segment[open + 1..segment.len() - 1]),
        ),
        (None, false) => (segment, None),
        _ => return None,
    };

    let parsed = DateTime::parse_from_rfc3339(text).ok()?;
    let zone = match bracket {
        Some(name) => zone::resolve(name).ok()?,
        None => Zone::Fixed(*parsed.offset()),
    };
    Some(ZonedStamp::new(parsed.with_timezone(&Utc), zone))
}

impl FormatPattern {
    /// Attempt this pattern against the whole segment.
    fn attempt(&self, segment: &str) -> Option<ZonedStamp> {
        match self {
            FormatPattern::LocalWithZoneName { layout } => {
                let (text, token) = split_zone_suffix(segment)?;
                let local = NaiveDateTime::parse_from_str(text, layout).ok()?;
                let zone = zone::resolve(token).ok()?;
                ZonedStamp::from_local(local, zone)
            }
            FormatPattern::LocalWithOffset { layout } => {
                let parsed = DateTime::parse_from_str(segment, layout).ok()?;
                Some(ZonedStamp::new(
                    parsed.with_timezone(&Utc),
                    Zone::Fixed(*parsed.offset()),
                ))
            }
            FormatPattern::Rfc1123 => {
                let parsed = DateTime::parse_from_rfc2822(segment).ok()?;
                Some(ZonedStamp::new(
                    parsed.with_timezone(&Utc),
                    Zone::Fixed(*parsed.offset()),
                ))
            }
            FormatPattern::EraWithZoneName { layout } => {
                let (text, token) = split_zone_suffix(segment)?;
                let (text, era) = split_era(text)?;
                let local = NaiveDateTime::parse_from_str(&text, layout).ok()?;
                let local = match era {
                    Era::Ad => local,
                    Era::Bc => local.with_year(1 - local.year())?,
                };
                let zone = zone::resolve(token).ok()?;
                ZonedStamp::from_local(local, zone)
            }
        }
    }
}

/// Split `<date-time text> <zone token>` at the final whitespace run.
fn split_zone_suffix(segment: &str) -> Option<(&str, &str)> {
    let idx = segment.rfind(char::is_whitespace)?;
    let text = segment[..idx].trim_end();
    let token = segment[idx..].trim_start();
    if text.is_empty() || token.is_empty() {
        return None;
    }
    Some((text, token))
}

#[derive(Debug, Clone, Copy)]
enum Era {
    Ad,
    Bc,
}

/// Remove the era token (second word) from the text, returning the
/// remaining layout text and the era.
fn split_era(text: &str) -> Option<(String, Era)> {
    let mut words = text.split_whitespace();
    let date = words.next()?;
    let era = match words.next()? {
        "AD" | "CE" => Era::Ad,
        "BC" | "BCE" => Era::Bc,
        _ => return None,
    };
    let rest: Vec<&str> = words.collect();
    if rest.is_empty() {
        return None;
    }
    Some((format!("{} {}", date, rest.join(" ")), era))
}

// ── Tests ───────────────────────────────────────────────────────────────────
