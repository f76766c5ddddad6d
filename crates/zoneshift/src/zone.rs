//! Target-zone resolution.
//!
//! A zone token is resolved case-insensitively, in two steps: direct
//! resolution as a canonical identifier (IANA region/city names, `Z`/`UT`,
//! numeric offsets with an optional `UTC`/`GMT`/`UT` prefix), then lookup in
//! the colloquial-abbreviation table, whose mapped identifier is resolved
//! the same canonical way.
//!
//! The two failure kinds are distinct so the caller can report precisely:
//! [`ConvertError::UnknownZoneFormat`] for tokens that are not syntactically
//! zone identifiers at all, [`ConvertError::UnknownZoneRegion`] for
//! well-formed tokens that name no known region or abbreviation.

use std::fmt;

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{ConvertError, Result};

const UTC_OFFSET: FixedOffset = FixedOffset::east_opt(0).unwrap();

/// A resolved display zone: an IANA region with full DST rules, or a fixed
/// numeric offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Region-based zone, e.g. `America/New_York`.
    Region(Tz),
    /// Fixed UTC offset, e.g. `-05:00`.
    Fixed(FixedOffset),
}

impl Zone {
    /// The UTC offset this zone is at for the given instant.
    pub fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset {
        match self {
            Zone::Region(tz) => tz.offset_from_utc_datetime(&instant.naive_utc()).fix(),
            Zone::Fixed(offset) => *offset,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Region(tz) => f.write_str(tz.name()),
            Zone::Fixed(offset) => {
                let secs = offset.local_minus_utc();
                let sign = if secs >= 0 { '+' } else { '-' };
                let abs = secs.unsigned_abs();
                write!(f, "{sign}{:02}:{:02}", abs / 3600, (abs % 3600) / 60)
            }
        }
    }
}

/// Colloquial abbreviation → canonical identifier, uppercase keys.
///
/// `EST`/`MST`/`HST` map to fixed offsets; the daylight variants share
/// their standard-time sibling's region.
const SHORT_IDS: &[(&str, &str)] = &[
    ("ACT", "Australia/Darwin"),
    ("AET", "Australia/Sydney"),
    ("AGT", "America/Argentina/Buenos_Aires"),
    ("ART", "Africa/Cairo"),
    ("AST", "America/Anchorage"),
    ("BET", "America/Sao_Paulo"),
    ("BST", "Asia/Dhaka"),
    ("CAT", "Africa/Harare"),
    ("CNT", "America/St_Johns"),
    ("CST", "America/Chicago"),
    ("CDT", "America/Chicago"),
    ("CTT", "Asia/Shanghai"),
    ("EAT", "Africa/Addis_Ababa"),
    ("ECT", "Europe/Paris"),
    ("EST", "-05:00"),
    ("EDT", "America/New_York"),
    ("HST", "-10:00"),
    ("IET", "America/Indiana/Indianapolis"),
    ("IST", "Asia/Kolkata"),
    ("JST", "Asia/Tokyo"),
    ("MIT", "Pacific/Apia"),
    ("MST", "-07:00"),
    ("MDT", "America/Denver"),
    ("NET", "Asia/Yerevan"),
    ("NST", "Pacific/Auckland"),
    ("PLT", "Asia/Karachi"),
    ("PNT", "America/Phoenix"),
    ("PRT", "America/Puerto_Rico"),
    ("PST", "America/Los_Angeles"),
    ("PDT", "America/Los_Angeles"),
    ("SST", "Pacific/Guadalcanal"),
    ("VST", "Asia/Ho_Chi_Minh"),
];

/// Resolve a zone token into a concrete [`Zone`].
///
/// Lookup is case-insensitive: `est` and `EST` resolve identically. The
/// token in either error variant is the normalized (uppercased) form.
///
/// # Errors
///
/// [`ConvertError::UnknownZoneFormat`] if the token is not syntactically a
/// zone identifier; [`ConvertError::UnknownZoneRegion`] if it is well-formed
/// but unknown.
pub fn resolve(token: &str) -> Result<Zone> {
    let trimmed = token.trim();
    let normalized = trimmed.to_uppercase();

    if let Some(zone) = resolve_canonical(trimmed, &normalized)? {
        return Ok(zone);
    }

    if let Some((_, mapped)) = SHORT_IDS.iter().find(|(abbr, _)| *abbr == normalized) {
        if let Some(zone) = resolve_canonical(mapped, &normalized)? {
            return Ok(zone);
        }
    }

    Err(ConvertError::UnknownZoneRegion(normalized))
}

/// Direct resolution of one canonical identifier.
///
/// `Ok(None)` means well-formed but unknown region; `Err` means the
/// identifier is not syntactically a zone id. `token` is the user's
/// normalized token, used for error attribution.
fn resolve_canonical(id: &str, token: &str) -> Result<Option<Zone>> {
    let upper = id.to_uppercase();

    if upper.is_empty() {
        return Err(ConvertError::UnknownZoneFormat(token.to_string()));
    }

    // Single-character ids: only `Z` names a zone (UTC).
    if upper.len() == 1 {
        return if upper == "Z" {
            Ok(Some(Zone::Fixed(UTC_OFFSET)))
        } else {
            Err(ConvertError::UnknownZoneFormat(token.to_string()))
        };
    }

    if upper == "UT" {
        return Ok(Some(Zone::Fixed(UTC_OFFSET)));
    }

    if upper.starts_with('+') || upper.starts_with('-') {
        return parse_offset_id(&upper, token).map(|offset| Some(Zone::Fixed(offset)));
    }

    for prefix in ["UTC", "GMT", "UT"] {
        if let Some(rest) = upper.strip_prefix(prefix) {
            if rest.starts_with('+') || rest.starts_with('-') {
                return parse_offset_id(rest, token).map(|offset| Some(Zone::Fixed(offset)));
            }
            // Prefix without a signed remainder: treat as a region name
            // (`UTC` and `GMT` are themselves IANA zones).
            break;
        }
    }

    if !is_region_syntax(&upper) {
        return Err(ConvertError::UnknownZoneFormat(token.to_string()));
    }

    match Tz::from_str_insensitive(id) {
        Ok(tz) => Ok(Some(Zone::Region(tz))),
        Err(_) => Ok(None),
    }
}

/// Region-id syntax: a letter, then letters/digits and `/ . _ + - ~`.
fn is_region_syntax(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '+' | '-' | '~'))
}

/// Parse a numeric offset id: `±h`, `±hh`, `±hh:mm`, `±hhmm`,
/// `±hh:mm:ss`, `±hhmmss`. The total must stay within ±18:00:00.
fn parse_offset_id(s: &str, token: &str) -> Result<FixedOffset> {
    let err = || ConvertError::UnknownZoneFormat(token.to_string());

    let (sign, digits) = match s.as_bytes().first() {
        Some(b'+') => (1i32, &s[1..]),
        Some(b'-') => (-1i32, &s[1..]),
        _ => return Err(err()),
    };

    let fields: Vec<&str> = if digits.contains(':') {
        digits.split(':').collect()
    } else {
        match digits.len() {
            1 | 2 => vec![digits],
            4 => vec![&digits[..2], &digits[2..]],
            6 => vec![&digits[..2], &digits[2..4], &digits[4..]],
            _ => return Err(err()),
        }
    };
    if fields.is_empty() || fields.len() > 3 {
        return Err(err());
    }

    let mut parts = [0u32; 3];
    for (i, field) in fields.iter().enumerate() {
        if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        parts[i] = field.parse().map_err(|_| err())?;
    }

    let [hours, minutes, seconds] = parts;
    if hours > 18 || minutes > 59 || seconds > 59 {
        return Err(err());
    }
    let total = (hours * 3600 + minutes * 60 + seconds) as i32;
    if total > 18 * 3600 {
        return Err(err());
    }
    FixedOffset::east_opt(sign * total).ok_or_else(err)
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_region_id() {
        let zone = resolve("America/New_York").unwrap();
        assert_eq!(zone, Zone::Region(chrono_tz::America::New_York));
    }

    #[test]
    fn test_resolve_region_id_case_insensitive() {
        assert_eq!(
            resolve("america/new_york").unwrap(),
            resolve("America/New_York").unwrap()
        );
    }

    #[test]
    fn test_resolve_abbreviation_case_insensitive() {
        assert_eq!(resolve("est").unwrap(), resolve("EST").unwrap());
        assert_eq!(resolve("pSt").unwrap(), resolve("PST").unwrap());
    }

    #[test]
    fn test_resolve_abbreviation_to_region() {
        assert_eq!(
            resolve("PST").unwrap(),
            Zone::Region(chrono_tz::America::Los_Angeles)
        );
        assert_eq!(
            resolve("CST").unwrap(),
            Zone::Region(chrono_tz::America::Chicago)
        );
    }

    #[test]
    fn test_resolve_daylight_variant_shares_region() {
        assert_eq!(resolve("PDT").unwrap(), resolve("PST").unwrap());
        assert_eq!(
            resolve("EDT").unwrap(),
            Zone::Region(chrono_tz::America::New_York)
        );
    }

    #[test]
    fn test_resolve_numeric_offsets() {
        let minus_8 = FixedOffset::west_opt(8 * 3600).unwrap();
        assert_eq!(resolve("-08:00").unwrap(), Zone::Fixed(minus_8));
        assert_eq!(resolve("-0800").unwrap(), Zone::Fixed(minus_8));
        assert_eq!(resolve("-8").unwrap(), Zone::Fixed(minus_8));

        let plus_5_30 = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        assert_eq!(resolve("+05:30").unwrap(), Zone::Fixed(plus_5_30));
    }

    #[test]
    fn test_resolve_prefixed_offsets() {
        let plus_2 = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(resolve("UTC+2").unwrap(), Zone::Fixed(plus_2));
        assert_eq!(resolve("gmt+02:00").unwrap(), Zone::Fixed(plus_2));
        assert_eq!(resolve("UT+0200").unwrap(), Zone::Fixed(plus_2));
    }

    #[test]
    fn test_resolve_utc_aliases() {
        assert_eq!(resolve("Z").unwrap(), Zone::Fixed(UTC_OFFSET));
        assert_eq!(resolve("UT").unwrap(), Zone::Fixed(UTC_OFFSET));
        assert_eq!(resolve("UTC").unwrap(), Zone::Region(chrono_tz::UTC));
    }

    #[test]
    fn test_unknown_region_reports_normalized_token() {
        assert_eq!(
            resolve("fail"),
            Err(ConvertError::UnknownZoneRegion("FAIL".to_string()))
        );
        assert_eq!(
            resolve("Mars/Olympus_Mons"),
            Err(ConvertError::UnknownZoneRegion(
                "MARS/OLYMPUS_MONS".to_string()
            ))
        );
    }

    #[test]
    fn test_invalid_format_is_distinct_from_unknown_region() {
        assert_eq!(
            resolve("1abc"),
            Err(ConvertError::UnknownZoneFormat("1ABC".to_string()))
        );
        assert_eq!(
            resolve("A"),
            Err(ConvertError::UnknownZoneFormat("A".to_string()))
        );
        assert_eq!(
            resolve("no spaces"),
            Err(ConvertError::UnknownZoneFormat("NO SPACES".to_string()))
        );
    }

    #[test]
    fn test_offset_out_of_range_is_invalid_format() {
        assert_eq!(
            resolve("+19:00"),
            Err(ConvertError::UnknownZoneFormat("+19:00".to_string()))
        );
        assert_eq!(
            resolve("+05:61"),
            Err(ConvertError::UnknownZoneFormat("+05:61".to_string()))
        );
        assert_eq!(
            resolve("+123"),
            Err(ConvertError::UnknownZoneFormat("+123".to_string()))
        );
    }

    #[test]
    fn test_offset_at_follows_dst() {
        let zone = resolve("America/New_York").unwrap();

        let winter = Utc.with_ymd_and_hms(2010, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(zone.offset_at(winter).local_minus_utc(), -5 * 3600);

        let summer = Utc.with_ymd_and_hms(2010, 7, 15, 12, 0, 0).unwrap();
        assert_eq!(zone.offset_at(summer).local_minus_utc(), -4 * 3600);
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(
            resolve("America/New_York").unwrap().to_string(),
            "America/New_York"
        );
        assert_eq!(resolve("-0800").unwrap().to_string(), "-08:00");
        assert_eq!(resolve("+05:30").unwrap().to_string(), "+05:30");
    }
}
