//! End-to-end command orchestration.
//!
//! [`run`] executes split → parse → resolve → convert → format in strict
//! sequence, short-circuiting on the first failure. [`convert_command`] is
//! the single catch-all boundary: every failure becomes its fixed one-line
//! message and nothing escapes to the caller as an error.

use serde::Serialize;

use crate::error::Result;
use crate::{format, parse, split, zone};

/// The structured outcome of one successful conversion.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    /// The instant in UTC (RFC 3339).
    pub utc: String,
    /// The instant as parsed, in the source zone (RFC 3339).
    pub source_local: String,
    /// The instant in the target zone (RFC 3339).
    pub target_local: String,
    /// The resolved target zone (IANA name or numeric offset).
    pub target_zone: String,
    /// The target token as the user typed it.
    pub target_token: String,
    /// The composed human-readable reply.
    pub reply: String,
}

/// Run the full pipeline on one raw command text.
///
/// # Errors
///
/// Any [`crate::ConvertError`]; the first failing stage wins.
pub fn run(input: &str) -> Result<Conversion> {
    let (date_time_segment, zone_token) = split::split(input)?;
    let source = parse::parse_zoned(date_time_segment)?;
    let target_zone = zone::resolve(zone_token)?;
    let converted = source.with_zone(target_zone)?;
    let reply = format::compose_reply(&converted, input, zone_token)?;

    Ok(Conversion {
        utc: converted.instant().to_rfc3339(),
        source_local: source.local()?.to_rfc3339(),
        target_local: converted.local()?.to_rfc3339(),
        target_zone: target_zone.to_string(),
        target_token: zone_token.to_string(),
        reply,
    })
}

/// Convert one raw command text into the single reply line, success or
/// diagnostic.
pub fn convert_command(input: &str) -> String {
    match run(input) {
        Ok(conversion) => conversion.reply,
        Err(e) => e.to_string(),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
