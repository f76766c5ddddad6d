//! The instant-with-zone value and instant-preserving conversion.

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, TimeZone, Utc};

use crate::error::{ConvertError, Result};
use crate::zone::Zone;

/// An absolute instant paired with the zone used to display it.
///
/// Immutable once constructed. Equality is by instant and display zone
/// jointly; [`ZonedStamp::with_zone`] changes only the display zone and
/// preserves the instant exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedStamp {
    instant: DateTime<Utc>,
    zone: Zone,
}

impl ZonedStamp {
    pub fn new(instant: DateTime<Utc>, zone: Zone) -> Self {
        Self { instant, zone }
    }

    /// Interpret a wall-clock reading in `zone`.
    ///
    /// A reading made ambiguous by a DST fall-back takes the earlier offset;
    /// a reading inside a spring-forward gap yields `None`.
    pub fn from_local(local: NaiveDateTime, zone: Zone) -> Option<Self> {
        let instant = match zone {
            Zone::Region(tz) => tz.from_local_datetime(&local).earliest()?.with_timezone(&Utc),
            Zone::Fixed(offset) => offset
                .from_local_datetime(&local)
                .single()?
                .with_timezone(&Utc),
        };
        Some(Self { instant, zone })
    }

    /// The absolute instant, independent of the display zone.
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// The display zone.
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// The wall-clock reading in the display zone.
    ///
    /// # Errors
    ///
    /// [`ConvertError::DateRangeExceeded`] if applying the display offset
    /// leaves the representable date range.
    pub fn local(&self) -> Result<DateTime<FixedOffset>> {
        let offset = self.zone.offset_at(self.instant);
        self.instant
            .naive_utc()
            .checked_add_signed(Duration::seconds(i64::from(offset.local_minus_utc())))
            .ok_or(ConvertError::DateRangeExceeded)?;
        Ok(self.instant.with_timezone(&offset))
    }

    /// Re-express the same instant in `target`. Never alters the instant.
    ///
    /// # Errors
    ///
    /// [`ConvertError::DateRangeExceeded`] if the localized representation
    /// leaves the representable date range.
    pub fn with_zone(&self, target: Zone) -> Result<Self> {
        let converted = Self {
            instant: self.instant,
            zone: target,
        };
        converted.local()?;
        Ok(converted)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
