//! # zoneshift
//!
//! Convert a human-typed date-time-plus-timezone expression into another
//! timezone and render a one-line reply.
//!
//! Input takes the form `<date-time expression> to <target zone token>`,
//! e.g. `2010-02-04T14:39:28 PST to EST`. The date-time segment is resolved
//! against a fixed, ordered list of format patterns (ISO-8601 first); the
//! target token may be a full IANA identifier, a numeric offset, or a
//! colloquial abbreviation such as `PST`. Conversion preserves the absolute
//! instant and changes only the display zone. Every failure is classified
//! into exactly one fixed diagnostic line — the caller always receives a
//! single string, success or failure.
//!
//! All state is `const`: the pattern list and abbreviation table are
//! process-wide constants, so concurrent pipeline invocations need no
//! coordination.
//!
//! ## Modules
//!
//! - [`split`] — raw text → date-time segment + target zone token
//! - [`parse`] — ordered format-pattern date-time parsing
//! - [`zone`] — zone-token resolution (regions, offsets, abbreviations)
//! - [`stamp`] — the instant-with-zone value and conversion
//! - [`format`] — fixed output rendering and reply composition
//! - [`pipeline`] — orchestration and the catch-all string boundary
//! - [`error`] — error types
//!
//! ```
//! use zoneshift::convert_command;
//!
//! let reply = convert_command("2010-02-04T14:39:28 PST to EST");
//! assert_eq!(
//!     reply,
//!     "2010-02-04T14:39:28 PST to EST is *Feb 04, 2010 5:39 PM EST*."
//! );
//! ```

pub mod error;
pub mod format;
pub mod parse;
pub mod pipeline;
pub mod split;
pub mod stamp;
pub mod zone;

pub use error::ConvertError;
pub use format::{compose_reply, format_stamp, OUTPUT_FORMAT};
pub use parse::{parse_zoned, FormatPattern, PATTERNS};
pub use pipeline::{convert_command, run, Conversion};
pub use split::split;
pub use stamp::ZonedStamp;
pub use zone::{resolve, Zone};
