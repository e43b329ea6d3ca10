// src/pipeline/timestamp.rs

//! Archive timestamp display.
//!
//! Snapshot timestamps are 14 ASCII digits, `YYYYMMDDHHmmss`, with no zone.
//! They are shown as naive wall-clock values.

use std::fmt::Write;
use std::ops::Range;

use chrono::{Locale, NaiveDate, NaiveDateTime};

/// Display text for a timestamp that has the wrong shape or is out of range.
pub const INVALID_TIMESTAMP: &str = "Invalid Date";

/// Default display pattern.
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The locale's own date and time representation.
pub const LOCALE_FORMAT: &str = "%x %X";

/// Locale setting meaning "read it from the environment".
pub const AUTO_LOCALE: &str = "auto";

/// Formats snapshot timestamps with a chrono strftime pattern, optionally
/// localized (month and day names, `%x`, `%X`, `%c`).
#[derive(Debug, Clone)]
pub struct TimestampFormatter {
    pattern: String,
    locale: Option<Locale>,
}

impl Default for TimestampFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT)
    }
}

impl TimestampFormatter {
    /// Unlocalized (POSIX) formatter. The pattern is expected to be valid
    /// (see `Config::validate`).
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            locale: None,
        }
    }

    pub fn with_locale(pattern: impl Into<String>, locale: Locale) -> Self {
        Self {
            pattern: pattern.into(),
            locale: Some(locale),
        }
    }

    /// Build from a locale setting: `auto` (host environment), `C`/`POSIX`,
    /// or a name such as `fr_FR`. Unknown names render unlocalized.
    pub fn for_locale_setting(pattern: impl Into<String>, setting: &str) -> Self {
        let locale = if setting == AUTO_LOCALE {
            host_locale()
        } else {
            let locale = parse_locale(setting);
            if locale.is_none() && !is_posix(setting) {
                log::warn!("Unknown locale {setting:?}; timestamps are not localized");
            }
            locale
        };
        Self {
            pattern: pattern.into(),
            locale,
        }
    }

    pub fn locale(&self) -> Option<Locale> {
        self.locale
    }

    /// Render a raw timestamp.
    ///
    /// Absent or empty input gives an empty string; malformed input gives
    /// [`INVALID_TIMESTAMP`]. Never panics.
    pub fn format(&self, raw: Option<&str>) -> String {
        let Some(raw) = raw.filter(|s| !s.is_empty()) else {
            return String::new();
        };

        match parse_timestamp(raw) {
            Some(datetime) => self.render(datetime),
            None => {
                log::debug!("Unparseable snapshot timestamp {raw:?}");
                INVALID_TIMESTAMP.to_string()
            }
        }
    }

    /// Falls back to the default pattern if the configured one is unusable.
    fn render(&self, datetime: NaiveDateTime) -> String {
        let mut out = String::new();
        let written = match self.locale {
            Some(locale) => write!(
                out,
                "{}",
                datetime.and_utc().format_localized(&self.pattern, locale)
            ),
            None => write!(out, "{}", datetime.format(&self.pattern)),
        };
        if written.is_ok() {
            return out;
        }
        log::warn!("Bad timestamp pattern {:?}, using default", self.pattern);
        datetime.format(DEFAULT_FORMAT).to_string()
    }
}

/// Locale from `LC_ALL`, `LC_TIME` or `LANG`, first non-empty wins.
pub fn host_locale() -> Option<Locale> {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|value| !value.is_empty()))
        .and_then(|value| parse_locale(&value))
}

/// Parse a POSIX locale string (`fr_FR.UTF-8`, `de_DE@euro`) into a chrono locale.
pub fn parse_locale(value: &str) -> Option<Locale> {
    let name = value.split(['.', '@']).next().unwrap_or(value);
    if is_posix(name) {
        return None;
    }
    Locale::try_from(name).ok()
}

fn is_posix(name: &str) -> bool {
    matches!(name, "" | "C" | "POSIX")
}

/// Format with the default pattern.
pub fn format_timestamp(raw: Option<&str>) -> String {
    TimestampFormatter::default().format(raw)
}

/// Parse the first 14 characters as `YYYY MM DD HH mm ss`.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let year = digits(raw, 0..4)?;
    let month = digits(raw, 4..6)?;
    let day = digits(raw, 6..8)?;
    let hour = digits(raw, 8..10)?;
    let minute = digits(raw, 10..12)?;
    let second = digits(raw, 12..14)?;

    NaiveDate::from_ymd_opt(year as i32, month, day)?.and_hms_opt(hour, minute, second)
}

/// A fixed-width, all-digit field. Short input or a non-boundary index gives None.
fn digits(raw: &str, range: Range<usize>) -> Option<u32> {
    raw.get(range)
        .filter(|field| field.bytes().all(|b| b.is_ascii_digit()))?
        .parse()
        .ok()
}
