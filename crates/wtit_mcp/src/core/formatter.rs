use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Datelike, FixedOffset, SecondsFormat, Utc};
use chrono_tz::Tz;

use crate::core::{
    clock::{Clock, SystemClock},
    error::{TimeFormatError, TimeFormatResult},
    models::{FormatDefaults, FormatOptions, TimeSnapshot},
    utils::{MAX_YEAR, MIN_YEAR, UTC_TIMEZONE, WALL_CLOCK_FORMAT, format_utc_offset, non_blank},
};

/// Renders the current time as timezone-aware ISO 8601 strings
#[derive(Clone)]
pub struct TimeFormatter {
    clock: Arc<dyn Clock>,
    defaults: FormatDefaults,
    local_timezone: Tz,
}

impl TimeFormatter {
    pub fn new(defaults: FormatDefaults) -> Self {
        Self::with_clock(defaults, Arc::new(SystemClock))
    }

    pub fn with_clock(defaults: FormatDefaults, clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            defaults,
            local_timezone: detect_local_timezone(),
        }
    }

    pub fn defaults(&self) -> &FormatDefaults {
        &self.defaults
    }

    /// IANA name of the host's configured timezone
    pub fn local_timezone_name(&self) -> &str {
        self.local_timezone.name()
    }

    /// Pick the timezone a query renders in.
    ///
    /// The caller's value wins, then the configured default, then the host's
    /// local timezone. Blank values count as not provided.
    pub fn resolve_timezone<'a>(&'a self, options: &'a FormatOptions) -> &'a str {
        non_blank(options.timezone.as_deref())
            .or_else(|| non_blank(Some(self.defaults.timezone.as_str())))
            .unwrap_or_else(|| self.local_timezone_name())
    }

    fn include_milliseconds(&self, options: &FormatOptions) -> bool {
        options
            .include_milliseconds
            .unwrap_or(self.defaults.include_milliseconds)
    }

    pub fn current_snapshot(&self, options: &FormatOptions) -> TimeFormatResult<TimeSnapshot> {
        self.snapshot_at(self.clock.now(), options)
    }

    pub fn current_iso8601(&self, options: &FormatOptions) -> TimeFormatResult<String> {
        self.iso8601_at(self.clock.now(), options)
    }

    pub fn current_timestamp_millis(&self) -> i64 {
        self.clock.now().timestamp_millis()
    }

    pub fn snapshot_at(
        &self,
        instant: DateTime<Utc>,
        options: &FormatOptions,
    ) -> TimeFormatResult<TimeSnapshot> {
        let timezone = self.resolve_timezone(options);
        let iso8601 = format_iso8601(&instant, timezone, self.include_milliseconds(options))?;

        Ok(TimeSnapshot {
            iso8601,
            timestamp_millis: instant.timestamp_millis(),
            timezone: timezone.to_string(),
        })
    }

    pub fn iso8601_at(
        &self,
        instant: DateTime<Utc>,
        options: &FormatOptions,
    ) -> TimeFormatResult<String> {
        format_iso8601(
            &instant,
            self.resolve_timezone(options),
            self.include_milliseconds(options),
        )
    }
}

impl Default for TimeFormatter {
    fn default() -> Self {
        Self::new(FormatDefaults::default())
    }
}

fn detect_local_timezone() -> Tz {
    match iana_time_zone::get_timezone() {
        Ok(tz_name) => match tz_name.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                tracing::warn!("Could not parse timezone '{}', defaulting to UTC", tz_name);
                chrono_tz::UTC
            }
        },
        Err(_) => {
            tracing::warn!("Could not detect system timezone, defaulting to UTC");
            chrono_tz::UTC
        }
    }
}

pub fn parse_timezone(timezone_name: &str) -> TimeFormatResult<Tz> {
    Tz::from_str(timezone_name).map_err(|_| TimeFormatError::invalid_timezone(timezone_name))
}

fn ensure_four_digit_year(year: i32) -> TimeFormatResult<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(TimeFormatError::format_failure(format!(
            "year {} is outside the four-digit ISO 8601 range",
            year
        )))
    }
}

/// Signed difference between the wall clock in `tz` and the UTC wall clock
pub fn utc_offset_minutes(instant: &DateTime<Utc>, tz: &Tz) -> i64 {
    let local_wall_clock = instant.with_timezone(tz).naive_local();
    (local_wall_clock - instant.naive_utc()).num_minutes()
}

/// Render `instant` as ISO 8601 in the named timezone.
///
/// `"UTC"` (exact match) uses the `Z` designator. Any other name is looked up
/// in the IANA database and gets a `±HH:MM` suffix. Milliseconds always come
/// from the instant itself.
///
/// Historical local-mean-time offsets carry seconds. The wall clock is
/// rendered at the minute-truncated offset so the string still names
/// `instant`.
pub fn format_iso8601(
    instant: &DateTime<Utc>,
    timezone: &str,
    include_milliseconds: bool,
) -> TimeFormatResult<String> {
    if timezone == UTC_TIMEZONE {
        ensure_four_digit_year(instant.year())?;
        let precision = if include_milliseconds {
            SecondsFormat::Millis
        } else {
            SecondsFormat::Secs
        };
        return Ok(instant.to_rfc3339_opts(precision, true));
    }

    let tz = parse_timezone(timezone)?;
    let offset_minutes = utc_offset_minutes(instant, &tz);
    let offset = i32::try_from(offset_minutes * 60)
        .ok()
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| {
            TimeFormatError::format_failure(format!(
                "offset of {} minutes in {} is out of range",
                offset_minutes, timezone
            ))
        })?;
    let local = instant.with_timezone(&offset);
    ensure_four_digit_year(local.year())?;

    let mut iso = local.format(WALL_CLOCK_FORMAT).to_string();
    if include_milliseconds {
        iso.push_str(&format!(".{:03}", instant.timestamp_subsec_millis()));
    }
    iso.push_str(&format_utc_offset(offset_minutes));

    Ok(iso)
}
