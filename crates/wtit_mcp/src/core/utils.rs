// Constants for format strings and well-known names
pub const WALL_CLOCK_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
pub const UTC_TIMEZONE: &str = "UTC";

/// Range of years that fit the four-digit `YYYY` field
pub const MIN_YEAR: i32 = 0;
pub const MAX_YEAR: i32 = 9999;

/// Available resource URIs for the WTIT MCP Server
pub const AVAILABLE_RESOURCES: &[&str] = &["time://status", "time://help"];

/// Format a signed UTC offset given in minutes as `±HH:MM`
///
/// # Arguments
///
/// * `offset_minutes` - Local wall clock minus UTC wall clock, in minutes
///
/// # Returns
///
/// The offset suffix, `+` for zero and positive offsets
pub fn format_utc_offset(offset_minutes: i64) -> String {
    let sign = if offset_minutes >= 0 { '+' } else { '-' };
    let magnitude = offset_minutes.unsigned_abs();

    format!("{}{:02}:{:02}", sign, magnitude / 60, magnitude % 60)
}

/// Trim a caller-supplied timezone, treating blank input as absent
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{format_utc_offset, non_blank};

    #[test]
    fn test_format_utc_offset() {
        // Whole hours
        assert_eq!(format_utc_offset(0), "+00:00");
        assert_eq!(format_utc_offset(-300), "-05:00");
        assert_eq!(format_utc_offset(540), "+09:00");

        // Half hours
        assert_eq!(format_utc_offset(330), "+05:30");
        assert_eq!(format_utc_offset(-210), "-03:30");

        // Nepal timezone (UTC+5:45)
        assert_eq!(format_utc_offset(345), "+05:45");

        // Line Islands
        assert_eq!(format_utc_offset(840), "+14:00");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(Some(" Asia/Tokyo ")), Some("Asia/Tokyo"));
    }
}
