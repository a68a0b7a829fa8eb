use chrono::NaiveDateTime;

/// Returns the first run of ASCII digits in `raw` as an integer.
///
/// `"25 ans"` gives 25, `"plus de 4h"` gives 4. No sign, no decimals.
pub fn extract_first_integer(raw: Option<&str>) -> Option<i64> {
    let raw = raw?;
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let digits: &str = raw[start..]
        .split(|c: char| !c.is_ascii_digit())
        .next()
        .unwrap_or_default();
    digits.parse::<i64>().ok()
}

/// Splits a comma-separated multi-select answer into trimmed, non-empty tags.
pub fn split_multiselect(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses the form's submission timestamp into microseconds since the epoch.
///
/// Exports carry a trailing zone label (`UTC+1`, `GMT+1`, `CET`) that is not consistent
/// across locales; it is ignored and the wall-clock time kept.
pub fn parse_submission_timestamp(raw: Option<&str>) -> Option<i64> {
    static FORMATS: &[&str] = &[
        "%Y/%m/%d %H:%M:%S%.f",
        "%Y/%m/%d %H:%M:%S",
        "%d/%m/%Y %H:%M:%S",
        "%d/%m/%Y %H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
    ];

    let trimmed = raw?.trim();
    let without_zone = strip_zone_label(trimmed);

    FORMATS.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(without_zone, fmt)
            .ok()
            .map(|dt| dt.and_utc().timestamp_micros())
    })
}

fn strip_zone_label(value: &str) -> &str {
    match value.rsplit_once(' ') {
        Some((head, tail))
            if tail.starts_with("UTC")
                || tail.starts_with("GMT")
                || tail.chars().all(|c| c.is_ascii_uppercase()) =>
        {
            head.trim_end()
        }
        _ => value,
    }
}
