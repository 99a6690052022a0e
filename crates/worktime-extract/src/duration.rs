//! Duration-notation decoding.

/// Decodes the report's compact duration notation into decimal hours.
///
/// Tokens are whitespace separated; a trailing `h` counts whole hours
/// and a trailing `m` counts minutes. Unrecognized tokens contribute
/// nothing, so a blank or mangled cell decodes to `0.0` instead of
/// poisoning downstream sums.
///
/// ```
/// use worktime_extract::decode_duration;
///
/// assert_eq!(decode_duration("2h 30m"), 2.5);
/// assert_eq!(decode_duration("45m"), 0.75);
/// assert_eq!(decode_duration(""), 0.0);
/// ```
pub fn decode_duration(text: &str) -> f64 {
    let mut minutes: i64 = 0;
    for token in text.split_whitespace() {
        if let Some(count) = token.strip_suffix('h') {
            if let Ok(hours) = count.parse::<i64>() {
                minutes += hours * 60;
            }
        } else if let Some(count) = token.strip_suffix('m') {
            if let Ok(part) = count.parse::<i64>() {
                minutes += part;
            }
        }
    }
    minutes as f64 / 60.0
}
