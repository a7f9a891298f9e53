/// Formats a millisecond offset as `mm:ss.fff`.
///
/// Minutes are zero padded to two digits and keep growing past an hour,
/// seconds always carry three decimals.
///
/// # Example
///
/// ```ignore
/// assert_eq!(format_offset(83_250), "01:23.250");
/// ```
pub fn format_offset(ms: i64) -> String {
    let sign = if ms < 0 { "-" } else { "" };
    let ms = ms.unsigned_abs();
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) as f64 / 1000.0;

    format!("{sign}{minutes:02}:{seconds:06.3}")
}

/// Inserts a space before every uppercase letter that does not start the input.
///
/// Actor types are reported as `DarkKnight`, the job table knows `Dark Knight`.
pub fn split_pascal_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len() + 4);

    for (index, ch) in value.chars().enumerate() {
        if index > 0 && ch.is_ascii_uppercase() {
            result.push(' ');
        }
        result.push(ch);
    }

    result
}
