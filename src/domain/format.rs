/// Shown wherever a listing has no usable verification date.
pub const UNVERIFIED: &str = "Unverified";

/// Reformats an admin-entered `YYYY-MM-DD` date as `MM/DD/YYYY`.
///
/// Total over arbitrary input: absent or empty input yields [`UNVERIFIED`],
/// and anything that does not split on `-` into exactly three non-empty
/// parts passes through unchanged.
pub fn verified_date(value: Option<&str>) -> String {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return UNVERIFIED.to_string(),
    };

    let parts: Vec<&str> = value.split('-').collect();
    match parts.as_slice() {
        [year, month, day] if !year.is_empty() && !month.is_empty() && !day.is_empty() => {
            format!("{month}/{day}/{year}")
        }
        _ => value.to_string(),
    }
}
