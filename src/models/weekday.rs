use chrono::Weekday;

/// Parse a server day token into a calendar weekday.
///
/// The timetable data uses abbreviated uppercase tokens ("MON", "TUES",
/// "THUR", …); common short and long spellings are accepted as well.
/// Returns None for anything unrecognized — such rows still group and
/// render normally, just without a day color.
pub fn parse_day(token: &str) -> Option<Weekday> {
    match token.trim().to_uppercase().as_str() {
        "MON" | "MONDAY" => Some(Weekday::Mon),
        "TUE" | "TUES" | "TUESDAY" => Some(Weekday::Tue),
        "WED" | "WEDNESDAY" => Some(Weekday::Wed),
        "THU" | "THUR" | "THURS" | "THURSDAY" => Some(Weekday::Thu),
        "FRI" | "FRIDAY" => Some(Weekday::Fri),
        "SAT" | "SATURDAY" => Some(Weekday::Sat),
        "SUN" | "SUNDAY" => Some(Weekday::Sun),
        _ => None,
    }
}
