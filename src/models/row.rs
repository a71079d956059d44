use serde::{Deserialize, Serialize};

/// One scheduled class occurrence, as returned by the server.
///
/// The server emits a flat JSON array of these records, already sorted by
/// (day, start). Rows have no identity beyond their position in the array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableRow {
    pub day: String,          // ⇔ "MON", "TUES", … (raw server token)
    pub start: String,        // ⇔ "09:00"
    pub subject_code: String, // ⇔ e.g. "CS201"
    pub room: String,
    pub faculty: String,
}
