//! Grouping of flat timetable rows into per-day buckets.

use crate::models::row::TimetableRow;

/// One day's worth of classes, in the order the server sent them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    pub day: String,
    pub rows: Vec<TimetableRow>,
}

/// Fold rows into per-day groups.
///
/// The raw `day` string is the bucket key (no normalization). Day order is
/// first occurrence within the input; per-day row order is the original
/// order. Every input row lands in exactly one bucket.
pub fn group_by_day(rows: &[TimetableRow]) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();

    for row in rows {
        match groups.iter_mut().find(|g| g.day == row.day) {
            Some(group) => group.rows.push(row.clone()),
            None => groups.push(DayGroup {
                day: row.day.clone(),
                rows: vec![row.clone()],
            }),
        }
    }

    groups
}
